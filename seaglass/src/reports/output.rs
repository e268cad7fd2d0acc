//! Output trait for rendering reports to different formats.

use std::io::{self, Write};

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render an indented key-value pair.
    fn key_value_indented(&mut self, key: &str, value: &str);

    /// Render an error message.
    fn error(&mut self, msg: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a progress or summary line that must not mix with results.
    fn status(&mut self, msg: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Emit generated content exactly as given.
    ///
    /// Unlike the other methods this reports write failures, since the
    /// content is the product of the command.
    fn raw(&mut self, text: &str) -> io::Result<()>;

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output) -> io::Result<()>;
}

/// Terminal output implementation.
///
/// Results go to stdout; diagnostics and status lines go to stderr so that
/// `seaglass build > out.css` captures only the stylesheet.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn status(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn raw(&mut self, text: &str) -> io::Result<()> {
        write_raw(&mut io::stdout().lock(), text)
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Write and flush `text`. A reader that went away (`seaglass build | head`)
/// is not an error; anything else, such as a full disk, is.
fn write_raw(writer: &mut impl Write, text: &str) -> io::Result<()> {
    match writer.write_all(text.as_bytes()).and_then(|()| writer.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

/// Output that records what was rendered, for tests.
#[cfg(test)]
#[derive(Default)]
pub struct RecordedOutput {
    pub stdout: String,
    pub stderr: String,
}

#[cfg(test)]
impl Output for RecordedOutput {
    fn section(&mut self, name: &str) {
        self.stdout.push_str(&format!("{}:\n", name));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.stdout.push_str(&format!("  {}: {}\n", key, value));
    }

    fn error(&mut self, msg: &str) {
        self.stderr.push_str(&format!("error: {}\n", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.stderr.push_str(&format!("warning: {}\n", msg));
    }

    fn status(&mut self, msg: &str) {
        self.stderr.push_str(&format!("{}\n", msg));
    }

    fn preformatted(&mut self, text: &str) {
        self.stdout.push_str(&format!("{}\n", text));
    }

    fn raw(&mut self, text: &str) -> io::Result<()> {
        self.stdout.push_str(text);
        Ok(())
    }

    fn newline(&mut self) {
        self.stdout.push('\n');
    }
}
