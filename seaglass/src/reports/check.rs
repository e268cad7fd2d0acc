//! Check command report data structures.

use std::{io, path::PathBuf};

use seaglass_core::DarkMode;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// Number of color tokens after seeding the registry.
    pub token_count: usize,
    /// Whether `theme.colors` replaced the built-in palette.
    pub declares_colors: bool,
    /// Number of `theme.extend` entries.
    pub extension_count: usize,
    pub dark_mode: DarkMode,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) -> io::Result<()> {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return Ok(());
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        let palette = if self.declares_colors {
            "declared"
        } else {
            "built-in"
        };
        out.key_value_indented("colors", &format!("{} ({})", self.token_count, palette));
        out.key_value_indented("scale extensions", &self.extension_count.to_string());
        out.key_value_indented("dark mode", &self.dark_mode.to_string());
        Ok(())
    }
}
