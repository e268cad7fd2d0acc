use std::path::Path;

/// A glob pattern plus an optional file-extension allowlist.
///
/// `*` matches within one path segment and `**` matches across segments.
/// Relative patterns are resolved against the scanner's base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPattern {
    pub pattern: String,
    pub extensions: Vec<String>,
}

impl ScanPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            extensions: Vec::new(),
        }
    }

    /// Restrict matches to the given extensions (with or without a leading dot).
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.into().trim_start_matches('.').to_string())
            .collect();
        self
    }

    /// Whether `path` passes the extension allowlist. An empty list allows all.
    pub fn allows(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }

    /// The pattern joined onto `base`, with a leading `./` removed.
    ///
    /// `base` is a literal directory, so its glob metacharacters are escaped.
    pub(crate) fn resolve_against(&self, base: &Path) -> String {
        let pattern = self.pattern.strip_prefix("./").unwrap_or(&self.pattern);
        if Path::new(pattern).is_absolute() {
            return pattern.to_string();
        }
        let base = glob::Pattern::escape(&base.to_string_lossy());
        Path::new(&base).join(pattern).to_string_lossy().into_owned()
    }
}
