use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use seaglass_core::ShadowError;
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn invalid_color_name_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidColorName {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }

    pub fn malformed_variable_error(
        &self,
        token: impl Into<String>,
        value: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::MalformedVariable {
            src: self.named_source(),
            span,
            token: token.into(),
            value: value.into(),
        })
    }

    pub fn unknown_dimension_error(
        &self,
        dimension: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownDimension {
            src: self.named_source(),
            span,
            dimension: dimension.into(),
        })
    }

    pub fn invalid_shadow_error(
        &self,
        key: impl Into<String>,
        source: ShadowError,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidShadow {
            src: self.named_source(),
            span,
            key: key.into(),
            source,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a seaglass.toml or pass its location with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seaglass.toml")]
    #[diagnostic(code(seaglass::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(seaglass::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid color name '{name}'")]
    #[diagnostic(
        code(seaglass::invalid_color_name),
        help("{reason}. Use only letters, numbers, underscores, and dashes.")
    )]
    InvalidColorName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid color name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("malformed custom property reference '{value}' for '{token}'")]
    #[diagnostic(
        code(seaglass::malformed_variable),
        help("write a single custom property such as var(--color-{token}), or a literal color")
    )]
    MalformedVariable {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected var(--name)")]
        span: Option<SourceSpan>,
        token: String,
        value: String,
    },

    #[error("unknown scale dimension '{dimension}'")]
    #[diagnostic(
        code(seaglass::unknown_dimension),
        help(
            "extendable dimensions are: height, width, minHeight, maxHeight, minWidth, maxWidth, borderRadius, boxShadow, opacity"
        )
    )]
    UnknownDimension {
        #[source_code]
        src: NamedSource<String>,
        #[label("not an extendable dimension")]
        span: Option<SourceSpan>,
        dimension: String,
    },

    #[error("invalid box shadow '{key}'")]
    #[diagnostic(
        code(seaglass::invalid_shadow),
        help("each comma-separated layer needs 4 or 5 parts, e.g. '0 4px 6px -1px rgba(0, 0, 0, 0.1)'")
    )]
    InvalidShadow {
        #[source_code]
        src: NamedSource<String>,
        #[label("malformed shadow")]
        span: Option<SourceSpan>,
        key: String,
        #[source]
        source: ShadowError,
    },
}
