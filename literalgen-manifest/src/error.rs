use std::path::PathBuf;

use literalgen_core::{FloatWidth, syntax::format_float};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the manifest text and its filename so error factories only need
/// the details specific to each failure.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "literalgen.toml");
/// ctx.validation_error_at("missing required field", None);
/// ctx.unknown_type_error("Pointt", "binding 'origin'", span);
/// ```
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

    /// Create a validation error with a span.
    pub fn validation_error_at(
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

    /// Create an unknown type error.
    pub fn unknown_type_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownType {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid type expression error.
    pub fn invalid_type_error(
        &self,
        expr: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidType {
            src: self.named_source(),
            span,
            expr: expr.into(),
            reason: reason.into(),
        })
    }

    /// Create a value mismatch error.
    pub fn value_mismatch_error(
        &self,
        path: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ValueMismatch {
            src: self.named_source(),
            span,
            path: path.into(),
            expected: expected.into(),
            found: found.into(),
        })
    }

    /// Create an integer overflow error.
    pub fn integer_overflow_error(
        &self,
        path: impl Into<String>,
        value: i64,
        ty: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::IntegerOverflow {
            src: self.named_source(),
            span,
            path: path.into(),
            value,
            ty: ty.into(),
        })
    }

    /// Create a float overflow error.
    pub fn float_overflow_error(
        &self,
        path: impl Into<String>,
        value: f64,
        ty: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::FloatOverflow {
            src: self.named_source(),
            span,
            path: path.into(),
            value: format_float(value, FloatWidth::F64),
            ty: ty.into(),
        })
    }

    /// Create a duplicate binding error.
    pub fn duplicate_binding_error(
        &self,
        name: impl Into<String>,
        first_span: SourceSpan,
        second_span: SourceSpan,
    ) -> Box<Error> {
        Box::new(Error::DuplicateBinding {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.into(),
        })
    }

    /// Create a reserved keyword error.
    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest location with '--config <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse literalgen.toml")]
    #[diagnostic(code(literalgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown type '{name}' in {context}")]
    #[diagnostic(
        code(literalgen::unknown_type),
        help(
            "declare it under [types.{name}] or use a built-in type: bool, string, int, int8..int64, uint, uint8..uint64, byte, rune, float32, float64, any"
        )
    )]
    UnknownType {
        #[source_code]
        src: NamedSource<String>,
        #[label("not declared")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid type expression '{expr}'")]
    #[diagnostic(
        code(literalgen::invalid_type),
        help("{reason}. Type expressions look like 'Point', '*Point', '[]int' or '[4]uint8'")
    )]
    InvalidType {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid type")]
        span: Option<SourceSpan>,
        expr: String,
        reason: String,
    },

    #[error("expected {expected} at '{path}', found {found}")]
    #[diagnostic(code(literalgen::value_mismatch))]
    ValueMismatch {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected {expected}")]
        span: Option<SourceSpan>,
        path: String,
        expected: String,
        found: String,
    },

    #[error("value {value} at '{path}' does not fit in {ty}")]
    #[diagnostic(
        code(literalgen::integer_overflow),
        help("use a wider integer type or a smaller value")
    )]
    IntegerOverflow {
        #[source_code]
        src: NamedSource<String>,
        #[label("out of range for {ty}")]
        span: Option<SourceSpan>,
        path: String,
        value: i64,
        ty: String,
    },

    #[error("value {value} at '{path}' is out of range for {ty}")]
    #[diagnostic(
        code(literalgen::float_overflow),
        help("use float64 for values beyond the float32 range")
    )]
    FloatOverflow {
        #[source_code]
        src: NamedSource<String>,
        #[label("out of range for {ty}")]
        span: Option<SourceSpan>,
        path: String,
        value: String,
        ty: String,
    },

    #[error("duplicate binding '{name}'")]
    #[diagnostic(
        code(literalgen::duplicate_binding),
        help("every binding becomes a package-level variable, so names must be unique")
    )]
    DuplicateBinding {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        name: String,
    },

    #[error("{message}")]
    #[diagnostic(code(literalgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a Go keyword")]
    #[diagnostic(help("rename '{name}' to something else, e.g. '{name}_' or '{name}Value'"))]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("keyword used as {context} here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(help(
        "{reason}. Use only letters, digits and underscores, starting with a letter or underscore."
    ))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}
