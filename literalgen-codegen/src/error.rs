use thiserror::Error;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Faults raised while turning a value into Go source.
///
/// Every variant aborts the whole generation; no partial literal is produced.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("field '{field}' of '{record}' is not exported and cannot be read")]
    UnexportedField { record: String, field: String },

    #[error("value for '{record}' has no field '{field}'")]
    MissingField { record: String, field: String },

    #[error("cannot render a {found} value as '{expected}'")]
    Mismatch {
        expected: String,
        found: &'static str,
    },

    #[error("value {value} does not fit in '{ty}'")]
    Overflow { ty: String, value: String },

    #[error("interface payload of kind {found} does not carry a type")]
    UntypedPayload { found: &'static str },

    #[error("pointer cycle detected while rendering '{ty}'")]
    Cycle { ty: String },

    #[error("no binding with id {0}")]
    UnknownBinding(usize),

    #[error("failed to write generated output")]
    Io(#[from] std::io::Error),
}
