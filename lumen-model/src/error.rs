//! Model-level errors.

/// Result type for model construction and validation.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while constructing or validating model values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("invalid photo id: {0}")]
    InvalidId(String),
}
