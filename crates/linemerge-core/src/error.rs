// Errors raised at the dynamic input boundary

/// Errors produced when untyped input does not have the shape an operation expects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl MergeError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        MergeError::InvalidArgument { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;
