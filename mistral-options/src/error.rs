//! Error types for building and resolving chat options

use thiserror::Error;

/// Result type for options operations
pub type OptionsResult<T> = Result<T, OptionsError>;

/// Errors raised synchronously while constructing or resolving options
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// An argument was rejected at the point of the call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A function name did not resolve to any registered callback
    #[error("No function callback found for name: {0}")]
    UnknownFunction(String),

    /// A model identifier is not one of the known chat models
    #[error("Unknown chat model: {0}")]
    UnknownModel(String),

    /// The provider does not support the requested parameter
    #[error("Parameter '{parameter}' is not supported by provider '{provider}'")]
    UnsupportedParameter {
        provider: String,
        parameter: String,
    },
}

impl OptionsError {
    /// Shorthand for an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        OptionsError::InvalidArgument(message.into())
    }

    /// Whether this error is of the invalid-argument kind
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, OptionsError::InvalidArgument(_))
    }
}
