//! Error types for identifier normalization and key parsing.

use thiserror::Error;

/// Errors that can occur when building identifiers, parsing location keys,
/// or loading a padding policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// No value was supplied to construct or re-normalize an identifier.
    #[error("cannot create identifier without a value")]
    MissingValue,

    /// The key string is empty.
    #[error("key cannot be empty")]
    Empty,

    /// The key format is invalid.
    #[error("invalid key format: {message}")]
    InvalidFormat { message: String },

    /// A padding policy setting could not be accepted.
    #[error("invalid padding policy: {message}")]
    InvalidPolicy { message: String },
}

impl IdError {
    pub(crate) fn invalid_format(message: impl Into<String>) -> Self {
        IdError::InvalidFormat {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_policy(message: impl Into<String>) -> Self {
        IdError::InvalidPolicy {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates an absent input value.
    pub fn is_missing_value(&self) -> bool {
        matches!(self, IdError::MissingValue)
    }

    /// Returns true if this error came from policy configuration.
    pub fn is_policy_error(&self) -> bool {
        matches!(self, IdError::InvalidPolicy { .. })
    }
}
