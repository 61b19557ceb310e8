//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The nightly update itself is total and never produces one of these. They
/// are raised at the edges: building items from caller input and reading
/// configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a blank item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A configuration setting could not be interpreted.
    #[error("invalid setting `{key}`: {reason}")]
    InvalidSetting { key: String, reason: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_setting(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_setting_renders_key_and_reason() {
        let err = DomainError::invalid_setting("GILDED_ROSE_DAYS", "not a number");
        assert_eq!(
            err.to_string(),
            "invalid setting `GILDED_ROSE_DAYS`: not a number"
        );
    }

    #[test]
    fn validation_renders_message() {
        let err = DomainError::validation("name cannot be empty");
        assert_eq!(err.to_string(), "validation failed: name cannot be empty");
    }
}
