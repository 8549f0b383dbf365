//! Error types for the page behavior controller.
//!
//! None of these ever reach the visitor: adapters log them to the console and
//! skip the affected behavior.

use thiserror::Error;

/// Configuration parsing and validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The embedded configuration block was not valid JSON for the schema.
    #[error("configuration could not be parsed")]
    Parse {
        /// Parser message.
        detail: String,
    },
    /// A field parsed but carried an unusable value.
    #[error("invalid configuration field")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Color decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Value was not a `#rrggbb` hex color.
    #[error("invalid hex color")]
    InvalidHex {
        /// Offending value.
        value: String,
    },
}

/// Failures raised while touching the document or browser storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// A required host object (window, document, root element) was absent.
    #[error("required host object missing")]
    Missing {
        /// Name of the missing object.
        what: &'static str,
    },
    /// A host call threw.
    #[error("host operation failed")]
    Operation {
        /// Operation that was attempted.
        operation: &'static str,
        /// Exception text reported by the host.
        detail: String,
    },
}

/// Umbrella error for the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Color error.
    #[error(transparent)]
    Color(#[from] ColorError),
    /// Document or storage error.
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Result alias used across the crate.
pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn umbrella_error_is_transparent() {
        let err = UiError::from(DomError::Operation {
            operation: "set_property",
            detail: "SyntaxError".to_string(),
        });
        assert_eq!(err.to_string(), "host operation failed");

        let err = UiError::from(ColorError::InvalidHex {
            value: "#12".to_string(),
        });
        assert_eq!(err.to_string(), "invalid hex color");
    }

    #[test]
    fn config_error_keeps_field_context() {
        let err = ConfigError::InvalidField {
            field: "reveal.threshold",
            reason: "out_of_range",
        };
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "reveal.threshold",
                ..
            }
        ));
        assert_eq!(err.to_string(), "invalid configuration field");
    }
}
