//! Error types for yamlcompat.
//!
//! All errors are strongly typed using thiserror. Parse failures are
//! normalized to a single [`ParseError`] kind regardless of which engine
//! backend produced them, so callers can match on one error shape instead
//! of per-backend exception types.

use thiserror::Error;

use crate::engine::EngineKind;

/// One candidate engine that could not be selected, and why.
#[derive(Debug, Clone)]
pub struct EngineAttempt {
    /// The engine that was probed.
    pub kind: EngineKind,

    /// Human-readable reason the engine was unavailable.
    pub reason: String,
}

/// A YAML parse failure.
///
/// Both engine backends report syntax problems through this one type.
/// The message includes the backend's own description of the failure,
/// location included.
#[derive(Debug, Clone, Error)]
#[error("invalid YAML: {message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    /// Creates a parse error from a backend failure description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The backend's description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Top-level error type for yamlcompat.
#[derive(Debug, Error)]
pub enum YamlError {
    /// No engine could be selected at initialization. Fatal; carries the
    /// unavailability reason for every candidate that was tried.
    #[error("no YAML engine available: {}", describe_attempts(.attempts))]
    EngineUnavailable {
        /// Every candidate that was probed, in selection order.
        attempts: Vec<EngineAttempt>,
    },

    /// An engine name that is neither `"psych"` nor `"syck"`.
    #[error("invalid YAML engine: {name}")]
    InvalidEngine {
        /// The rejected name.
        name: String,
    },

    /// The input was not well-formed YAML.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Reading from or writing to a stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_attempts(attempts: &[EngineAttempt]) -> String {
    if attempts.is_empty() {
        return "no candidate engines were configured".to_string();
    }
    attempts
        .iter()
        .map(|attempt| format!("{}: {}", attempt.kind.name(), attempt.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

impl YamlError {
    /// Returns true if no engine could be selected.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::EngineUnavailable { .. })
    }

    /// Returns true if this is a rejected engine name.
    #[must_use]
    pub const fn is_invalid_engine(&self) -> bool {
        matches!(self, Self::InvalidEngine { .. })
    }

    /// Returns true if this is a parse failure.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns true if this is an I/O failure.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// Result type alias for yamlcompat operations.
pub type YamlResult<T> = Result<T, YamlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new("mapping values are not allowed at line 2 column 1");
        let msg = format!("{err}");
        assert!(msg.contains("invalid YAML"));
        assert!(msg.contains("line 2"));
    }

    #[test]
    fn test_invalid_engine_display() {
        let err = YamlError::InvalidEngine {
            name: "syckle".to_string(),
        };
        assert_eq!(format!("{err}"), "invalid YAML engine: syckle");
        assert!(err.is_invalid_engine());
    }

    #[test]
    fn test_unavailable_display_lists_attempts() {
        let err = YamlError::EngineUnavailable {
            attempts: vec![
                EngineAttempt {
                    kind: EngineKind::Psych,
                    reason: "not compiled in".to_string(),
                },
                EngineAttempt {
                    kind: EngineKind::Syck,
                    reason: "not compiled in".to_string(),
                },
            ],
        };
        let msg = format!("{err}");
        assert!(msg.contains("psych: not compiled in"));
        assert!(msg.contains("syck: not compiled in"));
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_unavailable_display_with_no_candidates() {
        let err = YamlError::EngineUnavailable { attempts: vec![] };
        let msg = format!("{err}");
        assert!(msg.contains("no candidate engines were configured"));
    }

    #[test]
    fn test_yaml_error_from_parse() {
        let err: YamlError = ParseError::new("bad document").into();
        assert!(err.is_parse());
        assert!(!err.is_unavailable());
    }

    #[test]
    fn test_yaml_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: YamlError = io.into();
        assert!(err.is_io());
        assert!(format!("{err}").contains("gone"));
    }
}
