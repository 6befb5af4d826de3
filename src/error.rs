//! Error types for the scale rule evaluator

use std::fmt;
use thiserror::Error;

/// Main error type for rule parsing and configuration
#[derive(Error, Debug)]
pub enum ScaleRuleError {
    #[error("expression not parsable ({0})")]
    MalformedRule(String),

    #[error("invalid number {literal:?}: {reason}")]
    InvalidNumber { literal: String, reason: String },

    #[error("between conditions error ({0})")]
    InvalidRange(String),

    #[error("unknown combine strategy: {0}")]
    UnknownStrategy(String),

    #[error("rules are not a JSON array of strings: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScaleRuleError {
    pub(crate) fn invalid_number(literal: &str, reason: impl fmt::Display) -> Self {
        Self::InvalidNumber {
            literal: literal.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(feature = "python")]
impl From<ScaleRuleError> for pyo3::PyErr {
    fn from(err: ScaleRuleError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

/// Result type alias for the scale rule evaluator
pub type Result<T> = std::result::Result<T, ScaleRuleError>;

/// Panic payload raised by the `intersection-fatal` strategy.
///
/// This is never returned as an `Err`. Callers that want to survive it must
/// catch the unwind themselves and downcast the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnrecoverableIntersection {
    /// Matches seen after the first one
    pub extra_matches: usize,
}

impl fmt::Display for UnrecoverableIntersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scale rule panics: {} overlapping rule match(es)",
            self.extra_matches
        )
    }
}

impl std::error::Error for UnrecoverableIntersection {}
