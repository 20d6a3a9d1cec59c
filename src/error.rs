use serde::Serialize;
use thiserror::Error;

// ============================================================================
// Error Kinds
// ============================================================================

/// Classification of a single rule failure.
///
/// `InvalidDate`, `InvalidMailAddress` and `InvalidUri` are specialisations of
/// `InvalidValue`, kept apart so diagnostics can say which format was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Error)]
pub enum ErrorKind {
    #[error("Element must not have empty value")]
    EmptyValue,

    #[error("Element must not have value")]
    NonEmptyValue,

    #[error("Element must contain required sub-elements")]
    InvalidElement,

    #[error("Element must have valid value")]
    InvalidValue,

    #[error("Element must contain a valid date (RFC822)")]
    InvalidDate,

    #[error("Element must contain a valid mail address (RFC5322)")]
    InvalidMailAddress,

    #[error("Element must contain a valid URI (RFC3986)")]
    InvalidUri,
}

// ============================================================================
// Value Errors
// ============================================================================

/// Failure of one syntactic check on one value.
///
/// `reason` carries the detail from the underlying parser, when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{}", .kind, reason_suffix(.reason))]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub reason: Option<String>,
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|r| format!(": {}", r))
        .unwrap_or_default()
}

impl ValidationError {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, reason: None }
    }

    pub fn with_reason(kind: ErrorKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: Some(reason.into()),
        }
    }
}

impl From<ErrorKind> for ValidationError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}
