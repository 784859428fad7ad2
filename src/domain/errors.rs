//! Error types surfaced by the service gate.
//!
//! Callers can always tell the three failure classes apart without parsing
//! message strings: malformed input (bad request), forbidden/not-found, and
//! opaque storage failures passed through unmodified.

pub use crate::validation::schema::{ConstraintCode, Violation, Violations};

/// Failure of a gated service operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request failed schema validation: structurally or semantically
    /// invalid payload. Carries the per-field violations.
    #[error("invalid request: {0}")]
    InvalidRequest(Violations),

    /// The request was well-formed but is not permitted: a business rule
    /// (e.g. minimum age) or an ownership/existence check rejected it.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The storage backend failed. The gate does not interpret these; they
    /// pass through unmodified for the caller to handle.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl ServiceError {
    /// True for the malformed-input class.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, ServiceError::InvalidRequest(_))
    }

    /// True for the forbidden/not-found class.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, ServiceError::Forbidden(_))
    }

    /// The violations behind a malformed-input failure, if any.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            ServiceError::InvalidRequest(violations) => Some(violations),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_error_kinds_are_distinguishable() {
        let invalid = ServiceError::InvalidRequest(Violations::single(Violation::new(
            "balance",
            ConstraintCode::NonNegative,
        )));
        assert!(invalid.is_invalid_request());
        assert!(!invalid.is_forbidden());
        assert!(invalid.violations().is_some());

        let forbidden = ServiceError::Forbidden("not permitted".to_string());
        assert!(forbidden.is_forbidden());
        assert!(!forbidden.is_invalid_request());
        assert!(forbidden.violations().is_none());

        let storage = ServiceError::from(anyhow!("connection refused"));
        assert!(!storage.is_invalid_request());
        assert!(!storage.is_forbidden());
    }

    #[test]
    fn test_invalid_request_display_names_fields() {
        let error = ServiceError::InvalidRequest(Violations::single(Violation::new(
            "currency",
            ConstraintCode::Length,
        )));
        assert_eq!(error.to_string(), "invalid request: currency: length");
    }
}
