//! Intent interpretation error types.

use thiserror::Error;

/// Failures talking to an interpreter service.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("service returned no content")]
    EmptyResponse,

    #[error("undecodable response: {0}")]
    Decode(String),

    #[error("no response within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// The only two errors that cross the search core's boundary.
///
/// `Display` is the user-facing message; the underlying cause of
/// `InterpretationFailed` is available through `source()`.
#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("describe what you are looking for")]
    InvalidInput,

    #[error("failed to get AI recommendations, try again")]
    InterpretationFailed(#[from] BackendError),
}

/// Longest service error body kept in [`BackendError::Status`].
pub const MAX_ERROR_BODY_CHARS: usize = 200;

/// Cut an error body down to [`MAX_ERROR_BODY_CHARS`] characters.
pub(crate) fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

/// Convenience alias for backend results.
pub type BackendResult<T> = Result<T, BackendError>;

/// Convenience alias for interpretation results.
pub type InterpretResult<T> = Result<T, InterpretError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn user_facing_messages() {
        assert_eq!(
            InterpretError::InvalidInput.to_string(),
            "describe what you are looking for"
        );
        let err = InterpretError::from(BackendError::EmptyResponse);
        assert_eq!(err.to_string(), "failed to get AI recommendations, try again");
    }

    #[test]
    fn failure_keeps_cause() {
        let err = InterpretError::from(BackendError::Status {
            status: 503,
            body: "overloaded".into(),
        });
        let cause = err.source().expect("cause should be attached");
        assert_eq!(cause.to_string(), "service returned HTTP 503: overloaded");
    }

    #[test]
    fn truncate_body_counts_chars() {
        assert_eq!(truncate_body("short"), "short");
        let long = "é".repeat(MAX_ERROR_BODY_CHARS + 50);
        assert_eq!(truncate_body(&long).chars().count(), MAX_ERROR_BODY_CHARS);
    }
}
