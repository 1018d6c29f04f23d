use thiserror::Error;

/// Raised when a remote call cannot produce a well-formed result.
///
/// All failure causes collapse into this one kind; the variants exist to
/// carry a useful message, not to let callers branch on the cause.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {reason}")]
    Request { reason: String },

    #[error("Service returned status {status}")]
    Status { status: u16 },

    #[error("Malformed response body: {reason}")]
    Payload { reason: String },

    #[error("Request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_formatting() {
        let err = TransportError::Status { status: 503 };
        assert_eq!(err.to_string(), "Service returned status 503");

        let err = TransportError::Timeout { duration_ms: 10000 };
        assert!(err.to_string().contains("10000"));

        let err = TransportError::Payload {
            reason: "roc curve is empty".to_string(),
        };
        assert!(err.to_string().contains("roc curve is empty"));
    }
}
