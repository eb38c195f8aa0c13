use thiserror::Error;

/// Result type alias for certproof operations
pub type Result<T> = std::result::Result<T, CertProofError>;

/// Errors that can occur while decoding, resolving or verifying a credential.
///
/// Expected verification failures (bad recipient, unattested issuer, hash
/// mismatch) are never errors; they are reported as a
/// [`VerificationVerdict`](crate::VerificationVerdict).
#[derive(Error, Debug)]
pub enum CertProofError {
    /// A field required for hashing was absent
    #[error("document is missing required field `{path}`")]
    MissingField {
        /// Dotted path of the missing field
        path: &'static str,
    },

    /// DNS resolution failed
    #[error("DNS resolution failed: {0}")]
    Dns(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// Resolver endpoint returned an error response
    #[error("resolver error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error body returned by the endpoint
        message: String,
    },

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Uploaded bytes could not be decoded into a credential document
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// Uploaded document exceeds the size limit
    #[error("document is {size} bytes, limit is {limit} bytes")]
    DocumentTooLarge {
        /// Actual size in bytes
        size: usize,
        /// Maximum accepted size in bytes
        limit: usize,
    },

    /// Uploaded document was empty
    #[error("document is empty")]
    EmptyDocument,

    /// Writing a verification record failed
    #[error("failed to store verification record: {0}")]
    Record(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Generic internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl CertProofError {
    /// Returns true if a resolver may retry the request that produced this error
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Connection(_) => true,
            Self::Api { code, .. } => *code >= 500,
            _ => false,
        }
    }

    /// Returns true if the caller handed the engine a document it must not accept
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::InvalidDocument(_)
                | Self::DocumentTooLarge { .. }
                | Self::EmptyDocument
        )
    }

    /// HTTP status a boundary layer should answer with for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        if self.is_contract_violation() {
            400
        } else {
            500
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_errors() {
        assert!(CertProofError::Timeout(5).is_retryable());
        assert!(CertProofError::Connection("reset".into()).is_retryable());
        assert!(CertProofError::Api {
            code: 503,
            message: String::new()
        }
        .is_retryable());
        assert!(!CertProofError::Api {
            code: 400,
            message: String::new()
        }
        .is_retryable());
        assert!(!CertProofError::MissingField { path: "id" }.is_retryable());
    }

    #[test]
    fn status_codes() {
        assert_eq!(CertProofError::EmptyDocument.status_code(), 400);
        assert_eq!(
            CertProofError::DocumentTooLarge { size: 10, limit: 5 }.status_code(),
            400
        );
        assert_eq!(CertProofError::MissingField { path: "issued" }.status_code(), 400);
        assert_eq!(CertProofError::Record("disk full".into()).status_code(), 500);
    }

    #[test]
    fn missing_field_message_names_path() {
        let err = CertProofError::MissingField {
            path: "recipient.email",
        };
        assert_eq!(
            err.to_string(),
            "document is missing required field `recipient.email`"
        );
    }
}
