//! Response bodies for a boundary layer serving verifications.
//!
//! ```text
//! 200 {"data":{"issuer":"Accredify","result":"verified"}}
//! 400 {"success":false,"error":"Validation failed: document is empty"}
//! 500 {"success":false,"error":"An error occurred while processing the request: ..."}
//! ```

use certproof_core::{CertProofError, VerificationOutcome, VerificationVerdict};
use serde::{Deserialize, Serialize};

/// Successful verification body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Verification payload
    pub data: VerifyResponseData,
}

/// Issuer and outcome of a verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponseData {
    /// Issuer name, empty unless verified
    pub issuer: String,
    /// Outcome of the verification
    pub result: VerificationOutcome,
}

impl From<&VerificationVerdict> for VerifyResponse {
    fn from(verdict: &VerificationVerdict) -> Self {
        Self {
            data: VerifyResponseData {
                issuer: verdict.issuer().to_string(),
                result: verdict.outcome(),
            },
        }
    }
}

/// Failure body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human-readable reason
    pub error: String,
}

impl ErrorResponse {
    /// Body for a request that carried no document
    pub fn missing_document() -> Self {
        Self {
            success: false,
            error: "Invalid request. Missing file parameter.".to_string(),
        }
    }
}

impl From<&CertProofError> for ErrorResponse {
    fn from(err: &CertProofError) -> Self {
        let error = if err.is_contract_violation() {
            format!("Validation failed: {err}")
        } else {
            format!("An error occurred while processing the request: {err}")
        };
        Self {
            success: false,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verdict_body_shape() {
        let body = VerifyResponse::from(&VerificationVerdict::verified("Accredify"));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"data": {"issuer": "Accredify", "result": "verified"}})
        );

        let body = VerifyResponse::from(&VerificationVerdict::rejected(
            VerificationOutcome::InvalidIssuer,
        ));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"data": {"issuer": "", "result": "invalid_issuer"}})
        );
    }

    #[test]
    fn error_body_distinguishes_validation() {
        let err = CertProofError::EmptyDocument;
        let body = ErrorResponse::from(&err);
        assert!(!body.success);
        assert_eq!(body.error, "Validation failed: document is empty");
        assert_eq!(err.status_code(), 400);

        let err = CertProofError::Record("disk full".into());
        let body = ErrorResponse::from(&err);
        assert!(body
            .error
            .starts_with("An error occurred while processing the request:"));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn missing_document_body() {
        assert_eq!(
            serde_json::to_value(ErrorResponse::missing_document()).unwrap(),
            json!({"success": false, "error": "Invalid request. Missing file parameter."})
        );
    }
}
