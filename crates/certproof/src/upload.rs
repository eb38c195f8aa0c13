//! Decoding uploaded bytes into a credential document.

use certproof_core::{CertProofError, CredentialDocument, Result};
use serde_json::Value;

/// Largest accepted upload (2048 KiB)
pub const MAX_DOCUMENT_BYTES: usize = 2048 * 1024;

/// Decode an uploaded JSON credential.
///
/// Rejects empty input, input over [`MAX_DOCUMENT_BYTES`], and anything that
/// is not a JSON object of the credential shape.
pub fn decode_document(bytes: &[u8]) -> Result<CredentialDocument> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(CertProofError::EmptyDocument);
    }
    if bytes.len() > MAX_DOCUMENT_BYTES {
        return Err(CertProofError::DocumentTooLarge {
            size: bytes.len(),
            limit: MAX_DOCUMENT_BYTES,
        });
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| CertProofError::InvalidDocument(format!("not valid JSON: {e}")))?;
    if !value.is_object() {
        return Err(CertProofError::InvalidDocument(
            "expected a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| CertProofError::InvalidDocument(e.to_string()))
}
