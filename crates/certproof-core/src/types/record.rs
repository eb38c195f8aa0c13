use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::VerificationOutcome;

/// Kind of document a verification was run against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// JSON credential file
    #[default]
    Json,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
        }
    }
}

/// One entry in the append-only verification log.
///
/// Written by the caller of the engine, keyed by the acting subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Identifier of the subject who requested the verification
    pub subject_id: String,

    /// Kind of the verified document
    pub document_kind: DocumentKind,

    /// Outcome reached
    pub outcome: VerificationOutcome,

    /// When the verification completed
    pub timestamp: DateTime<Utc>,
}

impl VerificationRecord {
    /// Build a record for a JSON document, stamped now
    #[must_use]
    pub fn now(subject_id: impl Into<String>, outcome: VerificationOutcome) -> Self {
        Self {
            subject_id: subject_id.into(),
            document_kind: DocumentKind::Json,
            outcome,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_flat() {
        let record = VerificationRecord::now("user-7", VerificationOutcome::InvalidIssuer);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["subject_id"], "user-7");
        assert_eq!(json["document_kind"], "json");
        assert_eq!(json["outcome"], "invalid_issuer");
        assert!(json["timestamp"].is_string());
    }
}
