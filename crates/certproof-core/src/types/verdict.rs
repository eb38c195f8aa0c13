use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::CertProofError;

/// Closed set of verification outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// Recipient complete, issuer attested, content unmodified
    Verified,
    /// Recipient section missing or incomplete
    InvalidRecipient,
    /// Issuer section incomplete, or DNS did not attest the key
    InvalidIssuer,
    /// Recomputed target hash differs from the claimed one
    InvalidSignature,
}

impl VerificationOutcome {
    /// All outcomes, in state-machine order
    pub const ALL: [Self; 4] = [
        Self::InvalidRecipient,
        Self::InvalidIssuer,
        Self::InvalidSignature,
        Self::Verified,
    ];

    /// Wire name of the outcome
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::InvalidRecipient => "invalid_recipient",
            Self::InvalidIssuer => "invalid_issuer",
            Self::InvalidSignature => "invalid_signature",
        }
    }

    /// Returns true for [`VerificationOutcome::Verified`]
    #[must_use]
    pub const fn is_verified(self) -> bool {
        matches!(self, Self::Verified)
    }
}

impl std::fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationOutcome {
    type Err = CertProofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| CertProofError::Internal(format!("unknown outcome: {s}")))
    }
}

/// Result of verifying one credential.
///
/// The issuer name is only attached to verified outcomes; use
/// [`VerificationVerdict::verified`] and [`VerificationVerdict::rejected`]
/// to build one. Deserializing a rejected verdict that names an issuer fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VerdictRepr")]
pub struct VerificationVerdict {
    issuer: String,
    outcome: VerificationOutcome,
}

#[derive(Deserialize)]
struct VerdictRepr {
    #[serde(default)]
    issuer: String,
    outcome: VerificationOutcome,
}

impl TryFrom<VerdictRepr> for VerificationVerdict {
    type Error = String;

    fn try_from(repr: VerdictRepr) -> Result<Self, Self::Error> {
        if !repr.outcome.is_verified() && !repr.issuer.is_empty() {
            return Err(format!(
                "{} verdict must not name an issuer (got {:?})",
                repr.outcome, repr.issuer
            ));
        }
        Ok(Self {
            issuer: repr.issuer,
            outcome: repr.outcome,
        })
    }
}

impl VerificationVerdict {
    /// A verified verdict carrying the issuer's display name
    #[must_use]
    pub fn verified(issuer: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            outcome: VerificationOutcome::Verified,
        }
    }

    /// A rejected verdict; the issuer name is always empty.
    ///
    /// `outcome` must not be [`VerificationOutcome::Verified`]; use
    /// [`VerificationVerdict::verified`] for that. Debug builds panic on it.
    #[must_use]
    pub const fn rejected(outcome: VerificationOutcome) -> Self {
        debug_assert!(
            !outcome.is_verified(),
            "rejected() called with the verified outcome"
        );
        Self {
            issuer: String::new(),
            outcome,
        }
    }

    /// Issuer display name (empty unless verified)
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Outcome kind
    #[must_use]
    pub const fn outcome(&self) -> VerificationOutcome {
        self.outcome
    }

    /// Returns true if the credential verified
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.outcome.is_verified()
    }
}
