use serde::{Deserialize, Serialize};

/// A signed credential as uploaded by a user.
///
/// The credential body lives under `data`; the claimed content commitment
/// lives under `signature`. Every leaf is optional so that missing and `null`
/// keys decode cleanly and can be rejected by the validator instead of by the
/// JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDocument {
    /// Credential body
    #[serde(default)]
    pub data: CredentialData,

    /// Claimed signature block
    #[serde(default)]
    pub signature: Option<Signature>,
}

/// The salient body of a credential.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialData {
    /// Document identifier
    #[serde(default)]
    pub id: Option<String>,

    /// Human-readable credential name
    #[serde(default)]
    pub name: Option<String>,

    /// Who the credential was issued to
    #[serde(default)]
    pub recipient: Option<Recipient>,

    /// Who issued the credential
    #[serde(default)]
    pub issuer: Option<Issuer>,

    /// Issuance timestamp (ISO-8601, carried verbatim)
    #[serde(default)]
    pub issued: Option<String>,
}

/// Credential recipient
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Recipient name
    #[serde(default)]
    pub name: Option<String>,

    /// Recipient email
    #[serde(default)]
    pub email: Option<String>,
}

/// Credential issuer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issuer {
    /// Issuer display name
    #[serde(default)]
    pub name: Option<String>,

    /// DNS-resolvable proof of the issuer's key
    #[serde(default)]
    pub identity_proof: Option<IdentityProof>,
}

/// Binds an issuer key identifier to a DNS domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProof {
    /// Proof type, usually `DNS-DID`. Carried, never dispatched on.
    #[serde(default, rename = "type")]
    pub proof_type: Option<String>,

    /// Key identifier expected inside a TXT record at `location`
    #[serde(default)]
    pub key: Option<String>,

    /// Domain whose TXT records attest the key
    #[serde(default)]
    pub location: Option<String>,
}

impl IdentityProof {
    /// Proof type expected for DNS-anchored issuers
    pub const DNS_DID: &'static str = "DNS-DID";

    /// Returns `(key, location)` when both are present
    #[must_use]
    pub fn key_and_location(&self) -> Option<(&str, &str)> {
        match (self.key.as_deref(), self.location.as_deref()) {
            (Some(key), Some(location)) => Some((key, location)),
            _ => None,
        }
    }
}

/// The claimed signature block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    /// Signature scheme label (e.g. `SHA3MerkleProof`).
    ///
    /// Never read during verification, so any JSON value is accepted.
    #[serde(default, rename = "type")]
    pub signature_type: Option<serde_json::Value>,

    /// Claimed canonical content hash, lowercase hex
    #[serde(default)]
    pub target_hash: Option<String>,
}

impl CredentialDocument {
    /// Recipient section, if present
    #[must_use]
    pub const fn recipient(&self) -> Option<&Recipient> {
        self.data.recipient.as_ref()
    }

    /// Issuer section, if present
    #[must_use]
    pub const fn issuer(&self) -> Option<&Issuer> {
        self.data.issuer.as_ref()
    }

    /// Identity proof of the issuer, if present
    #[must_use]
    pub fn identity_proof(&self) -> Option<&IdentityProof> {
        self.issuer().and_then(|i| i.identity_proof.as_ref())
    }

    /// Issuer display name, if present
    #[must_use]
    pub fn issuer_name(&self) -> Option<&str> {
        self.issuer().and_then(|i| i.name.as_deref())
    }

    /// Claimed target hash, if present
    #[must_use]
    pub fn target_hash(&self) -> Option<&str> {
        self.signature
            .as_ref()
            .and_then(|s| s.target_hash.as_deref())
    }
}
