//! Canonical target hash of a credential.
//!
//! Each salient field becomes a leaf `sha256({"<path>":"<value>"})`. The
//! leaves are sorted as strings, JSON-encoded as an array, and hashed once
//! more. Sorting makes the result independent of field order. The leaf set is
//! flat; there is no tree.

use certproof_core::{CertProofError, CredentialDocument, Result};
use ring::digest::{digest, SHA256};

/// Paths of the fields committed to by the target hash, in extraction order.
pub const SALIENT_PATHS: [&str; 9] = [
    "id",
    "name",
    "recipient.name",
    "recipient.email",
    "issuer.name",
    "issuer.identityProof.type",
    "issuer.identityProof.key",
    "issuer.identityProof.location",
    "issued",
];

/// `(path, value)` pairs extracted from a document
pub type SalientFields<'a> = [(&'static str, &'a str); 9];

/// SHA-256 of raw bytes, lowercase hex.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(digest(&SHA256, data).as_ref())
}

/// Digest of one `(path, value)` leaf.
///
/// The value is spliced in verbatim. Quotes or backslashes inside it are not
/// escaped, so the leaf text is not always valid JSON.
#[must_use]
pub fn leaf_digest(path: &str, value: &str) -> String {
    sha256_hex(format!("{{\"{path}\":\"{value}\"}}").as_bytes())
}

/// Hash a set of leaves into a target hash. Input order does not matter.
pub fn digest_leaves<I, P, V>(leaves: I) -> Result<String>
where
    I: IntoIterator<Item = (P, V)>,
    P: AsRef<str>,
    V: AsRef<str>,
{
    let mut digests: Vec<String> = leaves
        .into_iter()
        .map(|(path, value)| leaf_digest(path.as_ref(), value.as_ref()))
        .collect();
    digests.sort_unstable();

    let encoded = serde_json::to_string(&digests)?;
    Ok(sha256_hex(encoded.as_bytes()))
}

/// Extract the nine salient fields.
///
/// Fails with [`CertProofError::MissingField`] naming the first absent path.
pub fn salient_fields(doc: &CredentialDocument) -> Result<SalientFields<'_>> {
    let data = &doc.data;
    let recipient = data.recipient.as_ref();
    let issuer = data.issuer.as_ref();
    let proof = doc.identity_proof();

    Ok([
        ("id", required(data.id.as_deref(), "id")?),
        ("name", required(data.name.as_deref(), "name")?),
        (
            "recipient.name",
            required(recipient.and_then(|r| r.name.as_deref()), "recipient.name")?,
        ),
        (
            "recipient.email",
            required(recipient.and_then(|r| r.email.as_deref()), "recipient.email")?,
        ),
        (
            "issuer.name",
            required(issuer.and_then(|i| i.name.as_deref()), "issuer.name")?,
        ),
        (
            "issuer.identityProof.type",
            required(
                proof.and_then(|p| p.proof_type.as_deref()),
                "issuer.identityProof.type",
            )?,
        ),
        (
            "issuer.identityProof.key",
            required(proof.and_then(|p| p.key.as_deref()), "issuer.identityProof.key")?,
        ),
        (
            "issuer.identityProof.location",
            required(
                proof.and_then(|p| p.location.as_deref()),
                "issuer.identityProof.location",
            )?,
        ),
        ("issued", required(data.issued.as_deref(), "issued")?),
    ])
}

/// Per-field leaf digests in extraction order (unsorted).
pub fn leaf_digests(doc: &CredentialDocument) -> Result<Vec<(&'static str, String)>> {
    Ok(salient_fields(doc)?
        .iter()
        .map(|&(path, value)| (path, leaf_digest(path, value)))
        .collect())
}

/// Recompute the target hash a correctly signed copy of `doc` would carry.
pub fn compute_target_hash(doc: &CredentialDocument) -> Result<String> {
    digest_leaves(salient_fields(doc)?)
}

fn required<'a>(value: Option<&'a str>, path: &'static str) -> Result<&'a str> {
    value.ok_or(CertProofError::MissingField { path })
}
