//! # certproof-engine
//!
//! Decides whether a credential document is complete, issued by a
//! DNS-attested issuer, and unmodified since it was signed.
//!
//! Trust comes from two pieces of evidence. The issuer's key identifier must
//! appear in a TXT record at the domain the document names, and the
//! document's salient fields must hash to the target hash it claims. There is
//! no public-key signature check.
//!
//! ## Data Flow
//!
//! ```text
//! Step 1: Structure (no network)
//!   validate_recipient()          -> INVALID_RECIPIENT on failure
//!
//! Step 2: Issuer (one TXT lookup)
//!   validate_issuer_shape() + attest_key()
//!                                 -> INVALID_ISSUER on failure
//!
//! Step 3: Integrity (no network)
//!   compute_target_hash() == signature.targetHash
//!                                 -> INVALID_SIGNATURE on mismatch
//!
//! Otherwise                       -> VERIFIED, issuer name attached
//! ```
//!
//! The first failing step decides the verdict; later steps never run.

pub mod attestation;
pub mod hash;
pub mod validator;
pub mod verifier;

pub use attestation::{attest_key, strip_quotes, txt_attests};
pub use hash::{
    compute_target_hash, digest_leaves, leaf_digest, leaf_digests, salient_fields, sha256_hex,
    SALIENT_PATHS,
};
pub use validator::{validate_issuer_shape, validate_recipient};
pub use verifier::{validate_signature, Verifier};

pub use certproof_core::{CertProofError, Result};
