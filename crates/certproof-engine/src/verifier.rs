//! The verification state machine.

use certproof_core::{
    CertProofError, CredentialDocument, IdentityProof, Result, VerificationOutcome,
    VerificationVerdict,
};
use certproof_dns::TxtResolver;
use tracing::debug;

use crate::attestation::attest_key;
use crate::hash::compute_target_hash;
use crate::validator::{validate_issuer_shape, validate_recipient};

/// Verifies credentials against TXT records served by `R`.
///
/// Holds nothing but the resolver, so one verifier can serve concurrent
/// calls through `&self`.
#[derive(Debug, Clone)]
pub struct Verifier<R> {
    resolver: R,
}

impl<R: TxtResolver> Verifier<R> {
    /// Create a verifier over `resolver`
    pub const fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// The underlying resolver
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Issuer shape check followed by DNS attestation of its key.
    pub async fn validate_issuer(&self, doc: &CredentialDocument) -> bool {
        if !validate_issuer_shape(doc) {
            return false;
        }
        let Some((key, location)) = doc
            .identity_proof()
            .and_then(IdentityProof::key_and_location)
        else {
            return false;
        };
        attest_key(&self.resolver, location, key).await
    }

    /// Run every check in order and return the first failing outcome.
    ///
    /// Expected failures are `Ok` verdicts. `Err` means the document broke
    /// the input contract, e.g. a hashed field or the target hash is absent.
    pub async fn verify(&self, doc: &CredentialDocument) -> Result<VerificationVerdict> {
        if !validate_recipient(doc) {
            return Ok(reject(VerificationOutcome::InvalidRecipient));
        }

        if !self.validate_issuer(doc).await {
            return Ok(reject(VerificationOutcome::InvalidIssuer));
        }

        if !validate_signature(doc)? {
            return Ok(reject(VerificationOutcome::InvalidSignature));
        }

        let issuer = doc
            .issuer_name()
            .ok_or(CertProofError::MissingField { path: "issuer.name" })?;
        debug!(issuer, "credential verified");
        Ok(VerificationVerdict::verified(issuer))
    }
}

/// Does the recomputed target hash equal the claimed one (case-sensitive)?
pub fn validate_signature(doc: &CredentialDocument) -> Result<bool> {
    let computed = compute_target_hash(doc)?;
    let claimed = doc.target_hash().ok_or(CertProofError::MissingField {
        path: "signature.targetHash",
    })?;
    Ok(computed == claimed)
}

fn reject(outcome: VerificationOutcome) -> VerificationVerdict {
    debug!(%outcome, "credential rejected");
    VerificationVerdict::rejected(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{certificate, KEY, LOCATION, TARGET_HASH};
    use async_trait::async_trait;
    use certproof_dns::StaticTxtResolver;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts lookups and answers every one with a fixed record.
    #[derive(Default)]
    struct CountingResolver {
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl TxtResolver for CountingResolver {
        async fn lookup_txt(&self, _domain: &str) -> Result<Vec<String>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(vec![format!("\"{KEY}\"")])
        }
    }

    struct FailingResolver;

    /// Answers every lookup successfully with no records.
    struct EmptyResolver;

    #[async_trait]
    impl TxtResolver for EmptyResolver {
        async fn lookup_txt(&self, _domain: &str) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl TxtResolver for FailingResolver {
        async fn lookup_txt(&self, _domain: &str) -> Result<Vec<String>> {
            Err(CertProofError::Timeout(5))
        }
    }

    fn attesting() -> Verifier<StaticTxtResolver> {
        Verifier::new(StaticTxtResolver::new().with_record(
            LOCATION,
            format!("\"openatts a=dns-did; p={KEY}; v=1.0;\""),
        ))
    }

    #[tokio::test]
    async fn verified_document_carries_issuer() {
        let verdict = attesting().verify(&certificate()).await.unwrap();
        assert_eq!(verdict.outcome(), VerificationOutcome::Verified);
        assert_eq!(verdict.issuer(), "Accredify");
    }

    #[tokio::test]
    async fn invalid_recipient_short_circuits() {
        let mut doc = certificate();
        doc.data.recipient.as_mut().unwrap().name = None;
        // Would also fail every later step.
        doc.data.issuer.as_mut().unwrap().identity_proof = None;
        doc.signature = None;

        let verifier = Verifier::new(CountingResolver::default());
        let verdict = verifier.verify(&doc).await.unwrap();

        assert_eq!(verdict.outcome(), VerificationOutcome::InvalidRecipient);
        assert_eq!(verdict.issuer(), "");
        assert_eq!(verifier.resolver().lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn incomplete_issuer_skips_dns() {
        let mut doc = certificate();
        doc.data
            .issuer
            .as_mut()
            .and_then(|i| i.identity_proof.as_mut())
            .unwrap()
            .proof_type = None;

        let verifier = Verifier::new(CountingResolver::default());
        let verdict = verifier.verify(&doc).await.unwrap();

        assert_eq!(verdict.outcome(), VerificationOutcome::InvalidIssuer);
        assert_eq!(verifier.resolver().lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn lookup_failure_is_invalid_issuer() {
        let verdict = Verifier::new(FailingResolver)
            .verify(&certificate())
            .await
            .unwrap();
        assert_eq!(verdict.outcome(), VerificationOutcome::InvalidIssuer);
    }

    #[tokio::test]
    async fn empty_answer_set_is_invalid_issuer() {
        let verdict = Verifier::new(EmptyResolver)
            .verify(&certificate())
            .await
            .unwrap();
        assert_eq!(verdict.outcome(), VerificationOutcome::InvalidIssuer);
        assert_eq!(verdict.issuer(), "");
    }

    /// Re-sign `doc` so only the issuer check can fail.
    fn resign(doc: &mut CredentialDocument) {
        let hash = compute_target_hash(doc).unwrap();
        doc.signature.as_mut().unwrap().target_hash = Some(hash);
    }

    #[tokio::test]
    async fn empty_key_is_attested_by_any_answer() {
        let mut doc = certificate();
        doc.data
            .issuer
            .as_mut()
            .and_then(|i| i.identity_proof.as_mut())
            .unwrap()
            .key = Some(String::new());
        resign(&mut doc);

        let verifier =
            Verifier::new(StaticTxtResolver::new().with_record(LOCATION, "\"v=spf1 -all\""));
        let verdict = verifier.verify(&doc).await.unwrap();
        assert_eq!(verdict.outcome(), VerificationOutcome::Verified);

        // Still needs at least one answer.
        let verdict = Verifier::new(EmptyResolver).verify(&doc).await.unwrap();
        assert_eq!(verdict.outcome(), VerificationOutcome::InvalidIssuer);
    }

    #[tokio::test]
    async fn empty_issuer_name_verifies_with_empty_issuer() {
        let mut doc = certificate();
        doc.data.issuer.as_mut().unwrap().name = Some(String::new());
        resign(&mut doc);

        let verdict = attesting().verify(&doc).await.unwrap();
        assert!(verdict.is_verified());
        assert_eq!(verdict.issuer(), "");
    }

    #[tokio::test]
    async fn unattested_key_is_invalid_issuer() {
        let verifier =
            Verifier::new(StaticTxtResolver::new().with_record(LOCATION, "\"unrelated\""));
        let verdict = verifier.verify(&certificate()).await.unwrap();
        assert_eq!(verdict.outcome(), VerificationOutcome::InvalidIssuer);
    }

    #[tokio::test]
    async fn issuer_failure_skips_hashing() {
        // A document that would break the hashing contract still yields a verdict
        // when the issuer check fails first.
        let mut doc = certificate();
        doc.data.id = None;
        doc.signature = None;

        let verifier = Verifier::new(FailingResolver);
        let verdict = verifier.verify(&doc).await.unwrap();
        assert_eq!(verdict.outcome(), VerificationOutcome::InvalidIssuer);
    }

    #[tokio::test]
    async fn tampered_field_is_invalid_signature() {
        let mut doc = certificate();
        doc.data.issuer.as_mut().unwrap().name = Some("Accredify123".into());

        let verdict = attesting().verify(&doc).await.unwrap();
        assert_eq!(verdict.outcome(), VerificationOutcome::InvalidSignature);
        assert_eq!(verdict.issuer(), "");
    }

    #[tokio::test]
    async fn hash_comparison_is_case_sensitive() {
        let mut doc = certificate();
        doc.signature.as_mut().unwrap().target_hash = Some(TARGET_HASH.to_uppercase());

        let verdict = attesting().verify(&doc).await.unwrap();
        assert_eq!(verdict.outcome(), VerificationOutcome::InvalidSignature);
    }

    #[tokio::test]
    async fn signature_type_is_ignored() {
        let mut doc = certificate();
        doc.signature.as_mut().unwrap().signature_type = None;

        let verdict = attesting().verify(&doc).await.unwrap();
        assert!(verdict.is_verified());
    }

    #[tokio::test]
    async fn missing_target_hash_is_contract_violation() {
        let mut doc = certificate();
        doc.signature = None;

        let err = attesting().verify(&doc).await.unwrap_err();
        assert!(matches!(
            err,
            CertProofError::MissingField {
                path: "signature.targetHash"
            }
        ));
    }

    #[tokio::test]
    async fn missing_hashed_field_is_contract_violation() {
        let mut doc = certificate();
        doc.data.issued = None;

        let err = attesting().verify(&doc).await.unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[tokio::test]
    async fn input_is_not_mutated() {
        let doc = certificate();
        let before = doc.clone();
        attesting().verify(&doc).await.unwrap();
        assert_eq!(doc, before);
    }

    #[tokio::test]
    async fn concurrent_calls_are_independent() {
        let verifier = Arc::new(attesting());
        let mut tampered = certificate();
        tampered.data.name = Some("Certificate of Attendance".into());

        let mut handles = Vec::new();
        for i in 0..16 {
            let verifier = Arc::clone(&verifier);
            let doc = if i % 2 == 0 {
                certificate()
            } else {
                tampered.clone()
            };
            handles.push(tokio::spawn(async move {
                (i, verifier.verify(&doc).await.unwrap().outcome())
            }));
        }

        for handle in handles {
            let (i, outcome) = handle.await.unwrap();
            let expected = if i % 2 == 0 {
                VerificationOutcome::Verified
            } else {
                VerificationOutcome::InvalidSignature
            };
            assert_eq!(outcome, expected);
        }
    }
}
