//! Verification plus record keeping.

use certproof_core::{CredentialDocument, Result, VerificationRecord, VerificationVerdict};
use certproof_dns::TxtResolver;
use certproof_engine::Verifier;
use tracing::{info, instrument};

use crate::record::RecordSink;
use crate::upload::decode_document;

/// Runs the engine and appends one record per verdict.
///
/// The acting subject is passed explicitly on every call.
pub struct VerificationService<R, S> {
    verifier: Verifier<R>,
    records: S,
}

impl<R: TxtResolver, S: RecordSink> VerificationService<R, S> {
    /// Create a service resolving TXT records with `resolver` and logging to `records`
    pub const fn new(resolver: R, records: S) -> Self {
        Self {
            verifier: Verifier::new(resolver),
            records,
        }
    }

    /// The wrapped engine
    pub const fn verifier(&self) -> &Verifier<R> {
        &self.verifier
    }

    /// The record sink
    pub const fn records(&self) -> &S {
        &self.records
    }

    /// Verify `doc` on behalf of `subject_id` and record the outcome.
    ///
    /// Engine errors are returned before anything is recorded.
    #[instrument(skip(self, doc))]
    pub async fn verify(
        &self,
        subject_id: &str,
        doc: &CredentialDocument,
    ) -> Result<VerificationVerdict> {
        let verdict = self.verifier.verify(doc).await?;

        self.records
            .append(&VerificationRecord::now(subject_id, verdict.outcome()))
            .await?;

        info!(outcome = %verdict.outcome(), issuer = verdict.issuer(), "verification recorded");
        Ok(verdict)
    }

    /// Decode raw upload bytes, then [`verify`](Self::verify) them.
    pub async fn verify_upload(
        &self,
        subject_id: &str,
        bytes: &[u8],
    ) -> Result<VerificationVerdict> {
        let doc = decode_document(bytes)?;
        self.verify(subject_id, &doc).await
    }
}
