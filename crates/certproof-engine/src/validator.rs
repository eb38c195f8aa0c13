//! Structural checks run before any network or hashing work.
//!
//! Only key presence is checked. An empty string is a present value.

use certproof_core::{CredentialDocument, IdentityProof};

/// Recipient is valid iff it exists with both `name` and `email` present.
#[must_use]
pub fn validate_recipient(doc: &CredentialDocument) -> bool {
    doc.recipient()
        .is_some_and(|r| r.name.is_some() && r.email.is_some())
}

/// Issuer is well-formed iff it has a `name` and a complete `identityProof`.
#[must_use]
pub fn validate_issuer_shape(doc: &CredentialDocument) -> bool {
    doc.issuer().is_some_and(|issuer| {
        issuer.name.is_some() && issuer.identity_proof.as_ref().is_some_and(proof_complete)
    })
}

fn proof_complete(proof: &IdentityProof) -> bool {
    proof.proof_type.is_some() && proof.key.is_some() && proof.location.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::certificate;

    #[test]
    fn complete_document_passes() {
        let doc = certificate();
        assert!(validate_recipient(&doc));
        assert!(validate_issuer_shape(&doc));
    }

    #[test]
    fn recipient_requires_name_and_email() {
        let mut doc = certificate();
        doc.data.recipient.as_mut().unwrap().name = None;
        assert!(!validate_recipient(&doc));

        let mut doc = certificate();
        doc.data.recipient.as_mut().unwrap().email = None;
        assert!(!validate_recipient(&doc));

        let mut doc = certificate();
        doc.data.recipient = None;
        assert!(!validate_recipient(&doc));
    }

    #[test]
    fn empty_strings_count_as_present() {
        let mut doc = certificate();
        let recipient = doc.data.recipient.as_mut().unwrap();
        recipient.name = Some(String::new());
        recipient.email = Some(String::new());
        assert!(validate_recipient(&doc));
    }

    #[test]
    fn issuer_requires_every_proof_field() {
        for strip in 0..3 {
            let mut doc = certificate();
            let proof = doc
                .data
                .issuer
                .as_mut()
                .and_then(|i| i.identity_proof.as_mut())
                .unwrap();
            match strip {
                0 => proof.proof_type = None,
                1 => proof.key = None,
                _ => proof.location = None,
            }
            assert!(!validate_issuer_shape(&doc), "field {strip} stripped");
        }
    }

    #[test]
    fn issuer_requires_name_and_proof() {
        let mut doc = certificate();
        doc.data.issuer.as_mut().unwrap().name = None;
        assert!(!validate_issuer_shape(&doc));

        let mut doc = certificate();
        doc.data.issuer.as_mut().unwrap().identity_proof = None;
        assert!(!validate_issuer_shape(&doc));

        let mut doc = certificate();
        doc.data.issuer = None;
        assert!(!validate_issuer_shape(&doc));
    }

    #[test]
    fn proof_type_value_is_not_checked() {
        let mut doc = certificate();
        doc.data
            .issuer
            .as_mut()
            .and_then(|i| i.identity_proof.as_mut())
            .unwrap()
            .proof_type = Some("SOMETHING-ELSE".into());
        assert!(validate_issuer_shape(&doc));
    }
}
