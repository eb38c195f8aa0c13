//! Verify DNS-attested, hash-committed credential documents.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use certproof::{DohClient, JsonlRecordLog, VerificationService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = DohClient::new()?;
//!     let log = JsonlRecordLog::new("verifications.jsonl");
//!     let service = VerificationService::new(resolver, log);
//!
//!     let bytes = std::fs::read("certificate.json")?;
//!     let verdict = service.verify_upload("user-42", &bytes).await?;
//!
//!     println!("{} ({})", verdict.outcome(), verdict.issuer());
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for the DNS-over-HTTPS client
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/certproof/0.1.0")]

mod record;
mod response;
mod service;
mod upload;

pub use record::{JsonlRecordLog, MemoryRecordLog, NoopRecordSink, RecordSink};
pub use response::{ErrorResponse, VerifyResponse, VerifyResponseData};
pub use service::VerificationService;
pub use upload::{decode_document, MAX_DOCUMENT_BYTES};

// Re-export core types
pub use certproof_core::*;

// Re-export resolvers
pub use certproof_dns::{
    DohClient, DohClientBuilder, RetryConfig, StaticTxtResolver, SystemResolver, TxtResolver,
    DEFAULT_DOH_ENDPOINT,
};

// Re-export the engine
pub use certproof_engine::{
    compute_target_hash, leaf_digests, validate_issuer_shape, validate_recipient,
    validate_signature, Verifier, SALIENT_PATHS,
};

// Re-export runtime for convenience
pub use serde_json;
pub use tokio;
