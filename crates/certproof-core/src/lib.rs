//! Core types and errors for certproof.
//!
//! This crate provides the foundational types shared by the resolver, the
//! verification engine and the service layer:
//!
//! - **Types**: the credential document wire shape, verdicts and the
//!   verification record written by callers
//! - **Errors**: a single [`CertProofError`] with a crate-wide [`Result`]
//!
//! # Example
//!
//! ```rust,ignore
//! use certproof_core::{CredentialDocument, Result};
//!
//! fn load(raw: &str) -> Result<CredentialDocument> {
//!     Ok(serde_json::from_str(raw)?)
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/certproof-core/0.1.0")]

mod error;
pub mod types;

pub use error::{CertProofError, Result};
pub use types::*;
