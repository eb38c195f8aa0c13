//! TXT record resolvers for certproof.
//!
//! The verification engine only needs one thing from DNS: the TXT answers
//! published at an issuer's domain. This crate provides the [`TxtResolver`]
//! seam and three implementations:
//!
//! - [`DohClient`]: DNS-over-HTTPS JSON API (`application/dns-json`)
//! - [`SystemResolver`]: the host's resolver configuration via hickory
//! - [`StaticTxtResolver`]: a fixed table, for offline checks and tests
//!
//! Timeouts and retries are configured here, never in the engine.

#![doc(html_root_url = "https://docs.rs/certproof-dns/0.1.0")]

mod config;
mod doh;
mod resolver;
mod system;

pub use config::*;
pub use doh::{
    DohAnswer, DohClient, DohClientBuilder, DohResponse, DEFAULT_DOH_ENDPOINT, TXT_RECORD_TYPE,
};
pub use resolver::{StaticTxtResolver, TxtResolver};
pub use system::SystemResolver;
pub use certproof_core::{CertProofError, Result};
