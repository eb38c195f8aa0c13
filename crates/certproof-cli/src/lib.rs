//! # certproof-cli
//!
//! Command-line front end for the certproof verifier.
//!
//! ## Commands
//!
//! - **verify**: run the full check and print the verdict
//! - **hash**: recompute a document's target hash, optionally per leaf
//! - **config**: inspect and edit the persisted defaults
//!
//! ## Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | verified / hash matches |
//! | 1 | any other verdict / hash mismatch |
//! | 2 | the document or the environment could not be processed |

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;

/// Exit status when the check ran and passed
pub const EXIT_OK: u8 = 0;
/// Exit status when the check ran and failed
pub const EXIT_REJECTED: u8 = 1;
/// Exit status when the check could not run
pub const EXIT_ERROR: u8 = 2;
