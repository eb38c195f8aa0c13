//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ResolverKind;
use crate::output::OutputFormat;

/// Verify DNS-attested, hash-committed credential documents
///
/// A document verifies when its recipient is present, its issuer's DNS-DID
/// key is published in a TXT record at the stated location, and its contents
/// hash to the claimed target hash.
#[derive(Parser, Debug)]
#[command(name = "certproof")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Log engine and resolver activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify a credential document
    Verify(VerifyArgs),

    /// Recompute a document's target hash
    Hash(HashArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Verify command
// ============================================================================

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Credential JSON file, or `-` for stdin
    pub file: PathBuf,

    /// Subject identifier written to the record
    #[arg(long, env = "CERTPROOF_SUBJECT")]
    pub subject: Option<String>,

    /// Append a JSON Lines record of the outcome to this file
    #[arg(long, env = "CERTPROOF_RECORD_LOG")]
    pub record_log: Option<PathBuf>,

    /// Do not record the outcome, even if a record log is configured
    #[arg(long)]
    pub no_record: bool,

    #[command(flatten)]
    pub resolver: ResolverArgs,
}

/// How issuer TXT records are looked up.
#[derive(Args, Debug, Default)]
pub struct ResolverArgs {
    /// TXT record source
    #[arg(long, value_enum)]
    pub resolver: Option<ResolverKind>,

    /// DNS-over-HTTPS JSON endpoint
    #[arg(long, env = "CERTPROOF_DOH_ENDPOINT")]
    pub doh_endpoint: Option<String>,

    /// Per-lookup timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Retries after a failed lookup
    #[arg(long)]
    pub retries: Option<u32>,

    /// Answer lookups from DOMAIN=VALUE pairs instead of DNS (repeatable)
    #[arg(long = "txt", value_name = "DOMAIN=VALUE", value_parser = parse_txt_record)]
    pub txt: Vec<(String, String)>,
}

fn parse_txt_record(s: &str) -> Result<(String, String), String> {
    let (domain, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected DOMAIN=VALUE, got `{s}`"))?;
    if domain.trim().is_empty() {
        return Err("domain must not be empty".to_string());
    }
    Ok((domain.trim().to_string(), value.to_string()))
}

// ============================================================================
// Hash command
// ============================================================================

#[derive(Args, Debug)]
pub struct HashArgs {
    /// Credential JSON file, or `-` for stdin
    pub file: PathBuf,

    /// Also print the digest of every leaf
    #[arg(long)]
    pub leaves: bool,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Value to set
        value: String,
    },

    /// Show configuration file path
    Path,

    /// Restore the default configuration
    Reset,
}
