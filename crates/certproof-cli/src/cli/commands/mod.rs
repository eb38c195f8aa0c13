//! Command implementations.

pub mod config;
pub mod hash;
pub mod verify;

use anyhow::{Context as _, Result};
use certproof::{
    DohClient, JsonlRecordLog, NoopRecordSink, RecordSink, RetryConfig, StaticTxtResolver,
    SystemResolver, TxtResolver,
};
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncReadExt;

use crate::cli::args::ResolverArgs;
use crate::config::{Config, ResolverKind, DEFAULT_SUBJECT, DEFAULT_TIMEOUT_SECS};
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Persisted defaults
    pub config: Config,

    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,
}

impl Context {
    /// Build the TXT resolver selected by flags, then config.
    pub fn resolver(&self, args: &ResolverArgs) -> Result<Box<dyn TxtResolver>> {
        if !args.txt.is_empty() {
            let mut resolver = StaticTxtResolver::new();
            for (domain, value) in &args.txt {
                resolver.insert(domain, value.clone());
            }
            return Ok(Box::new(resolver));
        }

        let timeout = Duration::from_secs(
            args.timeout
                .or(self.config.timeout_secs)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        );
        let retries = args.retries.or(self.config.max_retries).unwrap_or(0);

        match args.resolver.or(self.config.resolver).unwrap_or_default() {
            ResolverKind::Doh => {
                let mut builder = DohClient::builder()
                    .timeout(timeout)
                    .retry(RetryConfig::new().max_retries(retries))
                    .user_agent(concat!("certproof-cli/", env!("CARGO_PKG_VERSION")));
                if let Some(endpoint) = args
                    .doh_endpoint
                    .clone()
                    .or_else(|| self.config.doh_endpoint.clone())
                {
                    builder = builder.endpoint(endpoint);
                }
                Ok(Box::new(builder.build()?))
            }
            ResolverKind::System => {
                let attempts = usize::try_from(retries).unwrap_or(usize::MAX).saturating_add(1);
                Ok(Box::new(SystemResolver::with_options(timeout, attempts)?))
            }
        }
    }

    /// Record sink for `path`, falling back to the configured log.
    pub fn record_sink(&self, path: Option<&Path>, disabled: bool) -> Box<dyn RecordSink> {
        if disabled {
            return Box::new(NoopRecordSink);
        }
        match path.or(self.config.record_log.as_deref()) {
            Some(path) => Box::new(JsonlRecordLog::new(path)),
            None => Box::new(NoopRecordSink),
        }
    }

    /// Subject from flags, then config, then [`DEFAULT_SUBJECT`].
    pub fn subject(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.config.subject.clone())
            .unwrap_or_else(|| DEFAULT_SUBJECT.to_string())
    }
}

/// Read a document from `path`, or stdin when `path` is `-`.
pub async fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut bytes)
            .await
            .context("Failed to read document from stdin")?;
        return Ok(bytes);
    }

    tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}
