//! TXT lookups through the host's DNS configuration.

use crate::resolver::TxtResolver;
use async_trait::async_trait;
use certproof_core::{CertProofError, Result};
use hickory_resolver::TokioResolver;
use std::time::Duration;
use tracing::debug;

/// Default per-query timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default number of attempts per query
const DEFAULT_ATTEMPTS: usize = 2;

/// Resolver using the system's nameservers (`/etc/resolv.conf` or platform equivalent)
pub struct SystemResolver {
    resolver: TokioResolver,
}

impl SystemResolver {
    /// Create a resolver with default timeout and attempts
    pub fn new() -> Result<Self> {
        Self::with_options(DEFAULT_TIMEOUT, DEFAULT_ATTEMPTS)
    }

    /// Create a resolver with an explicit per-query timeout and attempt count
    pub fn with_options(timeout: Duration, attempts: usize) -> Result<Self> {
        let mut builder = TokioResolver::builder_tokio()
            .map_err(|e| CertProofError::Dns(format!("failed to create resolver: {e}")))?;

        let opts = builder.options_mut();
        opts.timeout = timeout;
        opts.attempts = attempts.max(1);

        Ok(Self {
            resolver: builder.build(),
        })
    }
}

#[async_trait]
impl TxtResolver for SystemResolver {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>> {
        debug!(name = domain, "querying TXT records");

        let lookup = self
            .resolver
            .txt_lookup(domain)
            .await
            .map_err(|e| CertProofError::Dns(format!("TXT lookup for {domain} failed: {e}")))?;

        // A TXT record may be split into several character-strings; rejoin them.
        Ok(lookup
            .iter()
            .map(|txt| {
                txt.txt_data()
                    .iter()
                    .map(|data| String::from_utf8_lossy(data))
                    .collect::<String>()
            })
            .collect())
    }
}
