//! The TXT lookup seam consumed by the verification engine.

use async_trait::async_trait;
use certproof_core::{CertProofError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Anything that can answer a TXT query for a domain.
///
/// Answers are returned as text, possibly still wrapped in quotes. An empty
/// answer set is not an error at this layer; callers decide what it means.
#[async_trait]
pub trait TxtResolver: Send + Sync {
    /// Look up the TXT records published at `domain`
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>>;
}

#[async_trait]
impl<T: TxtResolver + ?Sized> TxtResolver for Box<T> {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>> {
        (**self).lookup_txt(domain).await
    }
}

#[async_trait]
impl<T: TxtResolver + ?Sized> TxtResolver for Arc<T> {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>> {
        (**self).lookup_txt(domain).await
    }
}

/// Resolver backed by a fixed domain -> answers table.
///
/// Domains are matched case-insensitively and a trailing dot is ignored.
#[derive(Debug, Clone, Default)]
pub struct StaticTxtResolver {
    records: HashMap<String, Vec<String>>,
}

impl StaticTxtResolver {
    /// Create an empty resolver; every lookup fails
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one TXT answer for `domain`
    #[must_use]
    pub fn with_record(mut self, domain: &str, value: impl Into<String>) -> Self {
        self.insert(domain, value);
        self
    }

    /// Add one TXT answer for `domain` in place
    pub fn insert(&mut self, domain: &str, value: impl Into<String>) {
        self.records
            .entry(normalize(domain))
            .or_default()
            .push(value.into());
    }

    /// Number of domains with at least one answer
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no answers are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl TxtResolver for StaticTxtResolver {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>> {
        self.records
            .get(&normalize(domain))
            .cloned()
            .ok_or_else(|| CertProofError::Dns(format!("no TXT records for {domain}")))
    }
}

fn normalize(domain: &str) -> String {
    domain.trim_end_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_lookup_matches_normalized_domain() {
        let resolver = StaticTxtResolver::new()
            .with_record("Example.COM.", "\"v=1 key=abc\"")
            .with_record("example.com", "other");

        let answers = resolver.lookup_txt("example.com").await.unwrap();
        assert_eq!(answers, vec!["\"v=1 key=abc\"", "other"]);
        assert_eq!(resolver.len(), 1);
    }

    #[test]
    fn static_lookup_unknown_domain_fails() {
        let resolver = StaticTxtResolver::new();
        assert!(resolver.is_empty());
        let err = tokio_test::block_on(resolver.lookup_txt("missing.test")).unwrap_err();
        assert!(matches!(err, CertProofError::Dns(_)));
    }

    #[tokio::test]
    async fn boxed_and_shared_resolvers_delegate() {
        let boxed: Box<dyn TxtResolver> =
            Box::new(StaticTxtResolver::new().with_record("a.test", "x"));
        assert_eq!(boxed.lookup_txt("a.test").await.unwrap(), vec!["x"]);

        let shared = Arc::new(StaticTxtResolver::new().with_record("b.test", "y"));
        assert_eq!(shared.lookup_txt("b.test").await.unwrap(), vec!["y"]);
    }
}
