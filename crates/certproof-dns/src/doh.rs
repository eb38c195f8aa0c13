//! DNS-over-HTTPS client for the JSON API (`application/dns-json`).
//!
//! Speaks the format served by `dns.google/resolve` and
//! `cloudflare-dns.com/dns-query`:
//!
//! ```text
//! GET <endpoint>?name=ropstore.accredify.io&type=TXT
//! {"Status":0,"Answer":[{"name":"ropstore.accredify.io.","type":16,"TTL":300,"data":"\"did:ethr:...\""}]}
//! ```

use crate::config::RetryConfig;
use crate::resolver::TxtResolver;
use async_trait::async_trait;
use certproof_core::{CertProofError, Result};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default DNS JSON API endpoint
pub const DEFAULT_DOH_ENDPOINT: &str = "https://dns.google/resolve";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Media type of the DNS JSON API
const DNS_JSON: &str = "application/dns-json";

/// RR type code of TXT records
pub const TXT_RECORD_TYPE: u16 = 16;

/// Body of a DNS JSON API response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DohResponse {
    /// DNS response code (0 = NOERROR, 3 = NXDOMAIN)
    #[serde(rename = "Status", default)]
    pub status: u32,

    /// Answer section
    #[serde(rename = "Answer", default)]
    pub answer: Vec<DohAnswer>,
}

/// One resource record of the answer section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DohAnswer {
    /// Owner name
    #[serde(default)]
    pub name: Option<String>,

    /// RR type code
    #[serde(rename = "type", default)]
    pub record_type: Option<u16>,

    /// Time to live (seconds)
    #[serde(rename = "TTL", default)]
    pub ttl: Option<u32>,

    /// Record data, quoted for TXT records
    #[serde(default)]
    pub data: Option<String>,
}

impl DohResponse {
    /// Data of every TXT answer (or untyped answer), in response order
    #[must_use]
    pub fn txt_data(&self) -> Vec<String> {
        self.answer
            .iter()
            .filter(|a| a.record_type.map_or(true, |t| t == TXT_RECORD_TYPE))
            .filter_map(|a| a.data.clone())
            .collect()
    }
}

/// DNS-over-HTTPS client
#[derive(Clone)]
pub struct DohClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    endpoint: String,
    timeout: Duration,
    retry_config: RetryConfig,
}

impl DohClient {
    /// Create a client for the default endpoint
    pub fn new() -> Result<Self> {
        DohClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> DohClientBuilder {
        DohClientBuilder::new()
    }

    /// The endpoint queries are sent to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Query `domain` for `record_type`, retrying per the configured policy
    pub async fn query(&self, domain: &str, record_type: &str) -> Result<DohResponse> {
        let retry = &self.inner.retry_config;
        let mut attempt = 0;

        loop {
            match self.query_once(domain, record_type).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempt < retry.max_retries => {
                    let backoff = retry.backoff_for(attempt);
                    warn!(domain, attempt, error = %e, ?backoff, "DoH query failed, retrying");
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// TXT answers published at `domain`
    pub async fn txt_records(&self, domain: &str) -> Result<Vec<String>> {
        let response = self.query(domain, "TXT").await?;
        debug!(
            domain,
            status = response.status,
            answers = response.answer.len(),
            "DoH TXT response"
        );
        Ok(response.txt_data())
    }

    async fn query_once(&self, domain: &str, record_type: &str) -> Result<DohResponse> {
        let url = self.build_url(domain, record_type)?;
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, DNS_JSON)
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        self.handle_response(response).await
    }

    fn build_url(&self, domain: &str, record_type: &str) -> Result<url::Url> {
        url::Url::parse_with_params(
            &self.inner.endpoint,
            &[("name", domain), ("type", record_type)],
        )
        .map_err(|e| CertProofError::Config(format!("invalid DoH endpoint: {e}")))
    }

    fn map_transport_error(&self, e: &reqwest::Error) -> CertProofError {
        if e.is_timeout() {
            CertProofError::Timeout(self.inner.timeout.as_secs())
        } else if e.is_connect() {
            CertProofError::Connection(e.to_string())
        } else {
            CertProofError::Http(e.to_string())
        }
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<DohResponse> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        if status.is_success() {
            serde_json::from_str(&body).map_err(CertProofError::Json)
        } else {
            Err(CertProofError::Api {
                code: status.as_u16(),
                message: body,
            })
        }
    }
}

#[async_trait]
impl TxtResolver for DohClient {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>> {
        self.txt_records(domain).await
    }
}

/// Builder for configuring a [`DohClient`]
pub struct DohClientBuilder {
    endpoint: String,
    timeout: Duration,
    user_agent: String,
    retry_config: RetryConfig,
}

impl Default for DohClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DohClientBuilder {
    /// Create a builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_DOH_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("certproof/{}", env!("CARGO_PKG_VERSION")),
            retry_config: RetryConfig::default(),
        }
    }

    /// Set the DNS JSON API endpoint
    #[must_use]
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set retry configuration
    #[must_use]
    pub const fn retry(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DohClient> {
        url::Url::parse(&self.endpoint)
            .map_err(|e| CertProofError::Config(format!("invalid DoH endpoint: {e}")))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| CertProofError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(DohClient {
            inner: Arc::new(ClientInner {
                http,
                endpoint: self.endpoint,
                timeout: self.timeout,
                retry_config: self.retry_config,
            }),
        })
    }
}
