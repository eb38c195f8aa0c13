//! Configuration management.

use anyhow::Result;
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::output::OutputFormat;

/// Overrides the config file location
pub const CONFIG_PATH_ENV: &str = "CERTPROOF_CONFIG";

/// Lookup timeout when neither flag nor config sets one
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Subject recorded when none is given
pub const DEFAULT_SUBJECT: &str = "local";

/// Where TXT records come from.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResolverKind {
    /// DNS-over-HTTPS JSON API
    #[default]
    Doh,
    /// The operating system's resolver configuration
    System,
}

impl FromStr for ResolverKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "doh" | "https" => Ok(Self::Doh),
            "system" | "os" => Ok(Self::System),
            _ => anyhow::bail!(
                "Unknown resolver: {}\n\
                 Valid resolvers: doh, system",
                s
            ),
        }
    }
}

impl std::fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Doh => write!(f, "doh"),
            Self::System => write!(f, "system"),
        }
    }
}

/// CLI configuration.
///
/// Every field is optional; command-line flags and environment variables
/// take precedence over the values stored here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// TXT record source.
    pub resolver: Option<ResolverKind>,

    /// DNS-over-HTTPS JSON endpoint.
    pub doh_endpoint: Option<String>,

    /// Per-lookup timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Retries after a failed lookup.
    pub max_retries: Option<u32>,

    /// JSON Lines file receiving one record per verification.
    pub record_log: Option<PathBuf>,

    /// Subject identifier written to records.
    pub subject: Option<String>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("io", "certproof", "certproof")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`, defaulting when the file is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {e}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Set `key` from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "resolver" => self.resolver = Some(value.parse()?),
            "doh_endpoint" | "endpoint" => self.doh_endpoint = Some(value.to_string()),
            "timeout_secs" | "timeout" => self.timeout_secs = Some(value.parse()?),
            "max_retries" | "retries" => self.max_retries = Some(value.parse()?),
            "record_log" => self.record_log = Some(PathBuf::from(value)),
            "subject" => self.subject = Some(value.to_string()),
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            _ => {
                anyhow::bail!(
                    "Unknown config key: {}\n\n\
                     Available keys:\n  \
                     resolver      - TXT record source (doh/system)\n  \
                     doh_endpoint  - DNS-over-HTTPS JSON endpoint URL\n  \
                     timeout_secs  - Per-lookup timeout in seconds\n  \
                     max_retries   - Retries after a failed lookup\n  \
                     record_log    - JSON Lines file for verification records\n  \
                     subject       - Subject identifier written to records\n  \
                     output_format - Default output format (pretty/json/yaml)",
                    key
                );
            }
        }
        Ok(())
    }
}
