//! Configuration management for PPIN CLI
//!
//! Settings come from environment variables (a `.env` file is honored) and
//! command-line flags, flags winning. There is no config file.

use crate::error::{CliError, Result};
use crate::Cli;
use ppin_sources::{SourceSettings, DEFAULT_BIOGRID_URL, DEFAULT_STRING_URL, HUMAN_TAXONOMY_ID};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Default timeout for upstream requests in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variables that control the CLI, with descriptions
pub const ENV_VARS: &[(&str, &str)] = &[
    ("BIOGRID_ACCESS_KEY", "BioGRID access key (required for BioGRID queries)"),
    ("PPIN_BIOGRID_URL", "BioGRID interaction search endpoint"),
    ("PPIN_STRING_URL", "STRING network endpoint"),
    ("PPIN_SPECIES", "NCBI taxonomy id (default: 9606, human)"),
    ("PPIN_HTTP_TIMEOUT_SECS", "HTTP request timeout in seconds"),
    ("PPIN_LOG_LEVEL", "Log level: trace, debug, info, warn, error"),
    ("PPIN_LOG_OUTPUT", "Log output: console, file, both"),
    ("PPIN_LOG_FORMAT", "Log format: text, json"),
    ("PPIN_LOG_DIR", "Directory for log files"),
    ("PPIN_LOG_FILTER", "Extra tracing filter directives"),
];

/// CLI configuration
#[derive(Debug)]
pub struct Config {
    /// BioGRID interaction search endpoint
    pub biogrid_url: String,

    /// STRING network endpoint
    pub string_url: String,

    /// NCBI taxonomy id sent with every query
    pub species: u32,

    /// BioGRID access key, never printed
    pub biogrid_access_key: Option<SecretString>,

    /// Upstream request timeout
    pub timeout: Duration,

    /// Enable verbose output
    pub verbose: bool,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self {
            biogrid_url: DEFAULT_BIOGRID_URL.to_string(),
            string_url: DEFAULT_STRING_URL.to_string(),
            species: HUMAN_TAXONOMY_ID,
            biogrid_access_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            verbose: false,
        }
    }

    /// Resolve from parsed arguments; clap has already applied env fallbacks
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if cli.timeout == 0 {
            return Err(CliError::config("HTTP timeout must be at least 1 second"));
        }

        let biogrid_access_key = cli
            .biogrid_access_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| SecretString::from(key.to_string()));

        Ok(Self {
            biogrid_url: cli.biogrid_url.clone(),
            string_url: cli.string_url.clone(),
            species: cli.species,
            biogrid_access_key,
            timeout: Duration::from_secs(cli.timeout),
            verbose: cli.verbose,
        })
    }

    /// Settings handed to the source adapters
    pub fn source_settings(&self) -> SourceSettings {
        SourceSettings {
            biogrid_url: self.biogrid_url.clone(),
            string_url: self.string_url.clone(),
            species: self.species,
            biogrid_access_key: self
                .biogrid_access_key
                .as_ref()
                .map(|key| SecretString::from(key.expose_secret().to_owned())),
        }
    }

    /// HTTP client shared by one analysis
    pub fn http_client(&self) -> Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("ppin/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(client)
    }

    /// Whether an access key is configured
    pub fn has_access_key(&self) -> bool {
        self.biogrid_access_key.is_some()
    }

    /// Access key for display: masked, showing at most the last four characters
    pub fn redacted_access_key(&self) -> String {
        match &self.biogrid_access_key {
            None => "(not set)".to_string(),
            Some(key) => {
                let key = key.expose_secret();
                let count = key.chars().count();
                if count <= 8 {
                    "*".repeat(count)
                } else {
                    let tail: String = key.chars().skip(count - 4).collect();
                    format!("{}{}", "*".repeat(count - 4), tail)
                }
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ppin").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.biogrid_url, DEFAULT_BIOGRID_URL);
        assert_eq!(config.species, 9606);
        assert!(!config.has_access_key());
        assert_eq!(config.redacted_access_key(), "(not set)");
    }

    #[test]
    fn test_flags_override() {
        let cli = parse(&[
            "--string-url",
            "http://localhost:9000/network",
            "--species",
            "10090",
            "--biogrid-access-key",
            "abcdef0123456789",
            "config",
            "show",
        ]);
        let config = Config::from_cli(&cli).unwrap();

        assert_eq!(config.string_url, "http://localhost:9000/network");
        assert_eq!(config.species, 10090);
        assert_eq!(config.redacted_access_key(), "************6789");
        assert_eq!(
            config.source_settings().biogrid_access_key.unwrap().expose_secret(),
            "abcdef0123456789"
        );
    }

    #[test]
    fn test_blank_key_is_absent() {
        let cli = parse(&["--biogrid-access-key", "  ", "config", "show"]);
        assert!(!Config::from_cli(&cli).unwrap().has_access_key());
    }

    #[test]
    fn test_debug_hides_key() {
        let cli = parse(&["--biogrid-access-key", "super-secret-value", "config", "show"]);
        let config = Config::from_cli(&cli).unwrap();
        assert!(!format!("{config:?}").contains("super-secret-value"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let cli = parse(&["--timeout", "0", "config", "show"]);
        assert!(matches!(Config::from_cli(&cli), Err(CliError::Config(_))));
    }
}
