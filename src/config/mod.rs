//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

fn default_port() -> u16 {
    4000
}

/// Server configuration
///
/// Loadable from a YAML file, with environment variables taking precedence:
/// `PORT`, `PG_CONNECTION_STRING` and `SEED_FILE` each override their field
/// when set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the gateway listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Postgres connection string; the in-memory store is used when unset
    #[serde(default)]
    pub database_url: Option<String>,

    /// Optional JSON seed file for the in-memory store
    #[serde(default)]
    pub seed_file: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            database_url: None,
            seed_file: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {path}"))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("failed to parse config")?;
        Ok(config)
    }

    /// Default configuration with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Apply environment variable overrides to this configuration
    pub fn apply_env(&mut self) {
        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("ignoring unparsable PORT value: {}", port),
            }
        }
        if let Ok(url) = std::env::var("PG_CONNECTION_STRING") {
            self.database_url = Some(url);
        }
        if let Ok(path) = std::env::var("SEED_FILE") {
            self.seed_file = Some(path);
        }
    }

    /// The address the gateway binds to
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
