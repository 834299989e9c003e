//! Server configuration.
//!
//! Provides [`CashcardConfig`], loaded from TOML files, environment
//! variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `CASHCARD_CONFIG` environment variable
//! 3. XDG default: `~/.config/cashcard/config.toml`
//! 4. Built-in defaults

use std::path::PathBuf;

use cashcard_core::{Error, Result};
use confyg::{Confygery, env};
use serde::{Deserialize, Serialize};

/// Main configuration for the Cashcard server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CashcardConfig {
    /// Listener configuration.
    pub server: ServerConfig,

    /// Record store configuration.
    pub store: StoreConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,

    /// Port to listen on.
    pub port: u16,
}

/// Record store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Pre-populate the store with the demo card set on startup.
    pub seed_demo: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed_demo: true }
    }
}

impl CashcardConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("CASHCARD");
        env_opts.add_section("server");
        env_opts.add_section("store");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("CASHCARD_CONFIG") {
            return Some(PathBuf::from(path));
        }

        dirs::config_dir().map(|d| d.join("cashcard").join("config.toml"))
    }

    /// The socket address string to bind the listener to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CashcardConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(config.store.seed_demo);
    }

    #[test]
    fn test_bind_addr() {
        let mut config = CashcardConfig::default();
        config.server.port = 9999;
        assert_eq!(config.bind_addr(), "127.0.0.1:9999");
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = CashcardConfig::resolve_config_path(Some("/tmp/cashcard.toml"));
        assert_eq!(path, Some(PathBuf::from("/tmp/cashcard.toml")));
    }
}
