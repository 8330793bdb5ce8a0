use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Top-level configuration.
///
/// Loaded from an optional YAML file, then overridden by environment
/// variables. Every field has a default, so the server runs with no
/// configuration at all.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub worker_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory the server is allowed to serve from. Resolution never
    /// escapes it.
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            worker_threads: 4,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./public"),
        }
    }
}

impl Config {
    /// Loads configuration.
    ///
    /// Order of precedence, lowest to highest: built-in defaults, the YAML
    /// file named by `STATICD_CONFIG` (if set), then the `LISTEN`,
    /// `WORKER_THREADS` and `WEB_ROOT` environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("STATICD_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Ok(threads) = std::env::var("WORKER_THREADS") {
            cfg.server.worker_threads = threads
                .parse()
                .context("WORKER_THREADS must be a positive integer")?;
        }
        if let Ok(root) = std::env::var("WEB_ROOT") {
            cfg.static_files.root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path))
    }
}
