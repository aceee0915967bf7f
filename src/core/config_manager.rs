// src/core/config_manager.rs
//! Configuration: defaults, then config.yaml (per environment), then environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::types::matching::DEFAULT_TOP_K;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ADDRESS: &str = "0.0.0.0";
pub const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigManager {
    pub environment: String,
    pub api: ApiConfig,
    pub server: ServerConfig,
    pub matching: MatchingConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub log_file: Option<PathBuf>,
}

/// Defaults for match requests that do not say otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingConfig {
    pub default_top_k: u32,
}

/// One environment section of config.yaml. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
struct FileSection {
    api_url: Option<String>,
    timeout_seconds: Option<u64>,
    address: Option<String>,
    port: Option<u16>,
    log_file: Option<PathBuf>,
    default_top_k: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: FileSection,
    #[serde(default)]
    production: FileSection,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            api: ApiConfig {
                base_url: DEFAULT_API_URL.to_string(),
                timeout_seconds: None,
            },
            server: ServerConfig {
                address: DEFAULT_ADDRESS.to_string(),
                port: DEFAULT_PORT,
                log_file: None,
            },
            matching: MatchingConfig {
                default_top_k: DEFAULT_TOP_K,
            },
        }
    }
}

impl ConfigManager {
    /// Load from `config_path` (if present) and the variables `lookup` resolves
    pub fn load_with<F>(config_path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("CV_CONSOLE_ENV")
            .or_else(|| lookup("ENVIRONMENT"))
            .unwrap_or_else(|| "local".to_string());

        let mut config = Self {
            environment: environment.clone(),
            ..Self::default()
        };

        if config_path.exists() {
            let section = Self::read_section(config_path, &environment)?;
            config.apply_section(section);
        }

        config.apply_env(lookup)?;
        Ok(config)
    }

    fn read_section(path: &Path, environment: &str) -> Result<FileSection> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(match environment {
            "production" => file.production,
            _ => file.local,
        })
    }

    fn apply_section(&mut self, section: FileSection) {
        if let Some(url) = section.api_url {
            self.api.base_url = url;
        }
        if section.timeout_seconds.is_some() {
            self.api.timeout_seconds = section.timeout_seconds;
        }
        if let Some(address) = section.address {
            self.server.address = address;
        }
        if let Some(port) = section.port {
            self.server.port = port;
        }
        if section.log_file.is_some() {
            self.server.log_file = section.log_file;
        }
        if let Some(top_k) = section.default_top_k {
            self.matching.default_top_k = top_k;
        }
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("CV_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup("CV_API_TIMEOUT_SECS") {
            let secs = timeout
                .parse::<u64>()
                .context("CV_API_TIMEOUT_SECS must be a whole number of seconds")?;
            self.api.timeout_seconds = Some(secs);
        }
        if let Some(address) = lookup("CV_CONSOLE_ADDRESS") {
            self.server.address = address;
        }
        if let Some(port) = lookup("CV_CONSOLE_PORT") {
            self.server.port = port
                .parse::<u16>()
                .context("CV_CONSOLE_PORT must be a valid port number")?;
        }
        if let Some(path) = lookup("CV_CONSOLE_LOG_FILE") {
            self.server.log_file = Some(PathBuf::from(path));
        }
        if let Some(top_k) = lookup("CV_CONSOLE_TOP_K") {
            self.matching.default_top_k = top_k
                .parse::<u32>()
                .context("CV_CONSOLE_TOP_K must be a whole number")?;
        }
        Ok(())
    }

    /// Apply command-line overrides, which win over every other source
    pub fn with_overrides(mut self, api_url: Option<String>, port: Option<u16>) -> Self {
        if let Some(url) = api_url {
            self.api.base_url = url;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}
