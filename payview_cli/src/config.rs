//! CLI configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the configuration directory path
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("payview")
    }

    #[cfg(not(target_os = "windows"))]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".payview")
    }
}

/// Get the config file path
pub fn config_file() -> PathBuf {
    config_dir().join("config.yml")
}

/// Main configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Wrap output in a full HTML document with the default stylesheet
    #[serde(default)]
    pub standalone: bool,

    /// Search term used when `--search` is not given
    #[serde(default)]
    pub search: Option<String>,

    /// Content-type hint used when `--content-type` is not given
    #[serde(default)]
    pub content_type: Option<String>,
}

impl Config {
    /// Load config from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file())
    }

    /// Load config from a file; a missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse config file")
    }

    /// Search term: flag first, then config, then none
    pub fn search_term(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.search.clone()).unwrap_or_default()
    }

    /// Content-type hint: flag first, then config
    pub fn content_type(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.content_type.clone())
    }

    /// Whether to emit a standalone document
    pub fn standalone(&self, flag: bool) -> bool {
        flag || self.standalone
    }
}
