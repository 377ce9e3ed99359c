// ⚙️ Configuration
// Optional JSON settings for the console loop, server, and logging

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Env var naming a JSON config file
pub const CONFIG_ENV: &str = "NUMBER_WORDS_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Printed before every line is read
    pub prompt: String,

    /// Printed when the user quits
    pub farewell: String,

    /// Address the API server binds to
    pub server_addr: String,

    /// Default tracing filter when NUMBER_WORDS_LOG is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "Enter a number to convert or <enter> to quit: ".to_string(),
            farewell: "Thanks for playing!".to_string(),
            server_addr: "0.0.0.0:3000".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load settings from a JSON file; missing fields keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse config JSON")
    }

    /// Config from the file in NUMBER_WORDS_CONFIG, or the defaults
    pub fn load() -> Result<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(path),
            None => Ok(Config::default()),
        }
    }
}
