use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: u16,
    pub max_body_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 5000,
            max_body_size: 1024 * 1024,
        }
    }
}

impl Config {
    /// Read a config file, falling back to defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents).context("failed to deserialize config")
    }
}
