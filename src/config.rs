//! Application configuration management.
//!
//! This module handles loading and saving the application
//! configuration, which today is just the lookup provider selection.
//!
//! Configuration is stored at `~/.config/civicvoice/config.json`. The
//! enriched-lookup API token is read from the `FIVE_CALLS_TOKEN`
//! environment variable (a `.env` file works too) so it never lands in
//! the config file.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::resolver::LookupProvider;

/// Application name used for config/cache directory paths
const APP_NAME: &str = "civicvoice";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable carrying the enriched-lookup API token.
const TOKEN_ENV_VAR: &str = "FIVE_CALLS_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: LookupProvider,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    /// Enriched-lookup API token from the environment, if set.
    pub fn api_token(&self) -> Option<String> {
        std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|token| !token.is_empty())
    }
}
