use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_CURRENCY_XML: &str = "currency.xml";
pub const DEFAULT_ITEMS_PATH: &str = "items.jsonl";
pub const DEFAULT_CONFIG_FILE: &str = "shopping-feed.yaml";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct FeedConfig {
    /// Exchange-rate XML read by `currencies`
    pub currency_xml: PathBuf,
    /// Item documents rewritten by `enrich`
    pub items_path: PathBuf,
    /// Replace the items file through a temporary file and rename
    pub atomic_write: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            currency_xml: PathBuf::from(DEFAULT_CURRENCY_XML),
            items_path: PathBuf::from(DEFAULT_ITEMS_PATH),
            atomic_write: false,
        }
    }
}

impl FeedConfig {
    /// Loads the config file when one is given, otherwise the working-directory defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_path(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
