use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tabsel_core::io::TableReaderConfig;

/// Settings shared by every subcommand. Command-line flags override these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabselConfig {
    pub table: TableReaderConfig,
    /// Interpret row/column indices as 1-based.
    pub one_based: bool,
}

impl Default for TabselConfig {
    fn default() -> Self {
        Self {
            table: TableReaderConfig::default(),
            one_based: false,
        }
    }
}

/// Load a configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TabselConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: TabselConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Load `path` if given, otherwise fall back to defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<TabselConfig> {
    match path {
        Some(p) => {
            log::info!("[tabsel] Using config: {:?}", p);
            load_config(p)
        }
        None => {
            log::debug!("[tabsel] No config provided; using defaults.");
            Ok(TabselConfig::default())
        }
    }
}

pub fn default_template() -> String {
    serde_json::to_string_pretty(&TabselConfig::default()).unwrap_or_default()
}
