//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Store settings.
    #[serde(default)]
    pub store: StoreConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name shown in headers and the shop banner.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Path to a catalog seed document (JSON with `products` and `deals`
    /// arrays). The built-in demo catalog is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

fn default_store_name() -> String {
    "Fashion With Heart".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            catalog: None,
        }
    }
}

/// Generate a default fwh.toml config file.
pub fn generate_default_config() -> String {
    r#"# Fashion With Heart storefront configuration

[store]
name = "Fashion With Heart"
# Point at a catalog seed to replace the built-in demo catalog.
# catalog = "catalog.json"
"#
    .to_string()
}
