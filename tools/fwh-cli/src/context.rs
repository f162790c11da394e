//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use fwh_commerce::catalog::Catalog;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self {
            config,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &PathBuf) -> Option<CliConfig> {
        let config_names = ["fwh.toml", ".fwh.toml", "fwh.json"];

        let mut current = start.clone();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the catalog this invocation sells from.
    ///
    /// Reads the seed document named by the config when one is set,
    /// otherwise falls back to the built-in demo catalog.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match self.config.store.catalog.as_deref() {
            Some(path) => self.load_catalog_at(path),
            None => Ok(Catalog::demo()),
        }
    }

    /// Load a catalog from a specific seed file.
    pub fn load_catalog_at(&self, path: &str) -> Result<Catalog> {
        let full = self.resolve_path(path);
        let content = std::fs::read_to_string(&full)
            .with_context(|| format!("Failed to read catalog seed: {}", full.display()))?;
        let catalog = Catalog::from_json(&content)
            .with_context(|| format!("Invalid catalog seed: {}", full.display()))?;
        self.output.debug(&format!(
            "Loaded {} products from {}",
            catalog.products().len(),
            full.display()
        ));
        Ok(catalog)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
