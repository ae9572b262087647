//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shop_commerce::prelude::Storefront;
use shop_store::{MemoryStore, Snapshot};

use crate::config::ShopConfig;
use crate::output::Output;

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Directory relative paths in the config resolve against.
    pub base_dir: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, base_dir) = if let Some(path) = config_path {
            let config = ShopConfig::load(path)?;
            (config, parent_dir(Path::new(path), &cwd))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((path, config)) => (config, parent_dir(&path, &cwd)),
                None => (ShopConfig::default(), cwd.clone()),
            }
        };
        config.validate()?;

        Ok(Self {
            config,
            output,
            cwd,
            base_dir,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PathBuf, ShopConfig)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = ShopConfig::load(config_path.to_str()?) {
                        return Some((config_path, config));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Path of the data snapshot.
    pub fn data_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.config.catalog.data_file);
        if path.is_absolute() {
            path
        } else {
            self.base_dir.join(path)
        }
    }

    /// Open the storefront over the data snapshot.
    pub async fn open_shop(&self) -> Result<Storefront<MemoryStore>> {
        let path = self.data_path();
        self.output
            .debug(&format!("Loading data from {}", path.display()));

        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read data file: {}", path.display()))?;
        let snapshot = Snapshot::from_json(&content)
            .with_context(|| format!("Failed to parse data file: {}", path.display()))?;

        Ok(Storefront::new(
            MemoryStore::from_snapshot(snapshot),
            self.config.pricing_config(),
        ))
    }

    /// Write the storefront's data back to the snapshot.
    pub async fn save_shop(&self, shop: &Storefront<MemoryStore>) -> Result<()> {
        let path = self.data_path();
        let content = shop.store().snapshot()?.to_json()?;
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write data file: {}", path.display()))?;
        self.output.debug(&format!("Saved data to {}", path.display()));
        Ok(())
    }

    /// Format an amount with the configured currency.
    pub fn money(&self, amount: shop_commerce::Money) -> String {
        self.config.money(amount)
    }
}

fn parent_dir(path: &Path, cwd: &Path) -> PathBuf {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => return cwd.to_path_buf(),
    };
    if dir.is_absolute() {
        dir
    } else {
        cwd.join(dir)
    }
}
