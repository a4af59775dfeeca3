use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::collate::Collation;
use crate::link::CategoryRules;
use crate::store::FileStore;
use crate::{DEFAULT_CATEGORY, DEFAULT_STORAGE_KEY};

/// Global configuration loaded from `~/.config/linkshelf/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfConfig {
    /// Key the link collection is stored under. Scopes this app's data within the store file.
    pub storage_key: String,
    /// Category given to links added without one.
    pub default_category: String,
    /// Collation locale for ordering categories: "sv" (default) or "root".
    #[serde(default)]
    pub collation: Collation,
    /// Store file location; defaults to `~/.local/share/linkshelf/store.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_category: DEFAULT_CATEGORY.to_string(),
            collation: Collation::default(),
            store_path: None,
        }
    }
}

impl ShelfConfig {
    pub fn category_rules(&self) -> CategoryRules {
        CategoryRules::new(self.default_category.clone(), self.collation)
    }

    /// Store file to use: `override_path` if given, else the configured path, else the XDG default.
    pub fn resolve_store_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        match override_path.or(self.store_path.as_deref()) {
            Some(p) => Ok(p.to_path_buf()),
            None => FileStore::default_path(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkshelf")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ShelfConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ShelfConfig> {
    if !path.exists() {
        let default_cfg = ShelfConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ShelfConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
