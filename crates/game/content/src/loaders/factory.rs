//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use fighter_core::{AssetCatalog, MatchConfig, ProgressionRules};
use tracing::debug;

use crate::builtin::builtin_catalog;
use crate::loaders::{AssetLoader, ConfigLoader, HeroLoader, LoadResult, ProgressionLoader};
use crate::presets::{HeroPreset, default_presets};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── progression.toml
/// ├── assets.ron
/// └── heroes.ron
/// ```
///
/// Every file is optional: a missing one falls back to the built-in
/// content, while a present but malformed one is an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load match configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<MatchConfig> {
        self.load_or("config.toml", ConfigLoader::load, MatchConfig::default)
    }

    /// Load progression rules from `progression.toml`.
    pub fn load_progression(&self) -> LoadResult<ProgressionRules> {
        self.load_or("progression.toml", ProgressionLoader::load, ProgressionRules::default)
    }

    /// Load the skill and item catalog from `assets.ron`.
    pub fn load_assets(&self) -> LoadResult<AssetCatalog> {
        self.load_or(
            "assets.ron",
            |path| AssetLoader::load(path).map(AssetCatalog::from_definitions),
            builtin_catalog,
        )
    }

    /// Load starting heroes from `heroes.ron`.
    pub fn load_heroes(&self) -> LoadResult<Vec<HeroPreset>> {
        self.load_or("heroes.ron", HeroLoader::load, default_presets)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn load_or<T>(
        &self,
        file: &str,
        load: impl FnOnce(&Path) -> LoadResult<T>,
        fallback: impl FnOnce() -> T,
    ) -> LoadResult<T> {
        let path = self.data_dir.join(file);
        if !path.exists() {
            debug!(path = %path.display(), "content file missing, using built-in defaults");
            return Ok(fallback());
        }
        load(&path)
    }
}
