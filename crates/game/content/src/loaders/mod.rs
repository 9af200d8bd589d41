//! Content loaders for reading battle data from files.
//!
//! RON files carry catalogs and presets; TOML files carry tunable numbers.

pub mod assets;
pub mod config;
pub mod factory;
pub mod heroes;

pub use assets::AssetLoader;
pub use config::{ConfigLoader, ProgressionLoader};
pub use factory::ContentFactory;
pub use heroes::HeroLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
