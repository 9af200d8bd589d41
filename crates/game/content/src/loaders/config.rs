//! Match configuration and progression rules loaders.

use std::path::Path;

use fighter_core::{MatchConfig, ProgressionRules};

use crate::loaders::{LoadResult, read_file};

/// Loader for match configuration from TOML files.
///
/// Missing tables and keys fall back to [`MatchConfig::default`].
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<MatchConfig> {
        let content = read_file(path)?;
        let config: MatchConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

/// Loader for experience, level cap and loot rules from TOML files.
pub struct ProgressionLoader;

impl ProgressionLoader {
    pub fn load(path: &Path) -> LoadResult<ProgressionRules> {
        let content = read_file(path)?;
        let rules: ProgressionRules = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse progression TOML: {}", e))?;

        if rules.min_drops > rules.max_drops {
            anyhow::bail!(
                "min_drops ({}) exceeds max_drops ({})",
                rules.min_drops,
                rules.max_drops
            );
        }
        Ok(rules)
    }
}
