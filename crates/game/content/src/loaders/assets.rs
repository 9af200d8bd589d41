//! Asset catalog loader.

use std::collections::HashSet;
use std::path::Path;

use fighter_core::{AssetDefinition, AssetEffect};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Asset catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetFile {
    pub assets: Vec<AssetDefinition>,
}

/// Loader for skill and item definitions from RON files.
pub struct AssetLoader;

impl AssetLoader {
    /// Load asset definitions from a RON file.
    ///
    /// Fails on a duplicate id, since later entries would silently shadow
    /// earlier ones in the catalog, and on a negative boost.
    pub fn load(path: &Path) -> LoadResult<Vec<AssetDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<AssetDefinition>> {
        let file: AssetFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse asset catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for asset in &file.assets {
            if !seen.insert(asset.id.clone()) {
                anyhow::bail!("Duplicate asset id in catalog: {}", asset.id);
            }
            if let Some(effect) = asset.effects.iter().find(|e| !is_non_negative(e)) {
                anyhow::bail!("Negative effect on asset {}: {:?}", asset.id, effect);
            }
        }
        Ok(file.assets)
    }
}

fn is_non_negative(effect: &AssetEffect) -> bool {
    match *effect {
        AssetEffect::StrengthBonus { multiplier } => multiplier >= 0.0,
        AssetEffect::AttackBoost { amount } | AssetEffect::AgilityBoost { amount } => amount >= 0.0,
        _ => true,
    }
}
