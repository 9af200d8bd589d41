//! Hero preset loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::presets::HeroPreset;

/// Hero preset structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroFile {
    pub heroes: Vec<HeroPreset>,
}

/// Loader for starting heroes from RON files.
pub struct HeroLoader;

impl HeroLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<HeroPreset>> {
        let content = read_file(path)?;
        let file: HeroFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse hero presets RON: {}", e))?;

        if file.heroes.is_empty() {
            anyhow::bail!("No hero presets in {}", path.display());
        }
        if let Some(preset) = file.heroes.iter().find(|p| !p.archetype.is_hero()) {
            anyhow::bail!(
                "Hero preset '{}' uses enemy archetype '{}'",
                preset.name,
                preset.archetype
            );
        }
        Ok(file.heroes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn enemy_archetype_is_rejected() {
        let file = write(
            r#"(heroes: [
                (name: "Boss", archetype: villain_3, level: 10, stats: (str: 25, agi: 35, tec: 30)),
            ])"#,
        );

        let err = HeroLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("enemy archetype 'villain_3'"));
    }

    #[test]
    fn empty_hero_list_is_rejected() {
        let file = write("(heroes: [])");
        assert!(HeroLoader::load(file.path()).is_err());
    }
}
