//! Starting heroes offered on a fresh save.

use fighter_core::{Archetype, AssetId, HeroProfile, Stats};

/// Template for a new hero.
///
/// `stats` double as the base stats a refund can never go below. Items are
/// given fresh instance ids in listed order; nothing starts equipped.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroPreset {
    pub name: String,
    pub archetype: Archetype,
    pub level: u32,
    pub stats: Stats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub points: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<AssetId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<AssetId>,
}

impl HeroPreset {
    pub fn into_profile(self) -> HeroProfile {
        let profile = HeroProfile::new(self.name, self.archetype, self.level, self.stats, self.points);
        let profile = self.skills.into_iter().fold(profile, HeroProfile::with_skill);
        self.items.into_iter().fold(profile, HeroProfile::with_item)
    }
}

/// Wolf Boy and Red Girl.
pub fn default_presets() -> Vec<HeroPreset> {
    vec![
        HeroPreset {
            name: "Wolf Boy".to_owned(),
            archetype: Archetype::Wolf,
            level: 5,
            stats: Stats::new(18, 25, 15),
            points: 20,
            skills: vec![AssetId::new("crazy_slash")],
            items: vec![AssetId::new("dagger"), AssetId::new("apple")],
        },
        HeroPreset {
            name: "Red Girl".to_owned(),
            archetype: Archetype::Girl,
            level: 5,
            stats: Stats::new(28, 12, 10),
            points: 20,
            skills: vec![AssetId::new("giants_strength")],
            items: vec![AssetId::new("spiked_club"), AssetId::new("apple")],
        },
    ]
}
