use std::collections::HashMap;

use crate::state::{Fighter, Pose};

use super::OracleError;

/// Registry lookup for skill and item definitions.
///
/// The match holds the registry as a trait object so tests can swap in a
/// stub catalog with only the assets they exercise.
pub trait AssetOracle: Send + Sync {
    fn definition(&self, id: &AssetId) -> Option<AssetDefinition>;

    /// Returns all asset definitions available in this oracle.
    fn all_definitions(&self) -> Vec<AssetDefinition>;

    fn lookup(&self, id: &AssetId) -> Result<AssetDefinition, OracleError> {
        self.definition(id)
            .ok_or_else(|| OracleError::AssetNotFound(id.clone()))
    }
}

/// Identifier of a skill or item definition (e.g. `crazy_slash`, `apple`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AssetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AssetId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AssetKind {
    /// Owned permanently; usable once per match.
    Skill,
    /// Single-use; removed from the hero's inventory when used.
    Item,
}

/// One mutation applied to the fighter that uses an asset.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssetEffect {
    ForceCombo,
    ForceCrit,
    ForceBlock,
    ForceDodge,
    /// Adds `floor(str * multiplier)` to the next impact.
    StrengthBonus { multiplier: f64 },
    AttackBoost { amount: f64 },
    AgilityBoost { amount: f64 },
    Fireball,
    Heal { amount: u32 },
}

impl AssetEffect {
    /// Applies the effect to `user` and returns the hp actually restored.
    pub fn apply(&self, user: &mut Fighter) -> u32 {
        if let Self::Heal { amount } = *self {
            return user.heal(amount);
        }
        let buffs = &mut user.buffs;
        match *self {
            Self::ForceCombo => buffs.force_combo = true,
            Self::ForceCrit => buffs.force_crit = true,
            Self::ForceBlock => buffs.force_block = true,
            Self::ForceDodge => buffs.force_dodge = true,
            Self::StrengthBonus { multiplier } => buffs.str_bonus_multiplier = multiplier,
            Self::AttackBoost { amount } => buffs.atk_multiplier += amount,
            Self::AgilityBoost { amount } => buffs.agi_multiplier += amount,
            Self::Fireball => buffs.fireball_bonus = true,
            Self::Heal { .. } => {}
        }
        0
    }

    /// Defensive buffs and heals replace the attack for the turn.
    pub fn is_defensive(&self) -> bool {
        matches!(self, Self::ForceBlock | Self::ForceDodge | Self::Heal { .. })
    }
}

/// Presentational hint shown while an asset is active.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Flourish {
    /// Weapon sprite tag carried until the next impact.
    HoldWeapon(String),
    SpecialPose,
}

impl Flourish {
    pub fn apply(&self, user: &mut Fighter) {
        match self {
            Self::HoldWeapon(tag) => user.held_weapon = Some(tag.clone()),
            Self::SpecialPose => user.pose = Pose::Special,
        }
    }
}

/// Immutable registry entry for a skill or item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetDefinition {
    pub id: AssetId,
    pub display_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
    pub kind: AssetKind,
    pub effects: Vec<AssetEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flourish: Option<Flourish>,
}

impl AssetDefinition {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, kind: AssetKind) -> Self {
        Self {
            id: AssetId::new(id),
            display_name: display_name.into(),
            description: String::new(),
            icon: String::new(),
            kind,
            effects: Vec::new(),
            flourish: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_effect(mut self, effect: AssetEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_flourish(mut self, flourish: Flourish) -> Self {
        self.flourish = Some(flourish);
        self
    }

    /// True when every effect is defensive, so using it skips the attack.
    pub fn ends_turn(&self) -> bool {
        !self.effects.is_empty() && self.effects.iter().all(AssetEffect::is_defensive)
    }

    /// Applies all effects and the flourish to `user`, returning hp restored.
    pub fn apply(&self, user: &mut Fighter) -> u32 {
        let healed = self
            .effects
            .iter()
            .fold(0u32, |acc, effect| acc.saturating_add(effect.apply(user)));
        if let Some(flourish) = &self.flourish {
            flourish.apply(user);
        }
        healed
    }
}

/// HashMap-backed [`AssetOracle`].
#[derive(Clone, Debug, Default)]
pub struct AssetCatalog {
    definitions: HashMap<AssetId, AssetDefinition>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = AssetDefinition>) -> Self {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.insert(definition);
        }
        catalog
    }

    /// Inserts or replaces a definition, returning the previous one.
    pub fn insert(&mut self, definition: AssetDefinition) -> Option<AssetDefinition> {
        self.definitions.insert(definition.id.clone(), definition)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl AssetOracle for AssetCatalog {
    fn definition(&self, id: &AssetId) -> Option<AssetDefinition> {
        self.definitions.get(id).cloned()
    }

    fn all_definitions(&self) -> Vec<AssetDefinition> {
        let mut all: Vec<_> = self.definitions.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Archetype, Side, Stats};

    fn fighter() -> Fighter {
        Fighter::new("Tester", Archetype::Wolf, Side::Player, 1, Stats::new(10, 10, 10))
    }

    #[test]
    fn lookup_reports_unknown_ids() {
        let catalog = AssetCatalog::new();
        let err = catalog.lookup(&AssetId::new("ghost")).unwrap_err();
        assert_eq!(err, OracleError::AssetNotFound(AssetId::new("ghost")));
    }

    #[test]
    fn heal_is_clamped_and_reports_restored_amount() {
        let mut user = fighter();
        let max = user.max_hp();
        user.take_damage(50);

        let healed = AssetEffect::Heal { amount: 240 }.apply(&mut user);
        assert_eq!(healed, 50);
        assert_eq!(user.hp(), max);
    }

    #[test]
    fn boosts_stack_additively() {
        let mut user = fighter();
        AssetEffect::AttackBoost { amount: 0.2 }.apply(&mut user);
        AssetEffect::AgilityBoost { amount: 0.5 }.apply(&mut user);
        assert!((user.buffs.atk_multiplier - 1.2).abs() < 1e-9);
        assert!((user.buffs.agi_multiplier - 1.5).abs() < 1e-9);
    }

    #[test]
    fn defensive_assets_end_the_turn() {
        let shield = AssetDefinition::new("shield", "Shield", AssetKind::Item)
            .with_effect(AssetEffect::ForceBlock);
        let club = AssetDefinition::new("spiked_club", "Spiked Club", AssetKind::Item)
            .with_effect(AssetEffect::StrengthBonus { multiplier: 0.2 })
            .with_effect(AssetEffect::ForceCrit);
        let empty = AssetDefinition::new("nothing", "Nothing", AssetKind::Skill);

        assert!(shield.ends_turn());
        assert!(!club.ends_turn());
        assert!(!empty.ends_turn());
    }

    #[test]
    fn definition_applies_flourish() {
        let mut user = fighter();
        let dagger = AssetDefinition::new("dagger", "Dagger", AssetKind::Item)
            .with_effect(AssetEffect::AgilityBoost { amount: 0.5 })
            .with_flourish(Flourish::HoldWeapon("dagger".into()));

        assert_eq!(dagger.apply(&mut user), 0);
        assert_eq!(user.held_weapon.as_deref(), Some("dagger"));
    }

    #[test]
    fn all_definitions_is_sorted_by_id() {
        let catalog = AssetCatalog::from_definitions([
            AssetDefinition::new("water", "Water", AssetKind::Item),
            AssetDefinition::new("apple", "Apple", AssetKind::Item),
        ]);
        let ids: Vec<_> = catalog
            .all_definitions()
            .into_iter()
            .map(|d| d.id.to_string())
            .collect();
        assert_eq!(ids, ["apple", "water"]);
        assert_eq!(catalog.len(), 2);
    }
}
