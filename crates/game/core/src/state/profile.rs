//! Hero and enemy profile snapshots.
//!
//! Profiles are the persistent side of a fighter. The match reads them when
//! it starts and the progression rules describe how they change when it ends;
//! storing them is left to the caller.

use crate::config::MatchConfig;
use crate::env::{AssetId, OracleError};
use crate::progression::{ProfileUpdate, max_exp_for_level};

use super::{Archetype, ProfileError, Stat, Stats};

/// Unique id of one owned copy of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct InstanceId(pub u64);

impl core::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One owned item: which definition it is and which copy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemInstance {
    pub id: AssetId,
    pub instance: InstanceId,
}

impl ItemInstance {
    pub fn new(id: impl Into<AssetId>, instance: InstanceId) -> Self {
        Self {
            id: id.into(),
            instance,
        }
    }
}

/// A battle slot: a skill by id, or a specific owned item copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquippedSlot {
    Skill(AssetId),
    Item(InstanceId),
}

/// Persistent state of a playable hero.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroProfile {
    pub name: String,
    pub archetype: Archetype,
    pub level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exp: u32,
    pub max_exp: u32,
    /// Floor for refunds; allocated points sit on top of it in `stats`.
    pub base_stats: Stats,
    pub stats: Stats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub points: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<AssetId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<ItemInstance>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped: Vec<EquippedSlot>,
    /// Keys like `treant_10`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub defeated_bosses: Vec<String>,
}

impl HeroProfile {
    pub fn new(
        name: impl Into<String>,
        archetype: Archetype,
        level: u32,
        base_stats: Stats,
        points: u32,
    ) -> Self {
        Self {
            name: name.into(),
            archetype,
            level,
            exp: 0,
            max_exp: max_exp_for_level(level),
            base_stats,
            stats: base_stats,
            points,
            skills: Vec::new(),
            items: Vec::new(),
            equipped: Vec::new(),
            defeated_bosses: Vec::new(),
        }
    }

    pub fn with_skill(mut self, skill: impl Into<AssetId>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Adds an item with the next free instance id.
    pub fn with_item(mut self, item: impl Into<AssetId>) -> Self {
        let instance = self.next_instance_id();
        self.items.push(ItemInstance::new(item, instance));
        self
    }

    /// Spends one unspent point on `stat`.
    pub fn allocate_point(&mut self, stat: Stat) -> Result<(), ProfileError> {
        if self.points == 0 {
            return Err(ProfileError::NoPointsLeft);
        }
        self.points -= 1;
        *self.stats.get_mut(stat) += 1;
        Ok(())
    }

    /// Takes one point back from `stat`, never going below its base value.
    pub fn refund_point(&mut self, stat: Stat) -> Result<(), ProfileError> {
        if self.stats.get(stat) <= self.base_stats.get(stat) {
            return Err(ProfileError::AtBaseStat { stat });
        }
        *self.stats.get_mut(stat) -= 1;
        self.points += 1;
        Ok(())
    }

    pub fn owns(&self, slot: &EquippedSlot) -> bool {
        match slot {
            EquippedSlot::Skill(id) => self.skills.contains(id),
            EquippedSlot::Item(instance) => self.items.iter().any(|i| i.instance == *instance),
        }
    }

    pub fn is_equipped(&self, slot: &EquippedSlot) -> bool {
        self.equipped.contains(slot)
    }

    /// Unequips `slot` if equipped, otherwise equips it.
    ///
    /// Returns whether the slot is equipped afterwards.
    pub fn toggle_equip(&mut self, slot: EquippedSlot) -> Result<bool, ProfileError> {
        if let Some(pos) = self.equipped.iter().position(|s| *s == slot) {
            self.equipped.remove(pos);
            return Ok(false);
        }
        if !self.owns(&slot) {
            return Err(ProfileError::NotOwned);
        }
        if self.equipped.len() >= MatchConfig::MAX_EQUIPPED_SLOTS {
            return Err(ProfileError::InventoryFull {
                max: MatchConfig::MAX_EQUIPPED_SLOTS,
            });
        }
        self.equipped.push(slot);
        Ok(true)
    }

    /// One past the largest instance id the hero owns.
    pub fn next_instance_id(&self) -> InstanceId {
        let max = self.items.iter().map(|i| i.instance.0).max().unwrap_or(0);
        InstanceId(max + 1)
    }

    /// Resolves a battle slot to the asset it invokes.
    pub fn resolve_slot(&self, slot: &EquippedSlot) -> Result<AssetId, OracleError> {
        match slot {
            EquippedSlot::Skill(id) => Ok(id.clone()),
            EquippedSlot::Item(instance) => self
                .items
                .iter()
                .find(|i| i.instance == *instance)
                .map(|i| i.id.clone())
                .ok_or(OracleError::InstanceNotOwned(instance.0)),
        }
    }

    /// Drops consumed item copies from the inventory and the equipped slots.
    pub fn remove_items(&mut self, consumed: &[InstanceId]) {
        self.items.retain(|i| !consumed.contains(&i.instance));
        self.equipped.retain(|slot| match slot {
            EquippedSlot::Item(instance) => !consumed.contains(instance),
            EquippedSlot::Skill(_) => true,
        });
    }

    /// Writes a match result into the profile.
    pub fn apply_update(&mut self, update: &ProfileUpdate) {
        self.remove_items(&update.consumed_items);

        if let Some(key) = &update.defeated_boss {
            if !self.defeated_bosses.contains(key) {
                self.defeated_bosses.push(key.clone());
            }
        }

        self.level = update.level;
        self.exp = update.exp;
        self.max_exp = update.max_exp;
        self.points += update.points_gained;

        for skill in &update.new_skills {
            if !self.skills.contains(skill) {
                self.skills.push(skill.clone());
            }
        }
        self.items.extend(update.drops.iter().cloned());
    }
}

/// Snapshot of an opponent for one match.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyProfile {
    pub name: String,
    pub archetype: Archetype,
    pub level: u32,
    pub stats: Stats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_boss: bool,
}

impl EnemyProfile {
    /// Creates an enemy named after its archetype.
    pub fn new(archetype: Archetype, level: u32, stats: Stats, is_boss: bool) -> Self {
        Self {
            name: archetype.display_name().to_owned(),
            archetype,
            level,
            stats,
            is_boss,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Key recorded in the hero's defeated-boss list, e.g. `treant_10`.
    pub fn boss_key(&self) -> String {
        format!("{}_{}", self.archetype, self.level)
    }
}
