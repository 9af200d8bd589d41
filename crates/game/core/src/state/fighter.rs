use crate::config::ArenaLayout;

use super::{Archetype, Buffs, EnemyProfile, HeroProfile, Side, Stats};

/// Animation state of a fighter. Presentational only.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Pose {
    #[default]
    Idle,
    Run,
    Attack,
    Block,
    Hit,
    Dodge,
    Dead,
    Special,
    Retreat,
    Win,
}

/// One combatant's full mutable battle state.
///
/// Hp is private so every change goes through [`Fighter::take_damage`] or
/// [`Fighter::heal`], which keep `0 <= hp <= max_hp`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub name: String,
    pub archetype: Archetype,
    pub side: Side,

    // Progression snapshot, read-only during a match.
    pub level: u32,
    pub base_stats: Stats,
    pub stats: Stats,
    pub is_boss: bool,

    hp: u32,
    max_hp: u32,

    pub x: f32,
    pub y: f32,
    pub start_x: f32,
    pub facing: f32,
    pub pose: Pose,
    pub is_crit: bool,
    pub held_weapon: Option<String>,

    pub buffs: Buffs,
}

impl Fighter {
    /// Creates a fighter at full hp, placed at the origin.
    pub fn new(
        name: impl Into<String>,
        archetype: Archetype,
        side: Side,
        level: u32,
        stats: Stats,
    ) -> Self {
        let max_hp = Self::max_hp_for(stats.str, level, false);
        Self {
            name: name.into(),
            archetype,
            side,
            level,
            base_stats: stats,
            stats,
            is_boss: false,
            hp: max_hp,
            max_hp,
            x: 0.0,
            y: 0.0,
            start_x: 0.0,
            facing: side.default_facing(),
            pose: Pose::Idle,
            is_crit: false,
            held_weapon: None,
            buffs: Buffs::default(),
        }
    }

    pub fn from_hero(hero: &HeroProfile, arena: &ArenaLayout) -> Self {
        Self::new(
            hero.name.clone(),
            hero.archetype,
            Side::Player,
            hero.level,
            hero.stats,
        )
        .with_base_stats(hero.base_stats)
        .placed_at(arena.player_x, arena.ground_y)
    }

    pub fn from_enemy(enemy: &EnemyProfile, arena: &ArenaLayout) -> Self {
        Self::new(
            enemy.name.clone(),
            enemy.archetype,
            Side::Enemy,
            enemy.level,
            enemy.stats,
        )
        .with_boss(enemy.is_boss)
        .placed_at(arena.enemy_x, arena.ground_y)
    }

    pub fn with_base_stats(mut self, base_stats: Stats) -> Self {
        self.base_stats = base_stats;
        self
    }

    /// Marks the fighter as a boss and refills the doubled hp pool.
    pub fn with_boss(mut self, is_boss: bool) -> Self {
        self.is_boss = is_boss;
        self.max_hp = Self::max_hp_for(self.stats.str, self.level, is_boss);
        self.hp = self.max_hp;
        self
    }

    pub fn placed_at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self.start_x = x;
        self
    }

    /// `100 + str*5 + level*20`, doubled for a boss.
    pub const fn max_hp_for(str: u32, level: u32, is_boss: bool) -> u32 {
        let hp = 100 + str * 5 + level * 20;
        if is_boss { hp * 2 } else { hp }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    /// Subtracts `amount`, saturating at zero. Returns the hp removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_sub(amount);
        before - self.hp
    }

    /// Adds `amount`, clamped to max hp. Returns the hp restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// Effective agility after the agility multiplier, floored.
    pub fn boosted_agi(&self) -> u32 {
        (f64::from(self.stats.agi) * self.buffs.agi_multiplier).floor() as u32
    }

    /// Drops the per-exchange buffs and the held weapon after an impact.
    pub fn end_exchange(&mut self) {
        self.buffs.reset_after_impact();
        self.held_weapon = None;
    }

    /// Puts the fighter back on its start position, idle, with default facing.
    pub fn snap_home(&mut self) {
        self.x = self.start_x;
        self.facing = self.side.default_facing();
        self.pose = Pose::Idle;
    }
}
