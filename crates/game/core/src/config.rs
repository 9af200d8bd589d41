use crate::state::Stats;

/// Match configuration constants and tunable parameters.
///
/// Every field defaults to the values the battle screen was tuned with; a
/// content loader may override any subset from `config.toml`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatchConfig {
    pub timings: TurnTimings,
    pub movement: Movement,
    pub arena: ArenaLayout,
    pub weights: ActionWeights,
    pub combo: ComboRanges,
    pub combat: CombatRules,
}

impl MatchConfig {
    // ===== compile-time constants =====
    /// Maximum number of equipped skill/item slots carried into a battle.
    pub const MAX_EQUIPPED_SLOTS: usize = 8;
}

/// Frame budgets for each timed phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TurnTimings {
    /// Ticks the player has to pick a slot before the turn resolves.
    pub player_decide_ticks: u32,
    /// Ticks before the AI side resolves its decision.
    pub ai_decide_ticks: u32,
    /// Wait after a defensive item or heal skipped the attack.
    pub item_wait_ticks: u32,
    /// Wait after the active fighter is back at its start position.
    pub turn_wait_ticks: u32,
    /// Idle pause before each combo swing.
    pub combo_pause_ticks: u32,
    /// Swing duration of one combo hit.
    pub combo_swing_ticks: u32,
    /// Swing duration of a single attack or critical.
    pub single_swing_ticks: u32,
    /// Delay the driver waits before calling `Match::start_first_turn`.
    pub kickoff_ticks: u32,
}

impl Default for TurnTimings {
    fn default() -> Self {
        Self {
            player_decide_ticks: 30,
            ai_decide_ticks: 1,
            item_wait_ticks: 20,
            turn_wait_ticks: 20,
            combo_pause_ticks: 15,
            combo_swing_ticks: 15,
            single_swing_ticks: 30,
            kickoff_ticks: 30,
        }
    }
}

/// Approach and retreat movement in arena units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Movement {
    /// Distance kept from the target when striking.
    pub approach_offset: f32,
    pub approach_speed: f32,
    /// Remaining distance at which the approach snaps to its destination.
    pub approach_snap: f32,
    pub retreat_speed: f32,
    pub retreat_snap: f32,
    /// Knock-back applied to a fighter that dodged.
    pub dodge_bounce: f32,
}

impl Default for Movement {
    fn default() -> Self {
        Self {
            approach_offset: 80.0,
            approach_speed: 12.0,
            approach_snap: 5.0,
            retreat_speed: 15.0,
            retreat_snap: 10.0,
            dodge_bounce: 15.0,
        }
    }
}

/// Starting positions of both fighters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaLayout {
    pub player_x: f32,
    pub enemy_x: f32,
    pub ground_y: f32,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self {
            player_x: 150.0,
            enemy_x: 650.0,
            ground_y: 450.0,
        }
    }
}

/// Weights of the random action-selection policy.
///
/// `attack` is flat; combo and critical weights scale with the active
/// fighter's technique and agility.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionWeights {
    pub attack: f64,
    pub combo_per_tec: f64,
    pub crit_per_agi: f64,
}

impl ActionWeights {
    /// `(attack, combo, critical)` weights for a fighter with `stats`.
    pub fn for_stats(&self, stats: &Stats) -> (f64, f64, f64) {
        (
            self.attack,
            f64::from(stats.tec) * self.combo_per_tec,
            f64::from(stats.agi) * self.crit_per_agi,
        )
    }
}

impl Default for ActionWeights {
    fn default() -> Self {
        Self {
            attack: 100.0,
            combo_per_tec: 2.0,
            crit_per_agi: 2.0,
        }
    }
}

/// Inclusive hit-count ranges for combos.
///
/// A combo picked by the weighted roll and a combo forced by a skill use
/// different ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ComboRanges {
    pub rolled_min: u32,
    pub rolled_max: u32,
    pub forced_min: u32,
    pub forced_max: u32,
}

impl Default for ComboRanges {
    fn default() -> Self {
        Self {
            rolled_min: 2,
            rolled_max: 5,
            forced_min: 3,
            forced_max: 6,
        }
    }
}

/// Balance parameters of the damage/defense resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatRules {
    /// `chance = stat / (stat + defense_softcap)` for dodge and block.
    pub defense_softcap: f64,
    pub str_weight: f64,
    pub agi_weight: f64,
    pub tec_weight: f64,
    /// Share of the agility gained from a boost that turns into bonus damage.
    pub agi_bonus_ratio: f64,
    /// Width of the uniform damage roll added to the base.
    pub damage_spread: f64,
    pub crit_chance_per_agi: f64,
    pub crit_multiplier: f64,
    pub combo_multiplier: f64,
    pub block_divisor: u32,
    /// Share of technique added by a fireball.
    pub fireball_tec_ratio: f64,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            defense_softcap: 200.0,
            str_weight: 0.5,
            agi_weight: 0.25,
            tec_weight: 0.25,
            agi_bonus_ratio: 0.25,
            damage_spread: 4.0,
            crit_chance_per_agi: 0.01,
            crit_multiplier: 2.0,
            combo_multiplier: 0.8,
            block_divisor: 3,
            fireball_tec_ratio: 0.8,
        }
    }
}
