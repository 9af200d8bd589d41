//! Damage calculation.
//!
//! # Formula
//!
//! ```text
//! base   = str*0.5 + agi*0.25 + tec*0.25
//! bonus  = floor(agi * (agi_mul - 1) * 0.25)   never below 0
//!        + floor(str * str_bonus_mul)      if str_bonus_mul > 0
//!        + floor(tec * 0.8)                if fireball
//! rolled = floor(base * atk_mul + bonus + random()*4)
//!
//! crit:  floor(rolled * 2)
//! combo: floor(rolled * 0.8)
//! block: floor(full / 3)
//! ```
//!
//! Every multiplier and weight comes from [`CombatRules`]. The order above is
//! significant: the attack multiplier scales the base only, and the crit or
//! combo multiplier applies to the bonused total.

use crate::config::CombatRules;
use crate::env::RngOracle;
use crate::state::{Fighter, Stats};

/// Base and bonus parts of one strike, kept apart for display.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageBreakdown {
    /// Stat-weighted base after the attack multiplier.
    pub base: f64,
    pub agi_bonus: u32,
    pub str_bonus: u32,
    pub fireball_bonus: u32,
}

impl DamageBreakdown {
    pub fn bonus(&self) -> u32 {
        self.agi_bonus + self.str_bonus + self.fireball_bonus
    }

    /// Damage before the random spread.
    pub fn total(&self) -> f64 {
        self.base + f64::from(self.bonus())
    }
}

/// Stat-weighted base damage without any buff.
pub fn base_damage(stats: &Stats, rules: &CombatRules) -> f64 {
    f64::from(stats.str) * rules.str_weight
        + f64::from(stats.agi) * rules.agi_weight
        + f64::from(stats.tec) * rules.tec_weight
}

/// Applies the attacker's buffs to the base damage.
pub fn damage_breakdown(attacker: &Fighter, rules: &CombatRules) -> DamageBreakdown {
    let stats = &attacker.stats;
    let buffs = &attacker.buffs;

    // An agility multiplier below 1 grants no bonus rather than a penalty.
    let agi_bonus =
        floor_u32(f64::from(stats.agi) * (buffs.agi_multiplier - 1.0) * rules.agi_bonus_ratio);
    let base = base_damage(stats, rules) * buffs.atk_multiplier;

    let str_bonus = if buffs.str_bonus_multiplier > 0.0 {
        floor_u32(f64::from(stats.str) * buffs.str_bonus_multiplier)
    } else {
        0
    };

    let fireball_bonus = if buffs.fireball_bonus {
        floor_u32(f64::from(stats.tec) * rules.fireball_tec_ratio)
    } else {
        0
    };

    DamageBreakdown {
        base,
        agi_bonus,
        str_bonus,
        fireball_bonus,
    }
}

/// Adds the uniform spread and floors (one draw).
pub fn roll_damage(
    breakdown: &DamageBreakdown,
    rules: &CombatRules,
    rng: &mut (impl RngOracle + ?Sized),
) -> u32 {
    floor_u32(breakdown.total() + rng.next_unit() * rules.damage_spread)
}

/// Chance of a random crit, from agility after the agility multiplier.
pub fn crit_chance(attacker: &Fighter, rules: &CombatRules) -> f64 {
    f64::from(attacker.boosted_agi()) * rules.crit_chance_per_agi
}

pub fn crit_damage(damage: u32, rules: &CombatRules) -> u32 {
    floor_u32(f64::from(damage) * rules.crit_multiplier)
}

pub fn combo_damage(damage: u32, rules: &CombatRules) -> u32 {
    floor_u32(f64::from(damage) * rules.combo_multiplier)
}

/// Damage that gets through a block. Strictly less than `full` when `full > 0`.
pub fn blocked_damage(full: u32, rules: &CombatRules) -> u32 {
    full / rules.block_divisor.max(2)
}

pub(crate) fn floor_u32(value: f64) -> u32 {
    if value <= 0.0 {
        0
    } else {
        value.floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::{Archetype, Side};

    fn attacker(str: u32, agi: u32, tec: u32) -> Fighter {
        Fighter::new("Striker", Archetype::Girl, Side::Player, 1, Stats::new(str, agi, tec))
    }

    #[test]
    fn base_damage_weights_all_stats() {
        let rules = CombatRules::default();
        assert_eq!(base_damage(&Stats::new(20, 10, 10), &rules), 15.0);
    }

    #[test]
    fn attack_multiplier_scales_base_only() {
        let rules = CombatRules::default();
        let mut striker = attacker(20, 10, 10);
        striker.buffs.atk_multiplier = 1.2;
        striker.buffs.str_bonus_multiplier = 0.5;

        let breakdown = damage_breakdown(&striker, &rules);
        assert!((breakdown.base - 18.0).abs() < 1e-9);
        assert_eq!(breakdown.str_bonus, 10);
        assert!((breakdown.total() - 28.0).abs() < 1e-9);
    }

    #[test]
    fn agility_and_fireball_bonuses_are_floored() {
        let rules = CombatRules::default();
        let mut striker = attacker(10, 25, 15);
        striker.buffs.agi_multiplier = 1.5;
        striker.buffs.fireball_bonus = true;

        let breakdown = damage_breakdown(&striker, &rules);
        // 25 * 0.5 * 0.25 = 3.125
        assert_eq!(breakdown.agi_bonus, 3);
        // 15 * 0.8 = 12
        assert_eq!(breakdown.fireball_bonus, 12);
        assert_eq!(breakdown.bonus(), 15);
    }

    #[test]
    fn agility_bonus_has_its_own_ratio() {
        let rules = CombatRules {
            agi_weight: 0.0,
            agi_bonus_ratio: 1.0,
            ..CombatRules::default()
        };
        let mut striker = attacker(10, 20, 10);
        striker.buffs.agi_multiplier = 1.5;

        let breakdown = damage_breakdown(&striker, &rules);
        assert_eq!(breakdown.agi_bonus, 10);
        assert!((breakdown.base - 7.5).abs() < 1e-9);
    }

    #[test]
    fn agility_below_neutral_gives_no_bonus() {
        let rules = CombatRules::default();
        let mut striker = attacker(10, 40, 10);
        striker.buffs.agi_multiplier = 0.5;
        assert_eq!(damage_breakdown(&striker, &rules).agi_bonus, 0);
    }

    #[test]
    fn roll_adds_spread_below_four() {
        let rules = CombatRules::default();
        let breakdown = damage_breakdown(&attacker(20, 10, 10), &rules);
        let mut low = ScriptedRng::constant(0.0);
        let mut high = ScriptedRng::constant(0.999);
        assert_eq!(roll_damage(&breakdown, &rules, &mut low), 15);
        assert_eq!(roll_damage(&breakdown, &rules, &mut high), 18);
    }

    #[test]
    fn modifiers_floor_their_result() {
        let rules = CombatRules::default();
        assert_eq!(crit_damage(17, &rules), 34);
        assert_eq!(combo_damage(17, &rules), 13);
        assert_eq!(blocked_damage(17, &rules), 5);
        assert_eq!(blocked_damage(1, &rules), 0);
    }

    #[test]
    fn crit_chance_uses_boosted_agility() {
        let rules = CombatRules::default();
        let mut striker = attacker(10, 25, 10);
        striker.buffs.agi_multiplier = 1.5;
        assert!((crit_chance(&striker, &rules) - 0.37).abs() < 1e-9);
    }
}
