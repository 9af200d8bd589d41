//! Numbers shown on the character sheet.

use crate::config::{ActionWeights, CombatRules};
use crate::state::Stats;

use super::damage::{base_damage, floor_u32};
use super::defense::soft_capped;

/// What a set of stats means in battle, before any buff.
///
/// Rates are fractions in `[0, 1]`. `crit_rate` and `combo_rate` are the
/// shares of the action weights, not the per-impact crit roll.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    /// Floored base damage.
    pub attack: u32,
    pub crit_rate: f64,
    pub combo_rate: f64,
    pub dodge_chance: f64,
    pub block_chance: f64,
}

impl DerivedStats {
    pub fn compute(stats: &Stats, weights: &ActionWeights, rules: &CombatRules) -> Self {
        let (attack, combo, crit) = weights.for_stats(stats);
        let total = attack + combo + crit;
        let share = |weight: f64| if total > 0.0 { weight / total } else { 0.0 };

        Self {
            attack: floor_u32(base_damage(stats, rules)),
            crit_rate: share(crit),
            combo_rate: share(combo),
            dodge_chance: soft_capped(stats.agi, rules.defense_softcap),
            block_chance: soft_capped(stats.tec, rules.defense_softcap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{block_chance, dodge_chance};
    use crate::state::{Archetype, Fighter, Side};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn wolf_boy_sheet() {
        let stats = Stats::new(10, 25, 15);
        let sheet = DerivedStats::compute(&stats, &ActionWeights::default(), &CombatRules::default());

        // 5 + 6.25 + 3.75; weights 100 / 30 / 50
        assert_eq!(sheet.attack, 15);
        assert!(close(sheet.crit_rate, 50.0 / 180.0));
        assert!(close(sheet.combo_rate, 30.0 / 180.0));
        assert!(close(sheet.dodge_chance, 25.0 / 225.0));
        assert!(close(sheet.block_chance, 15.0 / 215.0));
    }

    #[test]
    fn defense_matches_the_battle_roll() {
        let rules = CombatRules::default();
        let stats = Stats::new(30, 40, 60);
        let fighter = Fighter::new("Sheet", Archetype::Girl, Side::Player, 3, stats);
        let sheet = DerivedStats::compute(&stats, &ActionWeights::default(), &rules);

        assert_eq!(sheet.dodge_chance, dodge_chance(&fighter, &rules));
        assert_eq!(sheet.block_chance, block_chance(&fighter, &rules));
    }

    #[test]
    fn zero_weights_give_zero_rates() {
        let weights = ActionWeights {
            attack: 0.0,
            combo_per_tec: 0.0,
            crit_per_agi: 0.0,
        };
        let sheet = DerivedStats::compute(&Stats::new(1, 1, 1), &weights, &CombatRules::default());
        assert_eq!(sheet.crit_rate, 0.0);
        assert_eq!(sheet.combo_rate, 0.0);
    }
}
