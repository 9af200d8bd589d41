//! Defense chances and the dodge/block roll.

use crate::config::CombatRules;
use crate::env::RngOracle;
use crate::state::Fighter;

/// How the defender met one impact. Exactly one per impact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Defense {
    /// No defense: the strike lands in full.
    #[default]
    None,
    Dodge,
    Block,
}

/// `agi / (agi + softcap)` of the defender's current agility.
pub fn dodge_chance(defender: &Fighter, rules: &CombatRules) -> f64 {
    soft_capped(defender.stats.agi, rules.defense_softcap)
}

/// `tec / (tec + softcap)` of the defender's current technique.
pub fn block_chance(defender: &Fighter, rules: &CombatRules) -> f64 {
    soft_capped(defender.stats.tec, rules.defense_softcap)
}

pub(crate) fn soft_capped(stat: u32, softcap: f64) -> f64 {
    let stat = f64::from(stat);
    if stat + softcap <= 0.0 {
        return 0.0;
    }
    stat / (stat + softcap)
}

/// Picks the defense for one impact.
///
/// A forced dodge wins over a forced block; neither draws from the RNG.
/// Otherwise a single draw falls into the dodge band, then the block band.
pub fn roll_defense(
    defender: &Fighter,
    rules: &CombatRules,
    rng: &mut (impl RngOracle + ?Sized),
) -> Defense {
    if defender.buffs.force_dodge {
        return Defense::Dodge;
    }
    if defender.buffs.force_block {
        return Defense::Block;
    }

    let dodge = dodge_chance(defender, rules);
    let block = block_chance(defender, rules);
    let roll = rng.next_unit();
    if roll < dodge {
        Defense::Dodge
    } else if roll < dodge + block {
        Defense::Block
    } else {
        Defense::None
    }
}
