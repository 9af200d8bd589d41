//! Impact resolution and application.

use crate::config::CombatRules;
use crate::engine::StrikeAction;
use crate::env::RngOracle;
use crate::state::{Fighter, Pose};

use super::damage::{
    DamageBreakdown, blocked_damage, combo_damage, crit_chance, crit_damage, damage_breakdown,
    roll_damage,
};
use super::defense::{Defense, roll_defense};

/// Damage modifier that applied to a strike. Crit and combo are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Strike {
    #[default]
    Normal,
    Crit,
    Combo,
}

/// Classification of one impact, as shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    Hit,
    Dodge,
    Block,
    Crit,
    Combo,
}

/// Everything one impact decided, computed without touching either fighter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpactResult {
    pub defense: Defense,
    pub strike: Strike,
    /// 1-based hit number within the action.
    pub hit_index: u32,
    pub breakdown: DamageBreakdown,
    /// Damage after crit/combo, before the defense.
    pub full_damage: u32,
    /// Damage taken off the defender's hp.
    pub damage: u32,

    // Buffs this impact used up.
    pub consumed_force_dodge: bool,
    pub consumed_force_block: bool,
    pub consumed_fireball: bool,
}

impl ImpactResult {
    pub fn outcome(&self) -> Outcome {
        match (self.defense, self.strike) {
            (Defense::Dodge, _) => Outcome::Dodge,
            (Defense::Block, _) => Outcome::Block,
            (Defense::None, Strike::Crit) => Outcome::Crit,
            (Defense::None, Strike::Combo) => Outcome::Combo,
            (Defense::None, Strike::Normal) => Outcome::Hit,
        }
    }

    /// Floating combat text, e.g. `MISS`, `BLOCK 4`, `CRIT 30`, `2hit 9`,
    /// `12 (+5)`.
    pub fn display_text(&self) -> String {
        match self.defense {
            Defense::Dodge => return "MISS".to_owned(),
            Defense::Block => return format!("BLOCK {}", self.damage),
            Defense::None => {}
        }

        let bonus = self.breakdown.bonus();
        let main = if bonus > 0 && self.strike != Strike::Crit {
            format!("{} (+{})", self.damage.saturating_sub(bonus), bonus)
        } else {
            self.damage.to_string()
        };

        match self.strike {
            Strike::Crit => format!("CRIT {main}"),
            Strike::Combo => format!("{}hit {main}", self.hit_index),
            Strike::Normal => main,
        }
    }
}

/// Resolves one impact of `attacker` on `defender`.
///
/// Draw order: the defense roll (skipped when a forced defense applies), the
/// damage spread, then the crit roll (skipped for a critical action).
pub fn resolve_impact(
    attacker: &Fighter,
    defender: &Fighter,
    action: StrikeAction,
    hit_index: u32,
    rules: &CombatRules,
    rng: &mut (impl RngOracle + ?Sized),
) -> ImpactResult {
    let defense = roll_defense(defender, rules, rng);
    let consumed_force_dodge = defense == Defense::Dodge && defender.buffs.force_dodge;
    let consumed_force_block =
        defense == Defense::Block && !defender.buffs.force_dodge && defender.buffs.force_block;

    let breakdown = damage_breakdown(attacker, rules);
    let rolled = roll_damage(&breakdown, rules, rng);

    let crit = match action {
        StrikeAction::Critical => true,
        _ => rng.chance(crit_chance(attacker, rules)),
    };
    let (strike, full_damage) = if crit {
        (Strike::Crit, crit_damage(rolled, rules))
    } else if action == StrikeAction::Combo {
        (Strike::Combo, combo_damage(rolled, rules))
    } else {
        (Strike::Normal, rolled)
    };

    let damage = match defense {
        Defense::Dodge => 0,
        Defense::Block => blocked_damage(full_damage, rules),
        Defense::None => full_damage,
    };

    ImpactResult {
        defense,
        strike,
        hit_index,
        breakdown,
        full_damage,
        damage,
        consumed_force_dodge,
        consumed_force_block,
        consumed_fireball: attacker.buffs.fireball_bonus,
    }
}

/// Writes a resolved impact into both fighters.
///
/// Consumes the buffs the impact used, takes the damage off the defender and
/// sets its pose. A dodging defender is knocked back by `dodge_bounce`.
/// Returns the hp actually removed.
pub fn apply_impact(
    result: &ImpactResult,
    attacker: &mut Fighter,
    defender: &mut Fighter,
    dodge_bounce: f32,
) -> u32 {
    if result.consumed_force_dodge {
        defender.buffs.force_dodge = false;
    }
    if result.consumed_force_block {
        defender.buffs.force_block = false;
    }
    if result.consumed_fireball {
        attacker.buffs.fireball_bonus = false;
    }

    match result.defense {
        Defense::Dodge => {
            defender.pose = Pose::Dodge;
            defender.x -= dodge_bounce * defender.facing;
            0
        }
        Defense::Block => {
            defender.pose = Pose::Block;
            defender.take_damage(result.damage)
        }
        Defense::None => {
            defender.pose = Pose::Hit;
            defender.take_damage(result.damage)
        }
    }
}
