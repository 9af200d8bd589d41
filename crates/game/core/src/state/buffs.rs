/// Transient modifiers set by asset effects and consumed during an exchange.
///
/// The four `force_*` flags are consumed the moment they decide an outcome.
/// Multipliers and the fireball flag live until the owner's next impact, when
/// [`Buffs::reset_after_impact`] clears them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buffs {
    pub force_combo: bool,
    pub force_crit: bool,
    pub force_block: bool,
    pub force_dodge: bool,
    pub atk_multiplier: f64,
    pub agi_multiplier: f64,
    /// Zero means inactive.
    pub str_bonus_multiplier: f64,
    pub fireball_bonus: bool,
}

impl Default for Buffs {
    fn default() -> Self {
        Self {
            force_combo: false,
            force_crit: false,
            force_block: false,
            force_dodge: false,
            atk_multiplier: 1.0,
            agi_multiplier: 1.0,
            str_bonus_multiplier: 0.0,
            fireball_bonus: false,
        }
    }
}

impl Buffs {
    /// Clears the attacker's per-exchange modifiers after each impact.
    ///
    /// `force_combo` and `force_crit` are left alone: they are consumed when
    /// the action is chosen, never at impact.
    pub fn reset_after_impact(&mut self) {
        self.atk_multiplier = 1.0;
        self.agi_multiplier = 1.0;
        self.str_bonus_multiplier = 0.0;
        self.force_dodge = false;
        self.force_block = false;
        self.fireball_bonus = false;
    }
}
