//! Profile rule errors.
//!
//! Raised by the lobby operations on [`super::HeroProfile`] (stat allocation
//! and equip toggling). The UI shows them to the player; nothing is retried.

use crate::error::{ErrorSeverity, FightError};

use super::Stat;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfileError {
    /// Equipping would exceed the slot limit.
    #[error("inventory full (max {max} equipped slots)")]
    InventoryFull { max: usize },

    #[error("no unspent stat points left")]
    NoPointsLeft,

    /// Refunding would drop the stat below its base value.
    #[error("{stat} is already at its base value")]
    AtBaseStat { stat: Stat },

    /// The slot references a skill or item instance the hero does not own.
    #[error("slot is not owned by the hero")]
    NotOwned,
}

impl FightError for ProfileError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InventoryFull { .. } => "PROFILE_INVENTORY_FULL",
            Self::NoPointsLeft => "PROFILE_NO_POINTS_LEFT",
            Self::AtBaseStat { .. } => "PROFILE_AT_BASE_STAT",
            Self::NotOwned => "PROFILE_NOT_OWNED",
        }
    }
}
