use crate::combat::{ImpactResult, Outcome};
use crate::env::{AssetId, OracleError};
use crate::progression::ProfileUpdate;
use crate::state::{EquippedSlot, InstanceId, Side};

use super::StrikeAction;

/// Side effect of one tick, for rendering and UI.
///
/// Events are fire-and-forget: nothing in the match waits on a consumer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchEvent {
    TurnStarted {
        side: Side,
    },
    AssetUsed {
        side: Side,
        asset: AssetId,
        display_name: String,
    },
    /// The pending slot could not be resolved; the turn continues without it.
    SelectionVoided {
        slot: EquippedSlot,
        reason: OracleError,
    },
    ItemConsumed {
        item: AssetId,
        instance: InstanceId,
    },
    Healed {
        side: Side,
        amount: u32,
    },
    ActionChosen {
        side: Side,
        action: StrikeAction,
        /// Hits to deliver; 1 unless the action is a combo.
        hits: u32,
    },
    /// Floating combat text anchored at the defender.
    ImpactResolved {
        attacker: Side,
        x: f32,
        y: f32,
        damage: u32,
        text: String,
        outcome: Outcome,
        result: ImpactResult,
    },
    HpChanged {
        side: Side,
        hp: u32,
        max_hp: u32,
    },
    MatchEnded {
        winner: Side,
    },
    RewardComputed {
        update: ProfileUpdate,
    },
}

/// Final result of a match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchOutcome {
    pub winner: Side,
    /// Rewards on a win; on a loss only the consumed items are set.
    pub update: ProfileUpdate,
}

impl MatchOutcome {
    pub fn player_won(&self) -> bool {
        self.winner == Side::Player
    }
}
