//! Fighter and profile state.
//!
//! A [`Fighter`] is the per-match mutable state of one combatant; profiles
//! are the persistent snapshots fighters are built from. During a match all
//! fighter mutation goes through the engine.
mod archetype;
mod buffs;
mod error;
mod fighter;
mod profile;
mod stats;

pub use archetype::{Archetype, Side};
pub use buffs::Buffs;
pub use error::ProfileError;
pub use fighter::{Fighter, Pose};
pub use profile::{EnemyProfile, EquippedSlot, HeroProfile, InstanceId, ItemInstance};
pub use stats::{Stat, Stats};
