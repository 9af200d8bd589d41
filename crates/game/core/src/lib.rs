//! Deterministic battle rules for the chibi fighter game.
//!
//! `fighter-core` defines the canonical combat rules (fighters, buffs, the
//! damage/defense resolver and the turn state machine) together with the
//! progression rules that turn a finished match into profile changes. It is
//! an in-process library: a UI or headless loop calls [`Match::tick`] once
//! per frame and renders the returned [`MatchEvent`]s.
//!
//! All battle mutation flows through [`Match`], and content crates depend on
//! the types re-exported here.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod progression;
pub mod state;

pub use combat::{
    DamageBreakdown, Defense, DerivedStats, ImpactResult, Outcome, Strike, apply_impact,
    resolve_impact,
};
pub use config::{
    ActionWeights, ArenaLayout, CombatRules, ComboRanges, MatchConfig, Movement, TurnTimings,
};
pub use engine::{Match, MatchError, MatchEvent, MatchOutcome, Phase, StrikeAction};
pub use env::{
    AssetCatalog, AssetDefinition, AssetEffect, AssetId, AssetKind, AssetOracle, BattleEnv,
    Flourish, OracleError, PcgRng, RngOracle, ScriptedRng, compute_seed,
};
pub use error::{ErrorSeverity, FightError};
pub use progression::{
    ProfileUpdate, ProgressionRules, RewardContext, SkillUnlock, compute_exp_gain,
    compute_rewards, generate_roster, max_exp_for_level,
};
pub use state::{
    Archetype, Buffs, EnemyProfile, EquippedSlot, Fighter, HeroProfile, InstanceId, ItemInstance,
    Pose, ProfileError, Side, Stat, Stats,
};
