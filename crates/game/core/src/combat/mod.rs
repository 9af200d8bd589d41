//! Damage/defense resolution.
//!
//! [`resolve_impact`] is a pure function of both fighters, the action and the
//! rolls it draws; it reports which buffs it used up instead of clearing them.
//! [`apply_impact`] is the only place an impact mutates hp, poses and buffs.
//!
//! # Core Functions
//!
//! - `roll_defense`: forced dodge, forced block, then one dodge/block roll
//! - `damage_breakdown` / `roll_damage`: stat base, buff bonuses, spread
//! - `resolve_impact`: full resolution including crit/combo modifiers
//! - `apply_impact`: hp reduction (clamped to 0) and buff consumption
//! - `DerivedStats`: unbuffed numbers for a character sheet

pub mod damage;
pub mod defense;
pub mod derived;
pub mod result;

pub use damage::{DamageBreakdown, base_damage, blocked_damage, damage_breakdown, roll_damage};
pub use defense::{Defense, block_chance, dodge_chance, roll_defense};
pub use derived::DerivedStats;
pub use result::{ImpactResult, Outcome, Strike, apply_impact, resolve_impact};
