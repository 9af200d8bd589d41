//! Data-driven content definitions and loaders.
//!
//! This crate houses the static battle content and provides loaders for
//! RON/TOML data files:
//! - Built-in skill and item catalog
//! - Starting hero presets
//! - Asset catalogs and hero presets (data-driven via RON)
//! - Match configuration and progression rules (data-driven via TOML)
//!
//! Content is consumed through `fighter-core` oracles and never appears in
//! match state.

pub mod builtin;
pub mod presets;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::{builtin_catalog, builtin_definitions};
pub use presets::{HeroPreset, default_presets};

#[cfg(feature = "loaders")]
pub use loaders::{AssetLoader, ConfigLoader, ContentFactory, HeroLoader, ProgressionLoader};
