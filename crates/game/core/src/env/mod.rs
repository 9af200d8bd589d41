//! Traits describing read-only battle data and the random source.
//!
//! Oracles expose the asset registry and randomness. The [`BattleEnv`]
//! aggregate bundles them so the match can reach everything it needs without
//! hard coupling to concrete implementations or module-level globals.
mod assets;
mod error;
mod rng;

pub use assets::{
    AssetCatalog, AssetDefinition, AssetEffect, AssetId, AssetKind, AssetOracle, Flourish,
};
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, ScriptedRng, compute_seed};

/// Aggregates the oracles required by one [`crate::Match::tick`].
///
/// The asset registry is shared and read-only; the RNG is borrowed mutably
/// because every draw advances its sequence.
pub struct BattleEnv<'a> {
    assets: &'a dyn AssetOracle,
    rng: &'a mut dyn RngOracle,
}

impl<'a> BattleEnv<'a> {
    pub fn new(assets: &'a dyn AssetOracle, rng: &'a mut dyn RngOracle) -> Self {
        Self { assets, rng }
    }

    pub fn assets(&self) -> &'a dyn AssetOracle {
        self.assets
    }

    pub fn rng(&mut self) -> &mut dyn RngOracle {
        &mut *self.rng
    }
}

impl core::fmt::Debug for BattleEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BattleEnv").finish_non_exhaustive()
    }
}
