//! Injected capabilities the battle rules read but never own.
//!
//! Oracles supply randomness and wall-clock time. The [`GameEnv`] aggregate
//! bundles them with the [`GameConfig`] so the engine can reach everything it
//! needs without hard coupling to concrete implementations. Tests swap in
//! scripted oracles to make every roll and timestamp predictable.
mod clock;
mod rng;

pub use clock::{ClockOracle, FixedClock};
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use rng::{PcgRng, RngOracle, Rolls, RollStream, compute_seed};

use crate::config::GameConfig;

/// Aggregates the read-only collaborators required by the engine.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    config: &'a GameConfig,
    rng: &'a dyn RngOracle,
    clock: &'a dyn ClockOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        config: &'a GameConfig,
        rng: &'a dyn RngOracle,
        clock: &'a dyn ClockOracle,
    ) -> Self {
        Self { config, rng, clock }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn clock(&self) -> &'a dyn ClockOracle {
        self.clock
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
