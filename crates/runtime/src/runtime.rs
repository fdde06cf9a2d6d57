//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the battle.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::info;

use game_core::{ClockOracle, GameConfig, GameState, PcgRng, RngOracle, SystemClock};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Seed for every roll in the session. `None` picks one at random.
    pub seed: Option<u64>,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            seed: None,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that orchestrates the battle simulation
///
/// Runtime owns the worker task; [`RuntimeHandle`] provides a cloneable
/// façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    game_seed: u64,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Seed the session's rolls derive from.
    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Shutdown the runtime gracefully
    ///
    /// Waits for the worker, which exits once every outstanding
    /// [`RuntimeHandle`] clone has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    rng: Option<Box<dyn RngOracle>>,
    clock: Option<Box<dyn ClockOracle>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            rng: None,
            clock: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the session seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Replace the default [`PcgRng`] oracle
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Replace the default [`SystemClock`]
    pub fn clock(mut self, clock: impl ClockOracle + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Build the runtime and spawn its worker
    pub async fn build(self) -> Result<Runtime> {
        let game_config = self.config.game_config;
        let game_seed = self.config.seed.unwrap_or_else(rand::random::<u64>);
        let state = GameState::new(&game_config, game_seed);

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let sim_worker = SimulationWorker::new(
            state,
            game_config,
            self.rng.unwrap_or_else(|| Box::new(PcgRng)),
            self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            command_rx,
            event_bus,
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        info!(target: "runtime", game_seed, "runtime started");

        Ok(Runtime {
            handle,
            game_seed,
            sim_worker_handle,
        })
    }
}
