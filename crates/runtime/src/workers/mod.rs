//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker is the single writer of game state; every client
//! command funnels through its channel.

mod simulation;

pub use simulation::{Command, Request, SimulationWorker};
