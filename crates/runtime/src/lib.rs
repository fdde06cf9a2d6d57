//! Runtime orchestration for the battle simulation.
//!
//! This crate wraps the synchronous `game-core` engine in a single worker
//! task and exposes it through a cloneable async API. Consumers embed
//! [`Runtime`] to drive battles, subscribe to events, and run timed
//! auto-play sessions through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`autoplay`] paces battles on a timer
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod autoplay;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{FirstOffer, RandomOffer, Result, RewardPolicy, RuntimeError, RuntimeHandle};
pub use autoplay::{AutoPlay, AutoPlayConfig, AutoPlayReport, DEFAULT_CADENCE, StopReason, Stopper};
pub use events::{
    CommandKind, Event, EventBus, LogEvent, RejectionEvent, StepEvent, Topic,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
