//! Deterministic battle rules and data types shared across clients.
//!
//! `game-core` defines the canonical rules of the floor climb (effects, enemy
//! and reward generation, the battle state machine) and exposes pure APIs
//! that the runtime and tests drive directly. All state mutation flows
//! through [`engine::GameEngine`]; randomness and time come in through the
//! oracles bundled in [`env::GameEnv`].
pub mod config;
pub mod content;
pub mod effect;
pub mod engine;
pub mod env;
pub mod error;
pub mod generator;
pub mod skill;
pub mod state;

pub use config::GameConfig;
pub use effect::{Effect, EffectKind, EffectOutcome, EffectTarget, apply_effect};
pub use engine::{ActionError, GameEngine, Schedule, Step, TurnOutcome};
#[cfg(feature = "std")]
pub use env::SystemClock;
pub use env::{ClockOracle, FixedClock, GameEnv, PcgRng, RngOracle, RollStream, Rolls};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use generator::{generate_enemy, generate_skill_reward};
pub use skill::{Skill, SkillId, starting_skills};
pub use state::{
    BattleLog, BattlePhase, Diagnostics, Enemy, EnemyId, GameState, LogEntry, LogKind, Player,
    Turn,
};
