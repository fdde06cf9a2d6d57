//! Battle state machine and action pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! action either returns a [`Step`] describing what happened and when the
//! driver should come back, or an [`ActionError`] with the state untouched.
//!
//! The engine is fully synchronous. Pacing between turns is expressed as a
//! [`Schedule`] directive; nothing in here sleeps or spawns.

mod errors;
mod floor;
mod turns;

pub use errors::ActionError;

use core::time::Duration;

use tracing::debug;

use crate::effect::EffectOutcome;
use crate::env::GameEnv;
use crate::error::{ErrorContext, GameError};
use crate::skill::SkillId;
use crate::state::{BattlePhase, EnemyId, GameState, LogEntry, LogKind};

/// When the driver should invoke the engine next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Schedule {
    /// A battle tick is due after this delay.
    After(Duration),
    /// Waiting for [`GameEngine::select_skill_reward`].
    AwaitReward,
    /// Waiting for [`GameEngine::start_new_floor`] or [`GameEngine::start_game`].
    AwaitFloor,
}

/// Individual things that happened during one action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnOutcome {
    Reset,
    FloorStarted {
        floor: u32,
        enemy: EnemyId,
    },
    SkillUsed {
        index: usize,
        skill: SkillId,
        effects: Vec<EffectOutcome>,
    },
    TurnSkipped,
    EnemyAttacked {
        damage: i32,
        player_hp: i32,
    },
    Victory {
        floor: u32,
        rewards: usize,
    },
    Defeat {
        floor: u32,
    },
    RewardClaimed {
        skill: SkillId,
    },
}

/// Result of a successful engine action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Phase after the action.
    pub phase: BattlePhase,
    /// What happened, in order.
    pub outcomes: Vec<TurnOutcome>,
    pub schedule: Schedule,
    /// Log lines this action wrote, oldest first. Kept even when the action
    /// ended in a reset that cleared the battle log.
    pub log: Vec<LogEntry>,
}

impl Step {
    pub fn is_victory(&self) -> bool {
        self.outcomes
            .iter()
            .any(|outcome| matches!(outcome, TurnOutcome::Victory { .. }))
    }

    pub fn is_defeat(&self) -> bool {
        self.phase == BattlePhase::Defeated
    }
}

/// Game engine that owns every mutation of [`GameState`].
///
/// The engine borrows the state for the duration of one or more calls; the
/// caller keeps ownership and reads the state freely between calls.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    env: GameEnv<'a>,
    /// Lines written since the last finished action.
    written: Vec<LogEntry>,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given state.
    pub fn new(state: &'a mut GameState, env: GameEnv<'a>) -> Self {
        Self {
            state,
            env,
            written: Vec::new(),
        }
    }

    /// Read-only view of the state.
    pub fn state(&self) -> &GameState {
        self.state
    }

    pub fn error_context(&self) -> ErrorContext {
        ErrorContext::new(self.state.floor, self.state.turn_count, self.state.nonce)
    }

    fn log(&mut self, kind: LogKind, message: impl Into<String>) {
        let entry = LogEntry {
            message: message.into(),
            kind,
            timestamp: self.env.clock().now_millis(),
        };
        self.written.push(entry.clone());
        self.state.battle_log.push(entry);
    }

    /// Wraps up a successful action: bumps the nonce and derives the schedule.
    fn finish(&mut self, outcomes: Vec<TurnOutcome>) -> Step {
        self.state.nonce += 1;

        let defeated = outcomes
            .iter()
            .any(|outcome| matches!(outcome, TurnOutcome::Defeat { .. }));
        let phase = if defeated {
            BattlePhase::Defeated
        } else {
            self.state.phase()
        };
        let schedule = match phase {
            BattlePhase::PlayerTurn | BattlePhase::EnemyTurn => {
                Schedule::After(self.env.config().turn_delay)
            }
            BattlePhase::AwaitingReward => Schedule::AwaitReward,
            BattlePhase::Idle | BattlePhase::Defeated => Schedule::AwaitFloor,
        };

        Step {
            phase,
            outcomes,
            schedule,
            log: core::mem::take(&mut self.written),
        }
    }

    /// Records a rejected action and hands the error back.
    fn reject(&mut self, error: ActionError) -> ActionError {
        self.state.diagnostics.rejected_actions += 1;
        let ctx = self.error_context();
        debug!(
            target: "game_core::engine",
            code = error.error_code(),
            severity = %error.severity(),
            floor = ctx.floor,
            turn = ctx.turn_count,
            nonce = ctx.nonce,
            "action rejected: {error}"
        );
        error
    }
}
