//! Event payloads published by the simulation worker.

use serde::{Deserialize, Serialize};

use game_core::{ActionError, ErrorContext, ErrorSeverity, LogEntry, Step};

/// Which engine action produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    StartGame,
    StartNewFloor,
    PlayerAction,
    EnemyAction,
    Tick,
    SelectSkillReward,
    ResetGame,
}

impl CommandKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CommandKind::StartGame => "start_game",
            CommandKind::StartNewFloor => "start_new_floor",
            CommandKind::PlayerAction => "player_action",
            CommandKind::EnemyAction => "enemy_action",
            CommandKind::Tick => "tick",
            CommandKind::SelectSkillReward => "select_skill_reward",
            CommandKind::ResetGame => "reset_game",
        }
    }
}

/// A successful engine action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEvent {
    pub command: CommandKind,
    /// Floor after the action (0 after a reset).
    pub floor: u32,
    pub player_hp: i32,
    pub step: Step,
}

/// Battle log lines appended by one action, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub entries: Vec<LogEntry>,
}

/// An action the engine refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionEvent {
    pub command: CommandKind,
    pub error: ActionError,
    pub severity: ErrorSeverity,
    pub context: ErrorContext,
}
