//! Error types for engine actions.

use crate::error::{ErrorSeverity, GameError};
use crate::skill::SkillId;

/// Reasons an engine action was rejected.
///
/// A rejected action leaves gameplay state untouched; only
/// [`Diagnostics::rejected_actions`](crate::state::Diagnostics) is bumped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("no battle is in progress")]
    NoBattle,

    #[error("it is not the player's turn")]
    NotPlayerTurn,

    #[error("it is not the enemy's turn")]
    NotEnemyTurn,

    #[error("a battle is already in progress")]
    BattleInProgress,

    #[error("battle is marked in progress but no enemy is present")]
    MissingEnemy,

    #[error("no skill rewards are pending")]
    NoPendingRewards,

    #[error("skill reward {id} is not on offer")]
    RewardNotFound { id: SkillId },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoBattle
            | Self::NotPlayerTurn
            | Self::NotEnemyTurn
            | Self::BattleInProgress
            | Self::NoPendingRewards => ErrorSeverity::Recoverable,
            Self::RewardNotFound { .. } => ErrorSeverity::Validation,
            Self::MissingEnemy => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoBattle => "ACTION_NO_BATTLE",
            Self::NotPlayerTurn => "ACTION_NOT_PLAYER_TURN",
            Self::NotEnemyTurn => "ACTION_NOT_ENEMY_TURN",
            Self::BattleInProgress => "ACTION_BATTLE_IN_PROGRESS",
            Self::MissingEnemy => "ACTION_MISSING_ENEMY",
            Self::NoPendingRewards => "ACTION_NO_PENDING_REWARDS",
            Self::RewardNotFound { .. } => "ACTION_REWARD_NOT_FOUND",
        }
    }
}
