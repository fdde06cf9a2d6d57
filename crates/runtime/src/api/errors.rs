//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and rejected engine actions so
//! clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::ActionError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("background task join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Action(#[from] ActionError),
}

impl RuntimeError {
    /// The engine rejection behind this error, if any.
    pub fn as_action(&self) -> Option<&ActionError> {
        match self {
            Self::Action(error) => Some(error),
            _ => None,
        }
    }
}
