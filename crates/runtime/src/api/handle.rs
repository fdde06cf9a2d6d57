//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async mirrors of every
//! engine action plus helpers for streaming events from specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{GameState, SkillId, Step};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::{Command, Request};

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn execute(&self, request: Request) -> Result<Step> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Execute {
                request,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Reset and enter floor 1.
    pub async fn start_game(&self) -> Result<Step> {
        self.execute(Request::StartGame).await
    }

    pub async fn start_new_floor(&self) -> Result<Step> {
        self.execute(Request::StartNewFloor).await
    }

    pub async fn player_action(&self) -> Result<Step> {
        self.execute(Request::PlayerAction).await
    }

    pub async fn enemy_action(&self) -> Result<Step> {
        self.execute(Request::EnemyAction).await
    }

    /// Run whichever side's action is due.
    pub async fn tick(&self) -> Result<Step> {
        self.execute(Request::Tick).await
    }

    pub async fn select_skill_reward(&self, id: SkillId) -> Result<Step> {
        self.execute(Request::SelectSkillReward(id)).await
    }

    pub async fn reset_game(&self) -> Result<Step> {
        self.execute(Request::ResetGame).await
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Battle` - Completed steps
    /// - `Topic::Log` - Battle log lines appended by each step
    /// - `Topic::Diagnostics` - Rejected actions
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }
}
