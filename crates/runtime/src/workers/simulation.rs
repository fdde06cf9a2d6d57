//! Simulation worker that owns the authoritative [`game_core::GameState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), executes
//! them through [`game_core::GameEngine`] one at a time, and publishes
//! [`Event`] notifications.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use game_core::{
    ActionError, ClockOracle, GameConfig, GameEngine, GameEnv, GameError, GameState, RngOracle,
    SkillId, Step,
};

use crate::api::Result;
use crate::events::{CommandKind, Event, EventBus, LogEvent, RejectionEvent, StepEvent};

/// Engine action requested by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    StartGame,
    StartNewFloor,
    PlayerAction,
    EnemyAction,
    Tick,
    SelectSkillReward(SkillId),
    ResetGame,
}

impl Request {
    pub fn kind(&self) -> CommandKind {
        match self {
            Request::StartGame => CommandKind::StartGame,
            Request::StartNewFloor => CommandKind::StartNewFloor,
            Request::PlayerAction => CommandKind::PlayerAction,
            Request::EnemyAction => CommandKind::EnemyAction,
            Request::Tick => CommandKind::Tick,
            Request::SelectSkillReward(_) => CommandKind::SelectSkillReward,
            Request::ResetGame => CommandKind::ResetGame,
        }
    }
}

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Run one engine action.
    Execute {
        request: Request,
        reply: oneshot::Sender<Result<Step>>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
}

/// Background task that processes gameplay commands.
pub struct SimulationWorker {
    state: GameState,
    config: GameConfig,
    rng: Box<dyn RngOracle>,
    clock: Box<dyn ClockOracle>,
    command_rx: mpsc::Receiver<Command>,
    events: EventBus,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        state: GameState,
        config: GameConfig,
        rng: Box<dyn RngOracle>,
        clock: Box<dyn ClockOracle>,
        command_rx: mpsc::Receiver<Command>,
        events: EventBus,
    ) -> Self {
        Self {
            state,
            config,
            rng,
            clock,
            command_rx,
            events,
        }
    }

    /// Main worker loop. Ends once every handle has been dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                else => break,
            }
        }
        debug!(target: "runtime::worker", "simulation worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Execute { request, reply } => {
                let result = self.execute(request);
                let _ = reply.send(result);
            }
            Command::QueryState { reply } => {
                let _ = reply.send(self.state.clone());
            }
        }
    }

    fn execute(&mut self, request: Request) -> Result<Step> {
        let command = request.kind();

        let env = GameEnv::new(&self.config, self.rng.as_ref(), self.clock.as_ref());
        let mut engine = GameEngine::new(&mut self.state, env);
        let result = match request {
            Request::StartGame => Ok(engine.start_game()),
            Request::StartNewFloor => engine.start_new_floor(),
            Request::PlayerAction => engine.player_action(),
            Request::EnemyAction => engine.enemy_action(),
            Request::Tick => engine.tick(),
            Request::SelectSkillReward(id) => engine.select_skill_reward(&id),
            Request::ResetGame => Ok(engine.reset_game()),
        };
        let context = engine.error_context();

        match result {
            Ok(step) => {
                if !step.log.is_empty() {
                    self.events.publish(Event::Log(LogEvent {
                        entries: step.log.clone(),
                    }));
                }

                debug!(
                    target: "runtime::worker",
                    command = command.as_str(),
                    phase = %step.phase,
                    floor = self.state.floor,
                    "step completed"
                );
                self.events.publish(Event::Step(StepEvent {
                    command,
                    floor: self.state.floor,
                    player_hp: self.state.player.hp,
                    step: step.clone(),
                }));
                Ok(step)
            }
            Err(error) => {
                self.handle_rejection(command, &error, context);
                Err(error.into())
            }
        }
    }

    fn handle_rejection(
        &self,
        command: CommandKind,
        error: &ActionError,
        context: game_core::ErrorContext,
    ) {
        let severity = error.severity();
        if severity.is_internal() {
            warn!(
                target: "runtime::worker",
                command = command.as_str(),
                code = error.error_code(),
                floor = context.floor,
                "engine state inconsistent: {error}"
            );
        } else {
            debug!(
                target: "runtime::worker",
                command = command.as_str(),
                code = error.error_code(),
                "action rejected: {error}"
            );
        }

        self.events.publish(Event::Rejected(RejectionEvent {
            command,
            error: error.clone(),
            severity,
            context,
        }));
    }
}
