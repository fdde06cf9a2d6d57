//! Timer-driven auto-play.
//!
//! [`AutoPlay`] runs a background task that ticks the battle on a cadence,
//! claims rewards through a [`RewardPolicy`] and climbs floor after floor
//! until it is stopped, the player falls, or a floor limit is reached.
//!
//! The engine decides pacing through [`Schedule`]; the driver only honours it
//! and never issues two commands at once.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use game_core::{BattlePhase, Schedule, Step, TurnOutcome};

use crate::api::{Result, RewardPolicy, RuntimeError, RuntimeHandle};

/// Default delay between two battle ticks.
pub const DEFAULT_CADENCE: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct AutoPlayConfig {
    /// Minimum delay between two ticks. The engine's own turn delay wins
    /// when it is longer.
    pub cadence: Duration,
    /// Claim a reward and enter the next floor after each victory.
    pub auto_advance: bool,
    /// Stop after clearing this many floors.
    pub max_floors: Option<u32>,
    /// Begin with [`RuntimeHandle::start_game`] instead of resuming.
    pub start_fresh: bool,
}

impl Default for AutoPlayConfig {
    fn default() -> Self {
        Self {
            cadence: DEFAULT_CADENCE,
            auto_advance: true,
            max_floors: None,
            start_fresh: true,
        }
    }
}

impl AutoPlayConfig {
    pub fn with_cadence(mut self, cadence: Duration) -> Self {
        self.cadence = cadence;
        self
    }

    pub fn with_max_floors(mut self, max_floors: u32) -> Self {
        self.max_floors = Some(max_floors);
        self
    }

    pub fn with_auto_advance(mut self, auto_advance: bool) -> Self {
        self.auto_advance = auto_advance;
        self
    }
}

/// Why the driver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// [`AutoPlay::stop`] was called or the controller was dropped.
    Stopped,
    /// The player fell; the game has already been reset.
    Defeated,
    /// `max_floors` victories reached.
    MaxFloors,
    /// Victory with `auto_advance` off; rewards are left pending.
    AwaitingReward,
    /// Nothing to tick when the driver started.
    Idle,
}

/// Summary of one auto-play run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoPlayReport {
    pub reason: StopReason,
    pub floors_cleared: u32,
    /// Deepest floor entered during the run.
    pub highest_floor: u32,
    pub ticks: u64,
}

/// Controller for a running auto-play task.
///
/// Dropping the controller and every [`Stopper`] stops the task as well.
pub struct AutoPlay {
    stop_tx: Arc<watch::Sender<bool>>,
    task: JoinHandle<Result<AutoPlayReport>>,
}

/// Cloneable stop signal detached from the controller.
#[derive(Clone)]
pub struct Stopper(Arc<watch::Sender<bool>>);

impl Stopper {
    pub fn stop(&self) {
        let _ = self.0.send(true);
    }
}

impl AutoPlay {
    /// Spawns the driver on the current tokio runtime.
    pub fn spawn(
        handle: RuntimeHandle,
        config: AutoPlayConfig,
        policy: Arc<dyn RewardPolicy>,
    ) -> Self {
        let (stop_tx, stop_rx) = watch::channel(false);
        let driver = Driver {
            handle,
            config,
            policy,
            stop_rx,
            report: AutoPlayReport {
                reason: StopReason::Stopped,
                floors_cleared: 0,
                highest_floor: 0,
                ticks: 0,
            },
        };
        let task = tokio::spawn(driver.run());
        Self {
            stop_tx: Arc::new(stop_tx),
            task,
        }
    }

    /// Requests a stop. The tick in flight, if any, still completes.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    pub fn stopper(&self) -> Stopper {
        Stopper(Arc::clone(&self.stop_tx))
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the driver to finish on its own.
    pub async fn join(self) -> Result<AutoPlayReport> {
        let Self { stop_tx, task } = self;
        let report = task.await.map_err(RuntimeError::WorkerJoin)?;
        drop(stop_tx);
        report
    }

    pub async fn stop_and_join(self) -> Result<AutoPlayReport> {
        self.stop();
        self.join().await
    }
}

struct Driver {
    handle: RuntimeHandle,
    config: AutoPlayConfig,
    policy: Arc<dyn RewardPolicy>,
    stop_rx: watch::Receiver<bool>,
    report: AutoPlayReport,
}

impl Driver {
    async fn run(mut self) -> Result<AutoPlayReport> {
        let mut step = self.first_step().await?;

        let reason = loop {
            self.record(&step);

            match step.schedule {
                Schedule::After(delay) => {
                    if self.pause(delay.max(self.config.cadence)).await {
                        break StopReason::Stopped;
                    }
                    step = self.handle.tick().await?;
                    self.report.ticks += 1;
                }
                Schedule::AwaitReward => {
                    if !self.config.auto_advance {
                        break StopReason::AwaitingReward;
                    }
                    self.claim_reward().await?;
                    if self
                        .config
                        .max_floors
                        .is_some_and(|max| self.report.floors_cleared >= max)
                    {
                        break StopReason::MaxFloors;
                    }
                    if *self.stop_rx.borrow() {
                        break StopReason::Stopped;
                    }
                    step = self.handle.start_new_floor().await?;
                }
                Schedule::AwaitFloor if step.is_defeat() => break StopReason::Defeated,
                Schedule::AwaitFloor => break StopReason::Idle,
            }
        };

        self.report.reason = reason;
        info!(
            target: "runtime::autoplay",
            reason = ?reason,
            floors_cleared = self.report.floors_cleared,
            highest_floor = self.report.highest_floor,
            ticks = self.report.ticks,
            "auto-play finished"
        );
        Ok(self.report)
    }

    /// Starts a game, or derives the pending schedule from the current state.
    async fn first_step(&self) -> Result<Step> {
        if self.config.start_fresh {
            return self.handle.start_game().await;
        }

        let state = self.handle.query_state().await?;
        let phase = state.phase();
        let schedule = match phase {
            BattlePhase::PlayerTurn | BattlePhase::EnemyTurn => {
                Schedule::After(self.config.cadence)
            }
            BattlePhase::AwaitingReward => Schedule::AwaitReward,
            BattlePhase::Idle | BattlePhase::Defeated => {
                Schedule::AwaitFloor
            }
        };
        Ok(Step {
            phase,
            outcomes: Vec::new(),
            schedule,
            log: Vec::new(),
        })
    }

    fn record(&mut self, step: &Step) {
        for outcome in &step.outcomes {
            match outcome {
                TurnOutcome::FloorStarted { floor, .. } => {
                    self.report.highest_floor = self.report.highest_floor.max(*floor);
                }
                TurnOutcome::Victory { .. } => self.report.floors_cleared += 1,
                _ => {}
            }
        }
    }

    async fn claim_reward(&self) -> Result<()> {
        let state = self.handle.query_state().await?;
        let choice = self
            .policy
            .choose(&state.available_skill_rewards, &state)
            .await?;

        match choice {
            Some(id) => {
                debug!(target: "runtime::autoplay", skill = %id, "claiming reward");
                self.handle.select_skill_reward(id).await?;
            }
            None => debug!(target: "runtime::autoplay", "reward declined"),
        }
        Ok(())
    }

    /// Sleeps for `wait`. Returns `true` if a stop was requested meanwhile.
    async fn pause(&mut self, wait: Duration) -> bool {
        if *self.stop_rx.borrow() {
            return true;
        }
        let closed = tokio::select! {
            _ = tokio::time::sleep(wait) => return false,
            changed = self.stop_rx.changed() => changed.is_err(),
        };
        closed || *self.stop_rx.borrow()
    }
}
