use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use game_core::{
    ActionError, BattlePhase, FixedClock, GameConfig, GameState, RngOracle, Skill, SkillId,
};
use runtime::{
    AutoPlay, AutoPlayConfig, CommandKind, Event, FirstOffer, RewardPolicy, Runtime,
    RuntimeConfig, RuntimeError, StopReason, Topic,
};

/// Every roll lands mid-range: floor 1 is a 60 hp Small Slime hitting for 6.
struct Midpoint;

impl RngOracle for Midpoint {
    fn next_u32(&self, _seed: u64) -> u32 {
        1 << 31
    }
}

struct Decline;

#[async_trait]
impl RewardPolicy for Decline {
    async fn choose(
        &self,
        _offers: &[Skill],
        _state: &GameState,
    ) -> runtime::Result<Option<SkillId>> {
        Ok(None)
    }
}

async fn runtime_with(game_config: GameConfig) -> Runtime {
    let config = RuntimeConfig {
        game_config: game_config.with_turn_delay(Duration::ZERO),
        ..RuntimeConfig::default()
    };
    Runtime::builder()
        .config(config)
        .seed(7)
        .rng(Midpoint)
        .clock(FixedClock(1_000))
        .build()
        .await
        .expect("runtime should start")
}

fn fast() -> AutoPlayConfig {
    AutoPlayConfig::default().with_cadence(Duration::from_millis(1))
}

// ============================================================================
// Handle
// ============================================================================

#[tokio::test]
async fn handle_mirrors_engine_actions_and_streams_log_lines() {
    let runtime = runtime_with(GameConfig::default()).await;
    let handle = runtime.handle();
    let mut log_rx = handle.subscribe(Topic::Log);
    let mut battle_rx = handle.subscribe(Topic::Battle);

    let step = handle.start_game().await.expect("start game");
    assert_eq!(step.phase, BattlePhase::PlayerTurn);

    match log_rx.recv().await.expect("log event") {
        Event::Log(event) => {
            let lines: Vec<_> = event.entries.iter().map(|e| e.message.as_str()).collect();
            assert_eq!(
                lines,
                [
                    "A new adventure begins!",
                    "Entering floor 1: a Small Slime appears!",
                    "Your turn begins!",
                ]
            );
        }
        other => panic!("unexpected event {other:?}"),
    }
    match battle_rx.recv().await.expect("step event") {
        Event::Step(event) => {
            assert_eq!(event.command, CommandKind::StartGame);
            assert_eq!(event.floor, 1);
            assert_eq!(event.player_hp, 100);
        }
        other => panic!("unexpected event {other:?}"),
    }

    handle.player_action().await.expect("player acts");
    handle.enemy_action().await.expect("enemy acts");

    let state = handle.query_state().await.expect("query state");
    assert_eq!(state.game_seed, 7);
    assert_eq!(state.player.hp, 94);
    assert_eq!(state.turn_count, 1);
    assert_eq!(state.current_enemy.map(|e| e.hp), Some(50));

    let step = handle.reset_game().await.expect("reset");
    assert_eq!(step.phase, BattlePhase::Idle);

    drop(handle);
    runtime.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn defeat_streams_the_lines_written_before_the_reset() {
    let runtime = runtime_with(GameConfig::default().with_player_max_hp(1)).await;
    let handle = runtime.handle();

    handle.start_game().await.expect("start game");
    handle.player_action().await.expect("player acts");

    let mut log_rx = runtime.subscribe(Topic::Log);
    let step = handle.enemy_action().await.expect("enemy acts");
    assert_eq!(step.phase, BattlePhase::Defeated);

    match log_rx.recv().await.expect("log event") {
        Event::Log(event) => {
            let lines: Vec<_> = event.entries.iter().map(|e| e.message.as_str()).collect();
            assert_eq!(
                lines,
                [
                    "Small Slime attacks you for 6 damage!",
                    "You have been defeated! Game over!",
                    "A new adventure begins!",
                ]
            );
        }
        other => panic!("unexpected event {other:?}"),
    }

    let state = handle.query_state().await.expect("query state");
    assert_eq!(state.battle_log.len(), 1);

    drop(handle);
    runtime.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn rejected_actions_surface_as_errors_and_events() {
    let runtime = runtime_with(GameConfig::default()).await;
    let handle = runtime.handle();
    let mut diag_rx = handle.subscribe(Topic::Diagnostics);

    let error = handle.tick().await.expect_err("no battle yet");
    assert_eq!(error.as_action(), Some(&ActionError::NoBattle));

    handle.start_game().await.expect("start game");
    let error = handle.enemy_action().await.expect_err("player's turn");
    assert!(matches!(
        error,
        RuntimeError::Action(ActionError::NotEnemyTurn)
    ));

    let missing = SkillId::from("nope");
    let error = handle
        .select_skill_reward(missing)
        .await
        .expect_err("nothing offered");
    assert_eq!(error.as_action(), Some(&ActionError::NoPendingRewards));

    let commands: Vec<_> = (0..3)
        .map(|_| match diag_rx.try_recv() {
            Ok(Event::Rejected(event)) => event.command,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(
        commands,
        [
            CommandKind::Tick,
            CommandKind::EnemyAction,
            CommandKind::SelectSkillReward
        ]
    );

    let state = handle.query_state().await.expect("query state");
    assert_eq!(state.diagnostics.rejected_actions, 3);
}

// ============================================================================
// Auto-play
// ============================================================================

#[tokio::test]
async fn autoplay_claims_reward_and_stops_at_floor_limit() {
    let runtime = runtime_with(GameConfig::default()).await;
    let handle = runtime.handle();

    let report = AutoPlay::spawn(handle.clone(), fast().with_max_floors(1), Arc::new(FirstOffer))
        .join()
        .await
        .expect("auto-play finishes");

    assert_eq!(report.reason, StopReason::MaxFloors);
    assert_eq!(report.floors_cleared, 1);
    assert_eq!(report.highest_floor, 1);
    assert!(report.ticks > 0);

    let state = handle.query_state().await.expect("query state");
    assert_eq!(state.phase(), BattlePhase::Idle);
    assert_eq!(state.player.skills.len(), 3);
    assert_eq!(state.player.skills[2].name, "Quick Stab");
    assert!(state.battle_log.contains("You learned a new skill: Quick Stab!"));
}

#[tokio::test]
async fn autoplay_without_advance_leaves_rewards_pending() {
    let runtime = runtime_with(GameConfig::default()).await;
    let handle = runtime.handle();

    let report = AutoPlay::spawn(
        handle.clone(),
        fast().with_auto_advance(false),
        Arc::new(FirstOffer),
    )
    .join()
    .await
    .expect("auto-play finishes");

    assert_eq!(report.reason, StopReason::AwaitingReward);
    let state = handle.query_state().await.expect("query state");
    assert_eq!(state.phase(), BattlePhase::AwaitingReward);
    assert_eq!(state.available_skill_rewards.len(), 1);
}

#[tokio::test]
async fn declined_rewards_are_forfeited() {
    let runtime = runtime_with(GameConfig::default()).await;
    let handle = runtime.handle();

    let report = AutoPlay::spawn(handle.clone(), fast().with_max_floors(1), Arc::new(Decline))
        .join()
        .await
        .expect("auto-play finishes");

    assert_eq!(report.reason, StopReason::MaxFloors);
    let state = handle.query_state().await.expect("query state");
    assert_eq!(state.player.skills.len(), 2);

    handle.start_new_floor().await.expect("advance");
    let state = handle.query_state().await.expect("query state");
    assert!(state.available_skill_rewards.is_empty());
    assert_eq!(state.floor, 2);
}

#[tokio::test]
async fn autoplay_reports_defeat_after_reset() {
    let runtime = runtime_with(GameConfig::default().with_player_max_hp(1)).await;
    let handle = runtime.handle();

    let report = AutoPlay::spawn(handle.clone(), fast(), Arc::new(FirstOffer))
        .join()
        .await
        .expect("auto-play finishes");

    assert_eq!(report.reason, StopReason::Defeated);
    assert_eq!(report.floors_cleared, 0);
    assert_eq!(report.ticks, 2);

    let state = handle.query_state().await.expect("query state");
    assert_eq!(state.floor, 0);
    assert_eq!(state.phase(), BattlePhase::Idle);
    assert_eq!(state.player.hp, 1);
}

#[tokio::test]
async fn stop_prevents_further_ticks() {
    let runtime = runtime_with(GameConfig::default()).await;
    let handle = runtime.handle();

    let autoplay = AutoPlay::spawn(
        handle.clone(),
        AutoPlayConfig::default().with_cadence(Duration::from_secs(3600)),
        Arc::new(FirstOffer),
    );
    let report = autoplay.stop_and_join().await.expect("auto-play stops");

    assert_eq!(report.reason, StopReason::Stopped);
    assert_eq!(report.ticks, 0);

    let state = handle.query_state().await.expect("query state");
    assert_eq!(state.floor, 1);
    assert!(state.in_battle);
    assert_eq!(state.turn_count, 0);
}
