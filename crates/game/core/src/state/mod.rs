//! Authoritative game state representation.
//!
//! [`GameState`] is the aggregate root: it owns the player, the current enemy,
//! the battle log, and the floor/turn bookkeeping. Presentation layers read it
//! directly but mutate it exclusively through [`crate::engine::GameEngine`].
mod enemy;
mod log;
mod player;

pub use enemy::{Enemy, EnemyId};
pub use log::{BattleLog, LogEntry, LogKind};
pub use player::Player;

use crate::config::GameConfig;
use crate::skill::Skill;

/// Which side acts next.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Turn {
    #[default]
    Player,
    Enemy,
}

/// Where the battle state machine currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BattlePhase {
    /// No battle: before the first floor, or after a reward was claimed.
    Idle,
    PlayerTurn,
    EnemyTurn,
    /// Victory; the player must pick one of the offered skills.
    AwaitingReward,
    /// Reported by the action that killed the player. The stored state has
    /// already been reset, so [`GameState::phase`] never returns this.
    Defeated,
}

/// Counters for inconsistencies the engine skipped over instead of failing.
///
/// These survive [`reset_game`](crate::engine::GameEngine::reset_game) so a
/// diagnostic layer can inspect them for a whole session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Damage effects applied while no enemy was present.
    pub missing_targets: u32,
    /// Effects of a kind the rules do not implement.
    pub unknown_effects: u32,
    /// Actions rejected because the engine was in the wrong phase.
    pub rejected_actions: u32,
}

/// Canonical snapshot of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at construction. Combined with `nonce` to derive every roll.
    pub game_seed: u64,

    /// Engine operation counter, bumped after each successful action.
    pub nonce: u64,

    /// Sequential id allocator (monotonically increasing, never reset).
    next_id: u64,

    pub player: Player,
    pub current_enemy: Option<Enemy>,
    pub battle_log: BattleLog,
    /// Zero before the first floor; incremented as each encounter begins.
    pub floor: u32,
    pub in_battle: bool,
    pub current_turn: Turn,
    /// Player turns elapsed on the current floor.
    pub turn_count: u32,
    /// Rewards offered after a victory, waiting for the player's pick.
    pub available_skill_rewards: Vec<Skill>,
    pub diagnostics: Diagnostics,
}

impl GameState {
    /// Creates a fresh state on floor 0 with no battle in progress.
    pub fn new(config: &GameConfig, game_seed: u64) -> Self {
        Self {
            game_seed,
            nonce: 0,
            next_id: 1,
            player: Player::new(config.player_max_hp),
            current_enemy: None,
            battle_log: BattleLog::with_capacity(GameConfig::LOG_CAPACITY),
            floor: 0,
            in_battle: false,
            current_turn: Turn::Player,
            turn_count: 0,
            available_skill_rewards: Vec::new(),
            diagnostics: Diagnostics::default(),
        }
    }

    /// Allocates an id that has never been handed out in this session.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Derives the state-machine phase from the stored fields.
    pub fn phase(&self) -> BattlePhase {
        if self.in_battle {
            match self.current_turn {
                Turn::Player => BattlePhase::PlayerTurn,
                Turn::Enemy => BattlePhase::EnemyTurn,
            }
        } else if !self.available_skill_rewards.is_empty() {
            BattlePhase::AwaitingReward
        } else {
            BattlePhase::Idle
        }
    }

    pub fn enemy_name(&self) -> Option<&str> {
        self.current_enemy.as_ref().map(|enemy| enemy.name.as_str())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut state = GameState::default();
        let first = state.allocate_id();
        let second = state.allocate_id();
        assert!(second > first);
    }

    #[test]
    fn new_state_is_idle_on_floor_zero() {
        let state = GameState::new(&GameConfig::default().with_player_max_hp(80), 9);
        assert_eq!(state.floor, 0);
        assert!(!state.in_battle);
        assert!(state.current_enemy.is_none());
        assert_eq!(state.player.hp, 80);
        assert_eq!(state.player.max_hp, 80);
        assert_eq!(state.player.skills.len(), 2);
        assert!(state.battle_log.is_empty());
        assert_eq!(state.phase(), BattlePhase::Idle);
    }
}
