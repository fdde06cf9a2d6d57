//! Floor lifecycle: entering floors, ending battles, rewards and resets.

use tracing::info;

use super::{ActionError, GameEngine, Step, TurnOutcome};
use crate::env::{RollStream, Rolls};
use crate::generator::{generate_enemy, generate_skill_reward};
use crate::skill::SkillId;
use crate::state::{EnemyId, LogKind, Player, Turn};

impl GameEngine<'_> {
    /// Starts a fresh adventure and enters floor 1.
    pub fn start_game(&mut self) -> Step {
        self.reset_state();
        let entered = self.enter_next_floor();
        self.finish(vec![TurnOutcome::Reset, entered])
    }

    /// Advances to the next floor.
    ///
    /// Any unclaimed rewards from the previous victory are forfeited.
    pub fn start_new_floor(&mut self) -> Result<Step, ActionError> {
        if self.state.in_battle {
            return Err(self.reject(ActionError::BattleInProgress));
        }
        let entered = self.enter_next_floor();
        Ok(self.finish(vec![entered]))
    }

    /// Learns the offered skill with the given id and discards the other offers.
    pub fn select_skill_reward(&mut self, id: &SkillId) -> Result<Step, ActionError> {
        if self.state.available_skill_rewards.is_empty() {
            return Err(self.reject(ActionError::NoPendingRewards));
        }
        let Some(position) = self
            .state
            .available_skill_rewards
            .iter()
            .position(|skill| &skill.id == id)
        else {
            return Err(self.reject(ActionError::RewardNotFound { id: id.clone() }));
        };

        let skill = self.state.available_skill_rewards.swap_remove(position);
        self.state.available_skill_rewards.clear();
        self.log(
            LogKind::System,
            format!("You learned a new skill: {}!", skill.name),
        );
        info!(
            target: "game_core::engine",
            skill = %skill.id,
            floor = self.state.floor,
            "skill reward claimed"
        );

        let claimed = skill.id.clone();
        self.state.player.skills.push(skill);
        Ok(self.finish(vec![TurnOutcome::RewardClaimed { skill: claimed }]))
    }

    /// Returns to the initial state on floor 0.
    pub fn reset_game(&mut self) -> Step {
        self.reset_state();
        self.finish(vec![TurnOutcome::Reset])
    }

    fn enter_next_floor(&mut self) -> TurnOutcome {
        self.state.available_skill_rewards.clear();
        self.state.floor += 1;
        let floor = self.state.floor;

        let id = EnemyId(self.state.allocate_id());
        let mut rolls = Rolls::new(
            self.env.rng(),
            self.state.game_seed,
            self.state.nonce,
            RollStream::Enemy,
        );
        let enemy = generate_enemy(floor, id, &mut rolls);

        let player = &mut self.state.player;
        player.reset_cooldowns();
        player.last_used_skill_index = None;
        self.state.turn_count = 0;
        self.state.current_turn = Turn::Player;
        self.state.in_battle = true;

        info!(
            target: "game_core::engine",
            floor,
            enemy = %enemy.name,
            hp = enemy.hp,
            damage = enemy.damage,
            "floor started"
        );
        self.log(
            LogKind::System,
            format!("Entering floor {floor}: a {} appears!", enemy.name),
        );
        self.state.current_enemy = Some(enemy);
        self.log(LogKind::System, "Your turn begins!");

        TurnOutcome::FloorStarted { floor, enemy: id }
    }

    /// Closes the current battle. Defeat resets the whole game.
    pub(super) fn end_battle(&mut self, victory: bool) -> Vec<TurnOutcome> {
        let floor = self.state.floor;
        self.state.in_battle = false;
        self.state.current_enemy = None;

        if victory {
            let salt = self.state.allocate_id();
            let mut rolls = Rolls::new(
                self.env.rng(),
                self.state.game_seed,
                self.state.nonce,
                RollStream::Reward,
            );
            let rewards = generate_skill_reward(floor, salt, &mut rolls);
            let count = rewards.len();
            self.state.available_skill_rewards = rewards;
            self.log(LogKind::System, "You may choose a new skill!");
            info!(target: "game_core::engine", floor, offers = count, "battle won");
            vec![TurnOutcome::Victory {
                floor,
                rewards: count,
            }]
        } else {
            info!(target: "game_core::engine", floor, "battle lost");
            self.reset_state();
            vec![TurnOutcome::Defeat { floor }, TurnOutcome::Reset]
        }
    }

    fn reset_state(&mut self) {
        let state = &mut *self.state;
        state.player = Player::new(self.env.config().player_max_hp);
        state.current_enemy = None;
        state.battle_log.clear();
        state.floor = 0;
        state.in_battle = false;
        state.available_skill_rewards.clear();
        state.current_turn = Turn::Player;
        state.turn_count = 0;
        self.log(LogKind::System, "A new adventure begins!");
    }
}
