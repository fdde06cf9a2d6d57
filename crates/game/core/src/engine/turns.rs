//! Per-turn actions for both combatants.

use tracing::debug;

use super::{ActionError, GameEngine, Step, TurnOutcome};
use crate::effect::apply_effect;
use crate::state::{LogKind, Turn};

impl GameEngine<'_> {
    /// Uses the next ready skill in rotation order.
    ///
    /// Skipping a turn because every skill is cooling down is a valid outcome,
    /// not an error.
    pub fn player_action(&mut self) -> Result<Step, ActionError> {
        self.ensure_turn(Turn::Player)?;

        let mut outcomes = Vec::with_capacity(2);
        match self.state.player.next_ready_skill() {
            Some(index) => outcomes.push(self.use_skill(index)),
            None => {
                self.log(LogKind::Player, "You have no usable skills and skip the turn!");
                outcomes.push(TurnOutcome::TurnSkipped);
            }
        }

        let defeated = self
            .state
            .current_enemy
            .as_ref()
            .is_some_and(|enemy| enemy.is_defeated());
        let name = self.state.enemy_name().unwrap_or("the enemy").to_owned();

        if defeated {
            self.log(LogKind::System, format!("You defeated {name}!"));
            outcomes.extend(self.end_battle(true));
        } else {
            self.state.current_turn = Turn::Enemy;
            self.log(LogKind::System, format!("{name}'s turn begins!"));
        }

        Ok(self.finish(outcomes))
    }

    /// The enemy strikes once for its full damage.
    pub fn enemy_action(&mut self) -> Result<Step, ActionError> {
        self.ensure_turn(Turn::Enemy)?;

        let (name, damage) = match self.state.current_enemy.as_ref() {
            Some(enemy) => (enemy.name.clone(), enemy.damage),
            None => return Err(self.reject(ActionError::MissingEnemy)),
        };

        self.state.player.take_damage(damage);
        let player_hp = self.state.player.hp;
        self.log(LogKind::Enemy, format!("{name} attacks you for {damage} damage!"));

        let mut outcomes = vec![TurnOutcome::EnemyAttacked { damage, player_hp }];

        if self.state.player.is_alive() {
            self.state.current_turn = Turn::Player;
            self.state.turn_count += 1;
            self.state.player.tick_cooldowns();
            self.log(LogKind::System, "Your turn begins!");
        } else {
            self.log(LogKind::System, "You have been defeated! Game over!");
            outcomes.extend(self.end_battle(false));
        }

        Ok(self.finish(outcomes))
    }

    /// Runs whichever side's action is due.
    pub fn execute_battle_turn(&mut self) -> Result<Step, ActionError> {
        if !self.state.in_battle {
            return Err(self.reject(ActionError::NoBattle));
        }
        match self.state.current_turn {
            Turn::Player => self.player_action(),
            Turn::Enemy => self.enemy_action(),
        }
    }

    /// Alias for [`execute_battle_turn`](Self::execute_battle_turn).
    pub fn tick(&mut self) -> Result<Step, ActionError> {
        self.execute_battle_turn()
    }

    fn ensure_turn(&mut self, expected: Turn) -> Result<(), ActionError> {
        if !self.state.in_battle {
            return Err(self.reject(ActionError::NoBattle));
        }
        if self.state.current_enemy.is_none() {
            return Err(self.reject(ActionError::MissingEnemy));
        }
        if self.state.current_turn != expected {
            let error = match expected {
                Turn::Player => ActionError::NotPlayerTurn,
                Turn::Enemy => ActionError::NotEnemyTurn,
            };
            return Err(self.reject(error));
        }
        Ok(())
    }

    fn use_skill(&mut self, index: usize) -> TurnOutcome {
        let skill = &mut self.state.player.skills[index];
        skill.trigger();
        let id = skill.id.clone();
        let name = skill.name.clone();
        let effects = skill.effects.clone();

        let mut results = Vec::with_capacity(effects.len());
        for effect in &effects {
            results.push(apply_effect(&mut *self.state, effect));
        }
        self.state.player.last_used_skill_index = Some(index);

        let phrase = self.state.player.skills[index].log_phrase(self.state.enemy_name());
        if phrase.is_empty() {
            self.log(LogKind::Player, format!("You used {name}!"));
        } else {
            self.log(LogKind::Player, format!("You used {name}: {phrase}!"));
        }

        debug!(
            target: "game_core::engine",
            skill = %id,
            index,
            effects = results.len(),
            floor = self.state.floor,
            turn = self.state.turn_count,
            "player turn resolved"
        );

        TurnOutcome::SkillUsed {
            index,
            skill: id,
            effects: results,
        }
    }
}
