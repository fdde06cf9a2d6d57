use crate::skill::{Skill, starting_skills};

/// The player character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// May dip below zero inside a single enemy action; the engine resets the
    /// game before such a value is observable.
    pub hp: i32,
    pub max_hp: i32,
    /// Rotation order for automatic skill selection.
    pub skills: Vec<Skill>,
    /// Index of the last skill used this floor, `None` before the first use.
    pub last_used_skill_index: Option<usize>,
}

impl Player {
    pub fn new(max_hp: i32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            skills: starting_skills(),
            last_used_skill_index: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Adds `amount` hit points, capped at `max_hp`. Returns the amount gained.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// First usable skill scanning circularly from just after the last used one.
    pub fn next_ready_skill(&self) -> Option<usize> {
        let count = self.skills.len();
        if count == 0 {
            return None;
        }
        let start = self.last_used_skill_index.map_or(0, |last| (last + 1) % count);
        (0..count)
            .map(|offset| (start + offset) % count)
            .find(|&index| self.skills[index].is_ready())
    }

    pub fn reset_cooldowns(&mut self) {
        self.skills.iter_mut().for_each(Skill::reset_cooldown);
    }

    pub fn tick_cooldowns(&mut self) {
        self.skills.iter_mut().for_each(Skill::tick_cooldown);
    }
}
