//! Skills owned by the player and offered as rewards.

use crate::effect::{Effect, EffectTarget};

/// Unique skill identifier.
///
/// Starting skills use their template name; reward instances get a
/// `"<template>-<salt>-<offer>"` id that never repeats within a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillId(pub String);

impl SkillId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SkillId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SkillId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for SkillId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A skill instance with its own cooldown state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    /// Applied in declaration order.
    pub effects: Vec<Effect>,
    /// Turns the skill rests after use.
    pub cooldown: u32,
    /// Turns remaining before the skill is usable again. Never above `cooldown`.
    pub current_cooldown: u32,
    pub description: String,
}

impl Skill {
    pub fn new(
        id: impl Into<SkillId>,
        name: impl Into<String>,
        effects: Vec<Effect>,
        cooldown: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            effects,
            cooldown,
            current_cooldown: 0,
            description: description.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }

    /// Puts the skill on its full cooldown after use.
    pub fn trigger(&mut self) {
        self.current_cooldown = self.cooldown;
    }

    /// Advances the cooldown by one of the caster's turns, stopping at zero.
    pub fn tick_cooldown(&mut self) {
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }

    pub fn reset_cooldown(&mut self) {
        self.current_cooldown = 0;
    }

    /// Combined combat-log phrase for every effect, joined in order.
    pub fn log_phrase(&self, target_name: Option<&str>) -> String {
        self.effects
            .iter()
            .map(|effect| effect.log_phrase(target_name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The two skills every adventure starts with.
pub fn starting_skills() -> Vec<Skill> {
    vec![
        Skill::new(
            "basic-attack",
            "Basic Attack",
            vec![Effect::damage(10)],
            0,
            "A basic attack, deals 10 damage",
        ),
        Skill::new(
            "healing-light",
            "Healing Light",
            vec![Effect::heal(15).with_target(EffectTarget::Caster)],
            3,
            "A soothing light, restores 15 health, cooldown 3 turns",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_counts_down_to_zero_and_stays() {
        let mut skill = starting_skills().remove(1);
        assert!(skill.is_ready());

        skill.trigger();
        assert_eq!(skill.current_cooldown, 3);
        assert!(!skill.is_ready());

        for expected in [2, 1, 0, 0] {
            skill.tick_cooldown();
            assert_eq!(skill.current_cooldown, expected);
            assert!(skill.current_cooldown <= skill.cooldown);
        }
        assert!(skill.is_ready());
    }

    #[test]
    fn log_phrase_joins_effects() {
        let skill = Skill::new(
            "drain",
            "Drain",
            vec![Effect::damage(8), Effect::heal(4)],
            2,
            "",
        );
        assert_eq!(
            skill.log_phrase(Some("Ghost")),
            "dealt 8 damage to Ghost, restored 4 health"
        );
    }
}
