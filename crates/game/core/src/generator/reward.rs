use crate::config::GameConfig;
use crate::content::{SKILL_TEMPLATES, SkillTemplate};
use crate::env::Rolls;
use crate::skill::{Skill, SkillId};

/// Skills offered after clearing `floor`: `clamp(floor / 5 + 1, 1, 3)`.
pub fn reward_count(floor: u32) -> usize {
    let count = (floor / GameConfig::FLOORS_PER_EXTRA_OFFER) as usize + 1;
    count.clamp(1, GameConfig::MAX_REWARD_OFFERS)
}

/// Effect scaling in percent: +10% per three floors.
pub fn reward_scale_percent(floor: u32) -> u32 {
    100 + (floor / GameConfig::FLOORS_PER_REWARD_STEP) * 10
}

/// Draws distinct templates without replacement and builds scaled instances.
///
/// `salt` must be unique per call; ids are `"<template>-<salt>-<offer>"`.
pub fn generate_skill_reward(floor: u32, salt: u64, rolls: &mut Rolls<'_>) -> Vec<Skill> {
    let count = reward_count(floor).min(SKILL_TEMPLATES.len());
    let percent = reward_scale_percent(floor);
    let mut remaining: Vec<&SkillTemplate> = SKILL_TEMPLATES.iter().collect();

    (0..count)
        .map(|offer| {
            let template = remaining.remove(rolls.index(remaining.len()));
            instantiate(template, percent, SkillId(format!("{}-{salt}-{offer}", template.id)))
        })
        .collect()
}

fn instantiate(template: &SkillTemplate, percent: u32, id: SkillId) -> Skill {
    let effects: Vec<_> = template
        .effects
        .iter()
        .map(|effect| effect.scaled(percent))
        .collect();

    let mut description = String::from(template.flavor);
    for effect in &effects {
        description.push_str(", ");
        description.push_str(&effect.describe());
    }
    description.push_str(&format!(", cooldown {} turns", template.cooldown));

    Skill::new(id, template.name, effects, template.cooldown, description)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::effect::EffectKind;
    use crate::env::{PcgRng, RngOracle, RollStream};

    struct Constant(u32);

    impl RngOracle for Constant {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    #[test]
    fn offer_count_by_floor() {
        assert_eq!(reward_count(0), 1);
        assert_eq!(reward_count(1), 1);
        assert_eq!(reward_count(4), 1);
        assert_eq!(reward_count(5), 2);
        assert_eq!(reward_count(10), 3);
        assert_eq!(reward_count(99), 3);
    }

    #[test]
    fn first_template_is_picked_by_zero_roll() {
        let oracle = Constant(0);
        let mut rolls = Rolls::new(&oracle, 0, 0, RollStream::Reward);
        let rewards = generate_skill_reward(1, 42, &mut rolls);

        assert_eq!(rewards.len(), 1);
        let fireball = &rewards[0];
        assert_eq!(fireball.id.as_str(), "fireball-42-0");
        assert_eq!(fireball.effects[0].value, 20);
        assert_eq!(fireball.current_cooldown, 0);
        assert_eq!(
            fireball.description,
            "Hurls a ball of fire, deals 20 damage, cooldown 3 turns"
        );
    }

    #[test]
    fn scaling_applies_to_effects_and_description() {
        let oracle = Constant(0);
        let mut rolls = Rolls::new(&oracle, 0, 0, RollStream::Reward);
        // floor 10: three offers, +30%
        let rewards = generate_skill_reward(10, 7, &mut rolls);

        let names: Vec<_> = rewards.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Fireball", "Ice Spike", "Lightning Bolt"]);
        assert_eq!(rewards[1].effects[0].value, 19); // 15 * 1.3 = 19.5
        assert!(rewards[1].description.contains("deals 19 damage"));
        assert!(rewards.iter().all(|s| s.effects[0].kind == EffectKind::Damage));
    }

    #[test]
    fn offers_are_distinct_and_templates_untouched() {
        let rng = PcgRng;
        for floor in 0..40 {
            let mut rolls = Rolls::new(&rng, 3, floor as u64, RollStream::Reward);
            let rewards = generate_skill_reward(floor, floor as u64, &mut rolls);
            assert!((1..=3).contains(&rewards.len()));

            let ids: HashSet<_> = rewards.iter().map(|s| s.id.clone()).collect();
            assert_eq!(ids.len(), rewards.len());
            let names: HashSet<_> = rewards.iter().map(|s| s.name.clone()).collect();
            assert_eq!(names.len(), rewards.len());
        }
        assert_eq!(SKILL_TEMPLATES[0].effects[0].value, 20);
    }

    #[test]
    fn repeated_calls_are_independent() {
        let oracle = Constant(0);
        let mut first = generate_skill_reward(1, 1, &mut Rolls::new(&oracle, 0, 0, RollStream::Reward));
        let second = generate_skill_reward(1, 2, &mut Rolls::new(&oracle, 0, 0, RollStream::Reward));

        first[0].effects[0].value = 999;
        first[0].trigger();

        assert_eq!(second[0].effects[0].value, 20);
        assert_eq!(second[0].current_cooldown, 0);
        assert_ne!(first[0].id, second[0].id);
    }
}
