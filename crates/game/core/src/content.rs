//! Static content tables: enemy names and reward skill templates.
//!
//! Content is compiled in and never appears in game state directly;
//! generators read it and produce owned, scaled instances.

use crate::effect::Effect;

/// Enemy names in difficulty order. Higher floors index further in,
/// clamped at the last entry.
pub const ENEMY_NAMES: [&str; 25] = [
    "Small Slime",
    "Large Slime",
    "Skeleton Warrior",
    "Skeleton Archer",
    "Zombie",
    "Ghost",
    "Goblin",
    "Goblin Archer",
    "Orc Warrior",
    "Orc Shaman",
    "Giant Spider",
    "Venom Spider",
    "Stone Golem",
    "Fire Elemental",
    "Water Elemental",
    "Wind Elemental",
    "Earth Elemental",
    "Werewolf",
    "Vampire",
    "Demon",
    "Dragon Whelp",
    "Adult Dragon",
    "Ancient Dragon",
    "Dark Knight",
    "Lich",
];

/// Immutable master definition of a reward skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillTemplate {
    pub id: &'static str,
    pub name: &'static str,
    /// Leading clause of the description, before the effect phrases.
    pub flavor: &'static str,
    pub effects: &'static [Effect],
    pub cooldown: u32,
}

/// Skills that can be offered after a victory.
pub const SKILL_TEMPLATES: [SkillTemplate; 10] = [
    SkillTemplate {
        id: "fireball",
        name: "Fireball",
        flavor: "Hurls a ball of fire",
        effects: &[Effect::damage(20)],
        cooldown: 3,
    },
    SkillTemplate {
        id: "ice-spike",
        name: "Ice Spike",
        flavor: "Launches a spike of ice",
        effects: &[Effect::damage(15)],
        cooldown: 2,
    },
    SkillTemplate {
        id: "lightning-bolt",
        name: "Lightning Bolt",
        flavor: "Calls down a bolt of lightning",
        effects: &[Effect::damage(25)],
        cooldown: 4,
    },
    SkillTemplate {
        id: "poison-dart",
        name: "Poison Dart",
        flavor: "Throws a poisoned dart",
        effects: &[Effect::damage(10)],
        cooldown: 1,
    },
    SkillTemplate {
        id: "heavy-slash",
        name: "Heavy Slash",
        flavor: "Strikes with full force",
        effects: &[Effect::damage(30)],
        cooldown: 5,
    },
    SkillTemplate {
        id: "quick-stab",
        name: "Quick Stab",
        flavor: "Stabs the enemy in a flash",
        effects: &[Effect::damage(8)],
        cooldown: 1,
    },
    SkillTemplate {
        id: "meteor-strike",
        name: "Meteor Strike",
        flavor: "Summons a falling meteor",
        effects: &[Effect::damage(40)],
        cooldown: 7,
    },
    SkillTemplate {
        id: "wind-slash",
        name: "Wind Slash",
        flavor: "Releases a blade of wind",
        effects: &[Effect::damage(12)],
        cooldown: 2,
    },
    SkillTemplate {
        id: "earth-spike",
        name: "Earth Spike",
        flavor: "Raises spikes from the ground",
        effects: &[Effect::damage(18)],
        cooldown: 3,
    },
    SkillTemplate {
        id: "shadow-bolt",
        name: "Shadow Bolt",
        flavor: "Fires a bolt of shadow",
        effects: &[Effect::damage(22)],
        cooldown: 4,
    },
];
