//! Skill effect model - atomic state mutations attached to skills.
//!
//! A skill is an ordered list of [`Effect`]s applied one after another when
//! the skill is used. Each effect mutates exactly one combatant.
//!
//! # Architecture
//!
//! [`EffectKind`] is a closed enum dispatched by `match` in [`apply_effect`].
//! Kinds the engine does not understand are carried as
//! [`EffectKind::Custom`]: they are ignored on application but still produce
//! a description, so content can introduce new kinds before the rules learn
//! them.

mod apply;

pub use apply::{EffectOutcome, apply_effect};

use std::borrow::Cow;

/// What an effect does.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EffectKind {
    /// Subtract hit points from the current enemy.
    Damage,
    /// Restore hit points to the caster, capped at maximum.
    Heal,
    /// Kind without rules yet. Never applied, always describable.
    Custom(Cow<'static, str>),
}

impl EffectKind {
    pub fn as_str(&self) -> &str {
        match self {
            EffectKind::Damage => "damage",
            EffectKind::Heal => "heal",
            EffectKind::Custom(name) => name,
        }
    }
}

impl core::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who an effect is aimed at.
///
/// Only healing reads this today, and only [`EffectTarget::Caster`] (or no
/// target at all) has an effect. The other values are reserved.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EffectTarget {
    #[strum(serialize = "self")]
    #[cfg_attr(feature = "serde", serde(rename = "self"))]
    Caster,
    Enemy,
    All,
}

/// A single effect template attached to a skill.
///
/// `duration` and `target` are carried for future effect kinds (damage over
/// time, multi-target). No processor consumes `duration` yet.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub kind: EffectKind,
    pub value: u32,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub duration: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub target: Option<EffectTarget>,
}

impl Effect {
    pub const fn new(kind: EffectKind, value: u32) -> Self {
        Self {
            kind,
            value,
            duration: None,
            target: None,
        }
    }

    pub const fn damage(value: u32) -> Self {
        Self::new(EffectKind::Damage, value)
    }

    pub const fn heal(value: u32) -> Self {
        Self::new(EffectKind::Heal, value)
    }

    pub fn custom(kind: impl Into<Cow<'static, str>>, value: u32) -> Self {
        Self::new(EffectKind::Custom(kind.into()), value)
    }

    /// Builder: set target.
    pub fn with_target(mut self, target: EffectTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Builder: set duration in turns.
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Magnitude as a signed hit-point delta, saturating at `i32::MAX`.
    pub fn magnitude(&self) -> i32 {
        i32::try_from(self.value).unwrap_or(i32::MAX)
    }

    /// Copy of this effect with `value` scaled by `percent` (100 = unchanged),
    /// truncated toward zero.
    pub fn scaled(&self, percent: u32) -> Self {
        let value = u64::from(self.value) * u64::from(percent) / 100;
        Self {
            value: u32::try_from(value).unwrap_or(u32::MAX),
            ..self.clone()
        }
    }

    /// Short phrase for skill descriptions, e.g. `"deals 20 damage"`.
    pub fn describe(&self) -> String {
        match &self.kind {
            EffectKind::Damage => format!("deals {} damage", self.value),
            EffectKind::Heal => format!("restores {} health", self.value),
            EffectKind::Custom(kind) => format!("{kind} effect ({})", self.value),
        }
    }

    /// Past-tense phrase for the combat log.
    ///
    /// `target_name` names the enemy for damage effects; other kinds ignore it.
    pub fn log_phrase(&self, target_name: Option<&str>) -> String {
        match &self.kind {
            EffectKind::Damage => format!(
                "dealt {} damage to {}",
                self.value,
                target_name.unwrap_or("the enemy")
            ),
            EffectKind::Heal => format!("restored {} health", self.value),
            EffectKind::Custom(kind) => format!("produced {kind} effect ({})", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_per_kind() {
        assert_eq!(Effect::damage(20).describe(), "deals 20 damage");
        assert_eq!(Effect::heal(15).describe(), "restores 15 health");
        assert_eq!(Effect::custom("burn", 4).describe(), "burn effect (4)");
    }

    #[test]
    fn log_phrase_names_target() {
        assert_eq!(
            Effect::damage(10).log_phrase(Some("Goblin")),
            "dealt 10 damage to Goblin"
        );
        assert_eq!(
            Effect::damage(10).log_phrase(None),
            "dealt 10 damage to the enemy"
        );
        assert_eq!(Effect::heal(15).log_phrase(Some("Goblin")), "restored 15 health");
        assert_eq!(
            Effect::custom("shield", 3).log_phrase(None),
            "produced shield effect (3)"
        );
    }

    #[test]
    fn scaling_truncates() {
        assert_eq!(Effect::damage(15).scaled(110).value, 16);
        assert_eq!(Effect::damage(20).scaled(100).value, 20);
        let healed = Effect::heal(15).with_target(EffectTarget::Caster).scaled(120);
        assert_eq!(healed.value, 18);
        assert_eq!(healed.target, Some(EffectTarget::Caster));
    }

    #[test]
    fn target_wire_names() {
        assert_eq!(EffectTarget::Caster.to_string(), "self");
        assert_eq!("self".parse::<EffectTarget>(), Ok(EffectTarget::Caster));
        assert_eq!("enemy".parse::<EffectTarget>(), Ok(EffectTarget::Enemy));
        assert!("party".parse::<EffectTarget>().is_err());
    }
}
