//! Effect application against the game state.

use tracing::{debug, warn};

use super::{Effect, EffectKind, EffectTarget};
use crate::state::GameState;

/// What applying a single effect actually did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectOutcome {
    /// Enemy hit points reduced by `amount`; `remaining` may be negative.
    Damaged { amount: i32, remaining: i32 },
    /// Player hit points restored by `amount` after clamping to maximum.
    Healed { amount: i32 },
    /// Damage with no enemy to receive it. Indicates state-machine misuse.
    MissingTarget,
    /// Unknown kind or reserved target; state untouched.
    Ignored,
}

/// Applies one effect, mutating at most one combatant.
pub fn apply_effect(state: &mut GameState, effect: &Effect) -> EffectOutcome {
    match &effect.kind {
        EffectKind::Damage => {
            let Some(enemy) = state.current_enemy.as_mut() else {
                state.diagnostics.missing_targets += 1;
                warn!(
                    target: "game_core::effect",
                    value = effect.value,
                    floor = state.floor,
                    "damage effect applied with no current enemy"
                );
                return EffectOutcome::MissingTarget;
            };
            let amount = effect.magnitude();
            enemy.take_damage(amount);
            EffectOutcome::Damaged {
                amount,
                remaining: enemy.hp,
            }
        }
        EffectKind::Heal => match effect.target {
            None | Some(EffectTarget::Caster) => EffectOutcome::Healed {
                amount: state.player.heal(effect.magnitude()),
            },
            Some(target) => {
                debug!(target: "game_core::effect", %target, "heal target not supported yet");
                EffectOutcome::Ignored
            }
        },
        EffectKind::Custom(kind) => {
            state.diagnostics.unknown_effects += 1;
            debug!(target: "game_core::effect", kind = %kind, "ignoring unknown effect kind");
            EffectOutcome::Ignored
        }
    }
}
