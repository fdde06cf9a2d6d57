//! Floor-scaled generators for enemies and skill rewards.
//!
//! Generators are pure functions of the floor number plus a [`Rolls`]
//! sequence and an id source. They never touch [`GameState`] themselves; the
//! engine allocates ids and stores the results.
//!
//! [`Rolls`]: crate::env::Rolls
//! [`GameState`]: crate::state::GameState
mod enemy;
mod reward;

pub use enemy::{MULTIPLIER_RANGE_BP, enemy_base_damage, enemy_base_hp, enemy_name, generate_enemy};
pub use reward::{generate_skill_reward, reward_count, reward_scale_percent};
