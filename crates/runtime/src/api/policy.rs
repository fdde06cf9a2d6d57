//! Asynchronous abstraction for choosing skill rewards.
//!
//! The auto-play driver asks a [`RewardPolicy`] which offer to claim after
//! each victory, so sessions can run with human input, scripted fixtures,
//! or simple built-in strategies.
use async_trait::async_trait;
use rand::Rng;

use game_core::{GameState, Skill, SkillId};

use super::errors::Result;

/// Trait for picking one of the offered skills.
///
/// Returning `Ok(None)` declines every offer; the offers are then forfeited
/// when the next floor starts.
#[async_trait]
pub trait RewardPolicy: Send + Sync {
    async fn choose(&self, offers: &[Skill], state: &GameState) -> Result<Option<SkillId>>;
}

/// Always claims the first offer. Matches an impatient player.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstOffer;

#[async_trait]
impl RewardPolicy for FirstOffer {
    async fn choose(&self, offers: &[Skill], _state: &GameState) -> Result<Option<SkillId>> {
        Ok(offers.first().map(|skill| skill.id.clone()))
    }
}

/// Picks uniformly among the offers using the thread-local RNG.
///
/// Not deterministic; use [`FirstOffer`] or a scripted policy for replays.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOffer;

#[async_trait]
impl RewardPolicy for RandomOffer {
    async fn choose(&self, offers: &[Skill], _state: &GameState) -> Result<Option<SkillId>> {
        if offers.is_empty() {
            return Ok(None);
        }
        let index = rand::thread_rng().gen_range(0..offers.len());
        Ok(Some(offers[index].id.clone()))
    }
}
