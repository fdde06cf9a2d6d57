use core::time::Duration;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Pause a driver should observe between two battle ticks.
    ///
    /// The engine never waits itself; it hands this back inside
    /// [`Schedule::After`](crate::engine::Schedule::After).
    pub turn_delay: Duration,

    /// Player hit points at game start and after every reset.
    pub player_max_hp: i32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Battle log ring buffer size. Oldest entries are dropped first.
    pub const LOG_CAPACITY: usize = 50;
    /// Upper bound on skills offered after a single victory.
    pub const MAX_REWARD_OFFERS: usize = 3;
    /// Floors per additional reward offer.
    pub const FLOORS_PER_EXTRA_OFFER: u32 = 5;
    /// Floors per +10% reward scaling step.
    pub const FLOORS_PER_REWARD_STEP: u32 = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TURN_DELAY_MS: u64 = 500;
    pub const DEFAULT_PLAYER_MAX_HP: i32 = 100;

    pub fn new() -> Self {
        Self {
            turn_delay: Duration::from_millis(Self::DEFAULT_TURN_DELAY_MS),
            player_max_hp: Self::DEFAULT_PLAYER_MAX_HP,
        }
    }

    pub fn with_turn_delay(mut self, turn_delay: Duration) -> Self {
        self.turn_delay = turn_delay;
        self
    }

    pub fn with_player_max_hp(mut self, player_max_hp: i32) -> Self {
        self.player_max_hp = player_max_hp.max(1);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
