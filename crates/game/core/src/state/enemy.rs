/// Unique enemy identifier, allocated from [`GameState`](super::GameState).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyId(pub u64);

impl core::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "enemy-{}", self.0)
    }
}

/// The opponent on the current floor. Discarded when the floor ends.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub id: EnemyId,
    pub name: String,
    /// Goes negative on overkill; the engine treats `<= 0` as defeated.
    pub hp: i32,
    pub max_hp: i32,
    /// Flat damage dealt on every enemy turn.
    pub damage: i32,
}

impl Enemy {
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}
