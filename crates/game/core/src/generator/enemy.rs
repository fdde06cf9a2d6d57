use core::ops::Range;

use crate::content::ENEMY_NAMES;
use crate::env::Rolls;
use crate::state::{Enemy, EnemyId};

/// Stat multiplier range in basis points (10_000 = 1.0x), upper bound exclusive.
pub const MULTIPLIER_RANGE_BP: Range<u32> = 8_000..12_000;

const BASIS_POINTS: i64 = 10_000;

/// `50 + floor * 10`
pub fn enemy_base_hp(floor: u32) -> i64 {
    50 + i64::from(floor) * 10
}

/// `5 + floor(floor * 1.5)`
pub fn enemy_base_damage(floor: u32) -> i64 {
    5 + i64::from(floor) * 3 / 2
}

pub fn enemy_name(floor: u32) -> &'static str {
    let index = (floor / 2) as usize;
    ENEMY_NAMES[index.min(ENEMY_NAMES.len() - 1)]
}

/// Builds the enemy for `floor`.
///
/// A single multiplier roll in `[0.8, 1.2)` scales both hit points and
/// damage; `hp` and `max_hp` receive the identical value.
pub fn generate_enemy(floor: u32, id: EnemyId, rolls: &mut Rolls<'_>) -> Enemy {
    let multiplier = i64::from(rolls.range(MULTIPLIER_RANGE_BP.start, MULTIPLIER_RANGE_BP.end));
    let hp = scale(enemy_base_hp(floor), multiplier);
    let damage = scale(enemy_base_damage(floor), multiplier);

    Enemy {
        id,
        name: enemy_name(floor).to_owned(),
        hp,
        max_hp: hp,
        damage,
    }
}

fn scale(base: i64, multiplier_bp: i64) -> i32 {
    i32::try_from(base * multiplier_bp / BASIS_POINTS).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, RngOracle, RollStream};

    struct Constant(u32);

    impl RngOracle for Constant {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    fn enemy_with(oracle: &dyn RngOracle, floor: u32) -> Enemy {
        let mut rolls = Rolls::new(oracle, 11, floor as u64, RollStream::Enemy);
        generate_enemy(floor, EnemyId(floor as u64), &mut rolls)
    }

    #[test]
    fn midpoint_roll_yields_base_stats() {
        let enemy = enemy_with(&Constant(1 << 31), 1);
        assert_eq!(enemy.hp, 60);
        assert_eq!(enemy.max_hp, 60);
        assert_eq!(enemy.damage, 6);
        assert_eq!(enemy.name, "Small Slime");
    }

    #[test]
    fn extreme_rolls_stay_in_band() {
        let low = enemy_with(&Constant(0), 4);
        assert_eq!(low.hp, 72); // 90 * 0.8
        assert_eq!(low.damage, 8); // 11 * 0.8 = 8.8

        let high = enemy_with(&Constant(u32::MAX), 4);
        assert_eq!(high.hp, 107); // 90 * 1.1999
        assert_eq!(high.damage, 13); // 11 * 1.1999 = 13.19
    }

    #[test]
    fn hp_matches_max_and_band_for_all_floors() {
        let rng = PcgRng;
        for floor in 1..=60 {
            let enemy = enemy_with(&rng, floor);
            let base = enemy_base_hp(floor);
            assert_eq!(enemy.hp, enemy.max_hp);
            assert!(i64::from(enemy.hp) >= base * 8 / 10, "floor {floor}");
            assert!(i64::from(enemy.hp) <= base * 12 / 10, "floor {floor}");
            assert!(enemy.damage >= 0);
        }
    }

    #[test]
    fn names_progress_and_clamp() {
        assert_eq!(enemy_name(0), "Small Slime");
        assert_eq!(enemy_name(2), "Large Slime");
        assert_eq!(enemy_name(3), "Large Slime");
        assert_eq!(enemy_name(48), "Lich");
        assert_eq!(enemy_name(500), "Lich");
    }

    #[test]
    fn base_damage_floors_the_half_step() {
        assert_eq!(enemy_base_damage(1), 6);
        assert_eq!(enemy_base_damage(3), 9);
        assert_eq!(enemy_base_damage(10), 20);
    }
}
