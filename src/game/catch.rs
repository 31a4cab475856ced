//! Catch Simulation
//!
//! Derives a catch probability from a Pokemon's base experience and rolls
//! against it.

use rand::Rng;

/// Lowest catch chance, in percent
pub const MIN_CATCH_RATE: u32 = 10;

/// Highest catch chance, in percent
pub const MAX_CATCH_RATE: u32 = 90;

/// Catch chance in percent for a Pokemon with the given base experience.
///
/// Higher base experience is harder to catch: `100 - base_experience / 2`,
/// clamped to `MIN_CATCH_RATE..=MAX_CATCH_RATE`.
pub fn catch_rate(base_experience: u32) -> u32 {
    100u32
        .saturating_sub(base_experience / 2)
        .clamp(MIN_CATCH_RATE, MAX_CATCH_RATE)
}

/// Rolls a number in `1..=100` and succeeds if it does not exceed `rate`.
pub fn attempt_catch<R: Rng + ?Sized>(rate: u32, rng: &mut R) -> bool {
    rng.random_range(1..=100) <= rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_catch_rate_values() {
        assert_eq!(catch_rate(0), 90);
        assert_eq!(catch_rate(20), 90);
        assert_eq!(catch_rate(22), 89);
        assert_eq!(catch_rate(112), 44);
        assert_eq!(catch_rate(180), 10);
        assert_eq!(catch_rate(608), 10);
        assert_eq!(catch_rate(u32::MAX), 10);
    }

    #[test]
    fn test_rate_bounds_decide_outcome() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert!(attempt_catch(100, &mut rng));
            assert!(!attempt_catch(0, &mut rng));
        }
    }

    #[test]
    fn test_attempts_follow_rate() {
        let mut rng = StdRng::seed_from_u64(7);
        let caught = (0..10_000)
            .filter(|_| attempt_catch(MAX_CATCH_RATE, &mut rng))
            .count();

        // 90% expected; allow generous slack
        assert!((8_500..=9_500).contains(&caught), "caught {}", caught);
    }

    proptest! {
        #[test]
        fn prop_catch_rate_within_bounds(base in any::<u32>()) {
            let rate = catch_rate(base);
            prop_assert!((MIN_CATCH_RATE..=MAX_CATCH_RATE).contains(&rate));
        }

        #[test]
        fn prop_catch_rate_non_increasing(a in 0u32..2000, b in 0u32..2000) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(catch_rate(low) >= catch_rate(high));
        }
    }
}
