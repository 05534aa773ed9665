//! Numeric draws.

use rand::Rng;

/// Draw a random integer uniformly from the inclusive range [min, max].
///
/// Callers must ensure min <= max; request validation rejects degenerate
/// ranges before this is reached.
pub fn int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_range_inclusive() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let value = int_range(&mut rng, -5, 5);
            assert!((-5..=5).contains(&value));
        }
    }

    #[test]
    fn test_int_range_single_value() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(int_range(&mut rng, 7, 7), 7);
    }

    #[test]
    fn test_int_range_covers_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen_min = false;
        let mut seen_max = false;

        for _ in 0..500 {
            match int_range(&mut rng, 0, 3) {
                0 => seen_min = true,
                3 => seen_max = true,
                _ => {}
            }
        }

        assert!(seen_min && seen_max);
    }
}
