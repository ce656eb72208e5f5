//! Weighted random selection of outcomes.
//!
//! [`WeightedTable`] maps a uniform draw in `[0, 1)` onto one of its entries with
//! probability proportional to the entry's weight.
use rand::RngCore;

pub mod weighted;

pub use weighted::{WeightedEntry, WeightedTable};

/// Generate a uniform random float in the range [0, 1).
///
/// Uses the top 53 bits of a `u64` so every value is exactly representable.
#[inline]
pub fn draw01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}


#[cfg(test)]
mod tests {
    use super::test_rng::FixedRng;
    use super::*;

    #[test]
    fn draw01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(draw01(&mut rng), 0.0);
    }

    #[test]
    fn draw01_stays_below_one_for_max_input() {
        let mut rng = FixedRng { value: u64::MAX };
        let result = draw01(&mut rng);
        assert!(result < 1.0);
        assert!(result > 0.999_999);
    }

    #[test]
    fn for_draw_round_trips_through_draw01() {
        for draw in [0.0, 0.25, 0.5, 0.9] {
            let mut rng = FixedRng::for_draw(draw);
            assert!((draw01(&mut rng) - draw).abs() < 1e-12);
        }
    }
}
