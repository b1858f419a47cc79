//! Bounded random parameters
//!
//! Used to refill form defaults after a submit and to size/place spawned
//! bodies. Seeded so a run can be reproduced.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Inclusive integer range `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// A range holding a single value
    pub const fn exactly(value: i32) -> Self {
        Self::new(value, value)
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Uniform integer generator over inclusive ranges
#[derive(Debug, Clone)]
pub struct ParamRng {
    seed: u64,
    rng: Pcg32,
}

impl ParamRng {
    /// Deterministic generator for the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the OS entropy source
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`. Callers must order their bounds; ranges read
    /// from settings are checked by `Settings::validate`.
    pub fn next_int(&mut self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "next_int: min {min} exceeds max {max}");
        self.rng.random_range(min..=max)
    }

    /// Uniform integer within `range`
    pub fn sample(&mut self, range: IntRange) -> i32 {
        self.next_int(range.min, range.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_range() {
        let mut rng = ParamRng::new(7);
        for _ in 0..100 {
            assert_eq!(rng.next_int(5, 5), 5);
        }
    }

    #[test]
    fn test_stays_in_range_and_hits_endpoints() {
        let mut rng = ParamRng::new(42);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2000 {
            let v = rng.next_int(5, 15);
            assert!((5..=15).contains(&v));
            seen_min |= v == 5;
            seen_max |= v == 15;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_negative_bounds() {
        let mut rng = ParamRng::new(1);
        for _ in 0..500 {
            let v = rng.sample(IntRange::new(-3, -1));
            assert!((-3..=-1).contains(&v));
        }
    }

    #[test]
    #[should_panic(expected = "exceeds max")]
    fn test_reversed_range_panics() {
        ParamRng::new(0).next_int(10, 5);
    }

    #[test]
    fn test_determinism() {
        let mut a = ParamRng::new(99999);
        let mut b = ParamRng::new(99999);
        let xs: Vec<i32> = (0..32).map(|_| a.next_int(0, 1000)).collect();
        let ys: Vec<i32> = (0..32).map(|_| b.next_int(0, 1000)).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), 99999);
    }

    #[test]
    fn test_int_range_helpers() {
        let r = IntRange::new(5, 200);
        assert!(r.is_ordered());
        assert!(r.contains(5) && r.contains(200));
        assert!(!r.contains(201));
        assert!(!IntRange::new(3, 2).is_ordered());
        assert_eq!(IntRange::exactly(4), IntRange::new(4, 4));
    }
}
