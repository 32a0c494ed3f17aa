//! RNG module - seedable random source for placement
//!
//! Food, food colors and obstacles are all placed by sampling. Using a small
//! LCG with an explicit seed keeps every round reproducible: the same seed and
//! the same command sequence always produce the same board.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce a short cycle
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of an LCG have short periods; hand out the high half.
        self.state >> 16
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Uniform integer in `[lo, hi)`; returns `lo` for an empty range.
    pub fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo) as u32;
        lo + self.next_range(span) as i32
    }

    /// Uniform byte in `[lo, hi]` (inclusive).
    pub fn range_u8(&mut self, lo: u8, hi: u8) -> u8 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo) as u32 + 1;
        lo + self.next_range(span) as u8
    }

    /// Current state, usable as a seed to continue the same sequence
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let a: Vec<u32> = (0..8).map(|_| rng1.next_u32()).collect();
        let b: Vec<u32> = (0..8).map(|_| rng2.next_u32()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        let first = rng.next_u32();
        let second = rng.next_u32();
        assert_ne!(first, second);
    }

    #[test]
    fn test_range_i32_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let v = rng.range_i32(2, 20);
            assert!((2..20).contains(&v));
        }
        assert_eq!(rng.range_i32(5, 5), 5);
    }

    #[test]
    fn test_range_i32_hits_every_value() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 6];
        for _ in 0..500 {
            seen[rng.range_i32(0, 6) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_range_u8_inclusive() {
        let mut rng = SimpleRng::new(3);
        let mut saw_max = false;
        for _ in 0..5000 {
            let v = rng.range_u8(50, 255);
            assert!(v >= 50);
            if v == 255 {
                saw_max = true;
            }
        }
        assert!(saw_max);
    }
}
