//! RNG module - tile face shuffling
//!
//! The board needs each of the 8 faces exactly twice, so faces are never
//! drawn independently: the face list is duplicated and then shuffled with
//! Fisher-Yates. The RNG is a small seedable LCG so a given seed always
//! produces the same board (tests, bug reports, `MEMORY_SEED`).

use crate::types::{PAIR_COUNT, TILE_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by multiplication instead of `%`: the low bits of an LCG cycle
    /// with a short period, the high bits do not.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Duplicate every face and shuffle the result into board order.
///
/// The returned array is in row-major tile order.
pub fn deal_pairs<T: Copy>(faces: [T; PAIR_COUNT], rng: &mut SimpleRng) -> [T; TILE_COUNT] {
    let mut deck: [T; TILE_COUNT] = std::array::from_fn(|i| faces[i % PAIR_COUNT]);
    rng.shuffle(&mut deck);
    deck
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

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..=16 {
            for _ in 0..200 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_next_range_hits_every_value() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 16];
        for _ in 0..1000 {
            seen[rng.next_range(16) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_deal_pairs_has_each_face_twice() {
        let mut rng = SimpleRng::new(42);
        let deck = deal_pairs([1u8, 2, 3, 4, 5, 6, 7, 8], &mut rng);

        let mut counts = [0u8; 9];
        for face in deck {
            counts[face as usize] += 1;
        }
        assert_eq!(counts[0], 0);
        assert!(counts[1..].iter().all(|&c| c == 2), "{:?}", counts);
    }

    #[test]
    fn test_deal_pairs_is_seeded() {
        let faces = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let a = deal_pairs(faces, &mut SimpleRng::new(5));
        let b = deal_pairs(faces, &mut SimpleRng::new(5));
        let c = deal_pairs(faces, &mut SimpleRng::new(6));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_deal_pairs_actually_shuffles() {
        let faces = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let unshuffled: [u8; TILE_COUNT] = std::array::from_fn(|i| faces[i % PAIR_COUNT]);
        let shuffled = (1..20).any(|seed| deal_pairs(faces, &mut SimpleRng::new(seed)) != unshuffled);
        assert!(shuffled);
    }
}
