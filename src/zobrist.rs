//! Zobrist position hashing.
//!
//! Every (color, point) pair gets a pseudorandom 64-bit key and each side
//! to move gets a sign key. A position's hash is the XOR of the keys of all
//! its stones plus the mover's sign, so placements, removals, and turn
//! switches are O(1) incremental updates; the game only computes a hash
//! from scratch once, at construction.
//!
//! Keys are drawn from a seeded [`fastrand::Rng`], so hashes are stable
//! across runs and across engine instances.

use crate::bits::Bitset;
use crate::constants::{BOARD_SIZE, PIECE_COUNT, RANDOM_SEED};

/// Zobrist key table for a fixed board size.
pub struct ZobristHash {
    /// Keys for each (color, point) pair.
    keys: [[u64; BOARD_SIZE]; PIECE_COUNT],
    /// Side-to-move signs, one per color of the mover.
    signs: [u64; PIECE_COUNT],
}

impl ZobristHash {
    /// Create the key table from the fixed engine seed.
    pub fn new() -> Self {
        Self::with_seed(RANDOM_SEED)
    }

    /// Create the key table from an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut keys = [[0u64; BOARD_SIZE]; PIECE_COUNT];

        for color_keys in &mut keys {
            for key in color_keys.iter_mut() {
                *key = rng.u64(..);
            }
        }

        let signs = [rng.u64(..), rng.u64(..)];
        Self { keys, signs }
    }

    /// Hash with a stone of `color` added at `point`.
    #[inline]
    pub fn insert(&self, hash: u64, point: usize, color: usize) -> u64 {
        hash ^ self.keys[color][point]
    }

    /// Hash with a stone of `color` removed from `point`.
    ///
    /// XOR is its own inverse, so this matches [`ZobristHash::insert`];
    /// kept separate to mirror the board mutation being reverted.
    #[inline]
    pub fn remove(&self, hash: u64, point: usize, color: usize) -> u64 {
        hash ^ self.keys[color][point]
    }

    /// The side-to-move sign of the player holding `color` stones.
    #[inline]
    pub fn sign(&self, color: usize) -> u64 {
        self.signs[color]
    }

    /// Hash a full position from scratch: every stone of both colors plus
    /// the sign of the mover's color.
    pub fn compute(&self, position: &[Bitset; PIECE_COUNT], mover_color: usize) -> u64 {
        let mut hash = self.signs[mover_color];

        for (color, stones) in position.iter().enumerate() {
            for point in stones.iter_ones() {
                hash = self.insert(hash, point, color);
            }
        }

        hash
    }
}

impl Default for ZobristHash {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BLACK, WHITE};

    #[test]
    fn test_deterministic_keys() {
        let a = ZobristHash::new();
        let b = ZobristHash::new();
        assert_eq!(a.keys[BLACK][0], b.keys[BLACK][0]);
        assert_eq!(a.signs, b.signs);
    }

    #[test]
    fn test_signs_differ() {
        let hasher = ZobristHash::new();
        assert_ne!(hasher.sign(BLACK), hasher.sign(WHITE));
    }

    #[test]
    fn test_insert_remove_cancel() {
        let hasher = ZobristHash::new();
        let hash = 0xDEAD_BEEF;
        let placed = hasher.insert(hash, 12, BLACK);
        assert_ne!(hash, placed);
        assert_eq!(hash, hasher.remove(placed, 12, BLACK));
    }

    #[test]
    fn test_incremental_matches_scratch() {
        let hasher = ZobristHash::new();
        let mut position = [Bitset::new(), Bitset::new()];

        let mut hash = hasher.compute(&position, BLACK);
        position[BLACK].insert(4);
        hash = hasher.insert(hash, 4, BLACK);
        hash ^= hasher.sign(BLACK);
        hash ^= hasher.sign(WHITE);
        position[WHITE].insert(40);
        hash = hasher.insert(hash, 40, WHITE);
        hash ^= hasher.sign(WHITE);
        hash ^= hasher.sign(BLACK);

        assert_eq!(hash, hasher.compute(&position, BLACK));
    }

    #[test]
    fn test_order_independence() {
        let hasher = ZobristHash::new();
        let h1 = hasher.insert(hasher.insert(0, 3, BLACK), 7, WHITE);
        let h2 = hasher.insert(hasher.insert(0, 7, WHITE), 3, BLACK);
        assert_eq!(h1, h2);
    }
}
