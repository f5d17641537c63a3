//! Fixed-width bitset over board points.
//!
//! Each color of stones is stored as one [`Bitset`]: one bit per
//! intersection, packed into `u64` words. The game keeps two of these as
//! its live position and serializes them word-for-word into a flat history
//! buffer when snapshotting, so `copy_to`/`copy_from` work against a plain
//! `u64` slice at a caller-chosen offset.

use crate::constants::BITSET_WORDS;

/// A set of board points, one bit per intersection.
///
/// Points are plain indices in `[0, BOARD_SIZE)`; callers guarantee the
/// range, no bounds are checked beyond the slice accesses themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitset {
    words: [u64; BITSET_WORDS],
}

impl Bitset {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self {
            words: [0; BITSET_WORDS],
        }
    }

    /// Check if a point is in the set.
    #[inline]
    pub fn contains(&self, point: usize) -> bool {
        (self.words[point / 64] >> (point % 64)) & 1 == 1
    }

    /// Add a point to the set.
    #[inline]
    pub fn insert(&mut self, point: usize) {
        self.words[point / 64] |= 1u64 << (point % 64);
    }

    /// Flip a point's membership. Used for captures, where the point is
    /// known to be occupied.
    #[inline]
    pub fn toggle(&mut self, point: usize) {
        self.words[point / 64] ^= 1u64 << (point % 64);
    }

    /// Number of points in the set.
    #[inline]
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Iterate over set points in increasing order.
    pub fn iter_ones(&self) -> BitsetIter {
        BitsetIter {
            words: self.words,
            index: 0,
            current: self.words[0],
        }
    }

    /// Write this set's words into a flat buffer starting at `offset`.
    #[inline]
    pub fn copy_to(&self, buffer: &mut [u64], offset: usize) {
        buffer[offset..offset + BITSET_WORDS].copy_from_slice(&self.words);
    }

    /// Overwrite this set with words read from a flat buffer at `offset`.
    #[inline]
    pub fn copy_from(&mut self, buffer: &[u64], offset: usize) {
        self.words.copy_from_slice(&buffer[offset..offset + BITSET_WORDS]);
    }
}

/// Iterator over the set points of a [`Bitset`].
pub struct BitsetIter {
    words: [u64; BITSET_WORDS],
    index: usize,
    current: u64,
}

impl Iterator for BitsetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.index += 1;
            if self.index >= BITSET_WORDS {
                return None;
            }
            self.current = self.words[self.index];
        }

        let bit = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some(self.index * 64 + bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BOARD_SIZE;

    #[test]
    fn test_insert_contains() {
        let mut set = Bitset::new();
        assert!(!set.contains(0));
        set.insert(0);
        set.insert(BOARD_SIZE - 1);
        assert!(set.contains(0));
        assert!(set.contains(BOARD_SIZE - 1));
        assert!(!set.contains(1));
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn test_toggle_removes() {
        let mut set = Bitset::new();
        set.insert(17);
        set.toggle(17);
        assert!(!set.contains(17));
        assert_eq!(set.count(), 0);
    }

    #[test]
    fn test_iter_ones_in_order() {
        let mut set = Bitset::new();
        let points = [3, 0, 64.min(BOARD_SIZE - 1), 42];
        for &p in &points {
            set.insert(p);
        }
        let mut sorted: Vec<usize> = points.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        let collected: Vec<usize> = set.iter_ones().collect();
        assert_eq!(collected, sorted);
    }

    #[test]
    fn test_copy_roundtrip() {
        let mut set = Bitset::new();
        set.insert(5);
        set.insert(BOARD_SIZE - 2);

        let mut buffer = vec![0u64; 3 * BITSET_WORDS];
        set.copy_to(&mut buffer, BITSET_WORDS);

        let mut restored = Bitset::new();
        restored.copy_from(&buffer, BITSET_WORDS);
        assert_eq!(set, restored);
    }
}
