//! Connected-group resolution.
//!
//! A [`Chain`] is an ephemeral aggregate built by flood fill: the stones of
//! one connected group plus the empty points surrounding it. The resolver
//! is a pure simulation primitive — it treats the start point as holding a
//! stone of the requested color whether or not one is actually there, which
//! lets the same routine answer "what would this group look like if I
//! played here" (suicide checks) and "what does this group look like now"
//! (capture detection). It never mutates the position, and chains are never
//! cached because the board changes every ply.

use crate::bits::Bitset;
use crate::constants::PIECE_COUNT;
use crate::points::neighbors;

/// A connected group of same-colored stones and its liberties.
pub struct Chain {
    /// Points of the group, including the (possibly hypothetical) start.
    pub stones: Bitset,
    /// Empty points adjacent to the group.
    pub liberties: Bitset,
}

impl Chain {
    /// Flood-fill the group of `color` stones containing `point`.
    ///
    /// The start point is taken to be a `color` stone regardless of its
    /// actual occupancy in `position`.
    pub fn resolve(position: &[Bitset; PIECE_COUNT], color: usize, point: usize) -> Self {
        let mut stones = Bitset::new();
        let mut liberties = Bitset::new();
        let mut stack = vec![point];
        stones.insert(point);

        while let Some(point) = stack.pop() {
            for &neighbor in neighbors(point) {
                if stones.contains(neighbor) {
                    continue;
                }
                if position[color].contains(neighbor) {
                    stones.insert(neighbor);
                    stack.push(neighbor);
                } else if !position[color ^ 1].contains(neighbor) {
                    liberties.insert(neighbor);
                }
            }
        }

        Self { stones, liberties }
    }

    /// Check if the chain has exactly one liberty left.
    #[inline]
    pub fn is_in_atari(&self) -> bool {
        self.liberties.count() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BLACK, N, WHITE};

    fn empty_position() -> [Bitset; PIECE_COUNT] {
        [Bitset::new(), Bitset::new()]
    }

    #[test]
    fn test_lone_stone_in_center() {
        let mut position = empty_position();
        let center = (N / 2) * N + N / 2;
        position[BLACK].insert(center);

        let chain = Chain::resolve(&position, BLACK, center);
        assert_eq!(chain.stones.count(), 1);
        assert_eq!(chain.liberties.count(), 4);
        assert!(!chain.is_in_atari());
    }

    #[test]
    fn test_connected_group_shares_liberties() {
        let mut position = empty_position();
        // Two black stones side by side on the top edge
        position[BLACK].insert(1);
        position[BLACK].insert(2);

        let chain = Chain::resolve(&position, BLACK, 1);
        assert_eq!(chain.stones.count(), 2);
        // Liberties: 0, 3, N + 1, N + 2
        assert_eq!(chain.liberties.count(), 4);
        assert!(chain.liberties.contains(0));
        assert!(chain.liberties.contains(N + 2));
    }

    #[test]
    fn test_opposing_stones_block_liberties() {
        let mut position = empty_position();
        position[BLACK].insert(0);
        position[WHITE].insert(1);

        let chain = Chain::resolve(&position, BLACK, 0);
        assert_eq!(chain.stones.count(), 1);
        assert_eq!(chain.liberties.count(), 1);
        assert!(chain.is_in_atari());
        assert!(chain.liberties.contains(N));
    }

    #[test]
    fn test_hypothetical_placement() {
        let mut position = empty_position();
        position[BLACK].insert(1);

        // Point 0 is empty; resolve as if black had just played there.
        let chain = Chain::resolve(&position, BLACK, 0);
        assert_eq!(chain.stones.count(), 2);
        assert!(chain.stones.contains(0));
        assert!(!position[BLACK].contains(0));
    }

    #[test]
    fn test_surrounded_corner_has_no_liberties() {
        let mut position = empty_position();
        position[WHITE].insert(1);
        position[WHITE].insert(N);

        let chain = Chain::resolve(&position, BLACK, 0);
        assert_eq!(chain.liberties.count(), 0);
    }
}
