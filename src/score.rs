//! Area scoring.
//!
//! Counts the stones of each color and credits every fully-enclosed empty
//! region to the single color surrounding it. Regions touched by both
//! colors, or by none, count for neither side. The evaluation is a pure
//! read-only pass over the position.

use crate::bits::Bitset;
use crate::constants::{BLACK, BOARD_SIZE, STONE_SCORE, WHITE};
use crate::game::GoGame;
use crate::points::neighbors;

/// Evaluation function contract: a signed score where positive favors
/// the first player.
pub trait Scorer<G> {
    /// Compute the score of a game position.
    fn evaluate(&self, game: &G) -> i32;
}

/// Area scorer: stones on the board plus surrounded territory.
pub struct AreaScorer;

impl Scorer<GoGame> for AreaScorer {
    /// Compute the current score of the players.
    ///
    /// This includes, for each player, the number of stones of that color
    /// plus the number of intersections on every empty area surrounded
    /// only by stones of that single color.
    fn evaluate(&self, game: &GoGame) -> i32 {
        let mut areas = Bitset::new();
        let mut black = game.state(BLACK).count() as i32;
        let mut white = game.state(WHITE).count() as i32;
        let mut empty = 0;

        for point in 0..BOARD_SIZE {
            if !areas.contains(point) && game.is_empty_point(point) {
                let counts = fill_area(game, &mut areas, point);
                let count = areas.count() as i32 - empty;
                empty += count;

                if counts[BLACK] == 0 && counts[WHITE] > 0 {
                    white += count;
                } else if counts[WHITE] == 0 && counts[BLACK] > 0 {
                    black += count;
                }
            }
        }

        STONE_SCORE * (black - white)
    }
}

/// Flood-fill one maximal region of empty intersections into `areas`,
/// counting the adjacent stones of each color. A boundary stone adjacent
/// to several region points is counted once per adjacency; only the
/// zero-or-not classification of the counts is used.
fn fill_area(game: &GoGame, areas: &mut Bitset, point: usize) -> [u32; 2] {
    let mut counts = [0u32; 2];
    let mut stack = vec![point];
    areas.insert(point);

    while let Some(point) = stack.pop() {
        for &neighbor in neighbors(point) {
            if areas.contains(neighbor) {
                continue;
            }
            if game.state(BLACK).contains(neighbor) {
                counts[BLACK] += 1;
            } else if game.state(WHITE).contains(neighbor) {
                counts[WHITE] += 1;
            } else {
                areas.insert(neighbor);
                stack.push(neighbor);
            }
        }
    }

    counts
}
