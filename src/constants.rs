//! Constants for board geometry, sentinels, and scoring.
//!
//! The board is a flat array of `N * N` intersections indexed row by row.
//! All components share these sentinels: a move is either a point index,
//! the pass marker `FORFEIT_MOVE`, or the out-of-range `NULL_MOVE`.
//!
//! # Board Size Configuration
//!
//! The board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//! - `board19x19`: 19x19 board
//!
//! To compile for a specific board size:
//! ```sh
//! cargo build                                               # 9x9 (default)
//! cargo build --no-default-features --features board19x19   # 19x19
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). Standard Go sizes are 9, 13, or 19.
#[cfg(feature = "board9x9")]
pub const N: usize = 9;

#[cfg(feature = "board13x13")]
pub const N: usize = 13;

#[cfg(feature = "board19x19")]
pub const N: usize = 19;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(any(
    all(feature = "board9x9", feature = "board13x13"),
    all(feature = "board9x9", feature = "board19x19"),
    all(feature = "board13x13", feature = "board19x19"),
))]
compile_error!("Cannot enable more than one board size feature at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13", feature = "board19x19")))]
compile_error!(
    "Must enable exactly one board size feature: 'board9x9', 'board13x13' or 'board19x19'"
);

/// Number of intersections on the board.
pub const BOARD_SIZE: usize = N * N;

/// Number of 64-bit words needed to hold one bit per intersection.
pub const BITSET_WORDS: usize = BOARD_SIZE.div_ceil(64);

/// Ply cap for self-play games (three times the board area allows for
/// captures and replays).
pub const MAX_GAME_LEN: usize = BOARD_SIZE * 3;

// =============================================================================
// Special Move Values
// =============================================================================

/// Pass move marker (first index past the board).
pub const FORFEIT_MOVE: usize = BOARD_SIZE;

/// No-move marker (cursor not advanced, no ko point, no last move).
pub const NULL_MOVE: usize = usize::MAX;

// =============================================================================
// Colors and Turns
// =============================================================================

/// Index of the black stone bitset.
pub const BLACK: usize = 0;

/// Index of the white stone bitset.
pub const WHITE: usize = 1;

/// Number of stone colors.
pub const PIECE_COUNT: usize = 2;

/// Turn identifier of the first player (plays black).
pub const SOUTH: i32 = 1;

/// Turn identifier of the second player (plays white).
pub const NORTH: i32 = -1;

/// Neither player; reported by `winner` on a drawn game.
pub const DRAW: i32 = 0;

// =============================================================================
// Scores
// =============================================================================

/// Score granted per stone or territory point. Doubling the natural
/// count lets half-point komi values stay integral.
pub const STONE_SCORE: i32 = 2;

/// Default compensation for white: 7.5 points in `STONE_SCORE` units.
pub const DEFAULT_KOMI: i32 = 15;

/// Score of an exactly drawn game.
pub const DRAW_SCORE: i32 = 0;

/// Score of a won game; bounds every reachable area score.
pub const INFINITY_SCORE: i32 = 1000;

// =============================================================================
// History Storage
// =============================================================================

/// Initial number of plies a game allocates history for.
pub const DEFAULT_CAPACITY: usize = 128;

/// History capacity increases by at least this value each time it grows.
pub const CAPACITY_INCREMENT: usize = 128;

/// Maximum number of plies a game can record. Keeps every snapshot
/// word index within `i32` range.
pub const MAX_CAPACITY: usize = i32::MAX as usize / (BITSET_WORDS << 1);

// =============================================================================
// Hashing
// =============================================================================

/// Seed for the Zobrist key table; fixed so hashes are reproducible.
pub const RANDOM_SEED: u64 = 0x6622_25E2_B985_A7FD;
