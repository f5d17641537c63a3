//! Goban: a Go rules-and-state engine built for tree search.
//!
//! The crate keeps one mutable position, bit-packed per color, and gives a
//! search driver everything it needs to recurse over it at high frequency:
//! legality tests with ko and suicide rules, group capture through flood
//! fill, O(1)-amortized make/unmake with full snapshot history, an
//! incrementally maintained Zobrist hash for repetition detection, and an
//! area scorer for terminal evaluation.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, sentinels, and score values
//! - [`bits`] - Bit-packed point sets, the position substrate
//! - [`points`] - Precomputed orthogonal neighbor table
//! - [`zobrist`] - Incremental position hashing
//! - [`chain`] - Connected-group and liberty resolution
//! - [`board`] - Start positions, coordinates, board display
//! - [`game`] - Move legality, execution, and search history
//! - [`score`] - Area scoring
//!
//! ## Example
//!
//! ```
//! use goban::board::parse_point;
//! use goban::game::GoGame;
//!
//! let mut game = GoGame::new();
//!
//! // Play a move and take it back
//! let mv = parse_point("D4").unwrap();
//! assert!(game.is_legal(mv));
//! game.make_move(mv);
//! game.unmake_move();
//!
//! // Enumerate legal moves from the start position
//! let first = game.next_move();
//! assert!(game.is_legal(first));
//! ```

pub mod bits;
pub mod board;
pub mod chain;
pub mod constants;
pub mod game;
pub mod points;
pub mod score;
pub mod zobrist;
