//! Start positions and board notation.
//!
//! A [`GoBoard`] is an immutable snapshot: the two color bitsets plus the
//! side to move. The game engine starts from one and exports one back out
//! with [`crate::game::GoGame::to_board`]; it trusts the snapshot beyond
//! the disjointness of the two color sets. This module also owns the text
//! side of things: coordinate parsing ("D4", "pass"), formatting, and a
//! printable grid.

use std::fmt;

use anyhow::{Result, bail};

use crate::bits::Bitset;
use crate::constants::{BLACK, FORFEIT_MOVE, N, NULL_MOVE, PIECE_COUNT, SOUTH, WHITE};

/// An immutable Go position with a side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoBoard {
    position: [Bitset; PIECE_COUNT],
    turn: i32,
}

impl GoBoard {
    /// The empty starting board, black (south) to move.
    pub fn new() -> Self {
        Self {
            position: [Bitset::new(), Bitset::new()],
            turn: SOUTH,
        }
    }

    /// A board holding the given position and side to move.
    ///
    /// The two color sets are trusted to be disjoint.
    pub fn with_position(position: [Bitset; PIECE_COUNT], turn: i32) -> Self {
        Self { position, turn }
    }

    /// The stone bitsets, black first.
    pub fn position(&self) -> [Bitset; PIECE_COUNT] {
        self.position
    }

    /// Side to move: `SOUTH` or `NORTH`.
    pub fn turn(&self) -> i32 {
        self.turn
    }

    /// The forbidden recapture point. A standalone snapshot carries no
    /// pending ko.
    pub fn kopoint(&self) -> usize {
        NULL_MOVE
    }
}

impl Default for GoBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a coordinate string (e.g. "D4", "pass") into a move.
///
/// Go coordinates use letters for columns, skipping `I`, and numbers
/// counted from the bottom row for rows.
///
/// # Errors
///
/// Fails on malformed input or coordinates outside the board.
pub fn parse_point(text: &str) -> Result<usize> {
    if text.eq_ignore_ascii_case("pass") {
        return Ok(FORFEIT_MOVE);
    }

    let bytes = text.as_bytes();
    if bytes.len() < 2 || !bytes[0].is_ascii_alphabetic() {
        bail!("malformed coordinate: {text}");
    }

    let col_char = bytes[0].to_ascii_uppercase();
    if col_char == b'I' {
        bail!("column letter I is not used: {text}");
    }

    let mut col = (col_char - b'A') as usize;
    if col_char > b'I' {
        col -= 1;
    }

    let row: usize = text[1..].parse()?;
    if col >= N || row < 1 || row > N {
        bail!("coordinate off the board: {text}");
    }

    Ok((N - row) * N + col)
}

/// Format a move as a coordinate string.
pub fn format_point(point: usize) -> String {
    if point >= FORFEIT_MOVE {
        return "pass".into();
    }

    let row = N - point / N;
    let col = point % N;

    // Convert column to letter, skipping 'I'
    let mut letter = (b'A' + col as u8) as char;
    if letter >= 'I' {
        letter = (letter as u8 + 1) as char;
    }

    format!("{letter}{row}")
}

impl fmt::Display for GoBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            for col in 0..N {
                let point = row * N + col;
                let ch = if self.position[BLACK].contains(point) {
                    'X'
                } else if self.position[WHITE].contains(point) {
                    'O'
                } else {
                    '.'
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
