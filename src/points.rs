//! Precomputed orthogonal neighbor table.
//!
//! Every component that walks the board (chain resolution, capture,
//! territory fill) shares this one adjacency relation. The table is built
//! at compile time and never changes: for each point it stores up to four
//! orthogonal neighbors, fewer at edges and corners.

use crate::constants::{BOARD_SIZE, N};

/// Neighbor points and per-point neighbor counts, row-major board layout.
static TABLE: ([[usize; 4]; BOARD_SIZE], [usize; BOARD_SIZE]) = build_table();

/// The orthogonal neighbors of a point, in increasing order.
#[inline]
pub fn neighbors(point: usize) -> &'static [usize] {
    &TABLE.0[point][..TABLE.1[point]]
}

const fn build_table() -> ([[usize; 4]; BOARD_SIZE], [usize; BOARD_SIZE]) {
    let mut table = [[0usize; 4]; BOARD_SIZE];
    let mut counts = [0usize; BOARD_SIZE];

    let mut point = 0;
    while point < BOARD_SIZE {
        let row = point / N;
        let col = point % N;
        let mut k = 0;

        if row > 0 {
            table[point][k] = point - N;
            k += 1;
        }
        if col > 0 {
            table[point][k] = point - 1;
            k += 1;
        }
        if col + 1 < N {
            table[point][k] = point + 1;
            k += 1;
        }
        if row + 1 < N {
            table[point][k] = point + N;
            k += 1;
        }

        counts[point] = k;
        point += 1;
    }

    (table, counts)
}
