//! Move legality, execution, and search history.
//!
//! [`GoGame`] is the mutable engine a search driver recurses over: it
//! answers legality questions (occupancy, ko, suicide), applies and
//! retracts moves, and keeps a full per-ply history so retraction is a
//! plain snapshot restore. The position hash is maintained incrementally
//! on every placement, capture, and turn switch, so `make_move` and
//! `unmake_move` cost O(captured stones + 1) rather than O(board size).
//!
//! Moves handed to [`GoGame::make_move`] must have been approved by
//! [`GoGame::is_legal`] for the current position; that contract is not
//! re-checked on the hot path.

use crate::bits::Bitset;
use crate::board::GoBoard;
use crate::chain::Chain;
use crate::constants::{
    BITSET_WORDS, BLACK, CAPACITY_INCREMENT, DEFAULT_CAPACITY, DEFAULT_KOMI, DRAW, DRAW_SCORE,
    FORFEIT_MOVE, INFINITY_SCORE, MAX_CAPACITY, NORTH, NULL_MOVE, PIECE_COUNT, SOUTH, WHITE,
};
use crate::points::neighbors;
use crate::score::{AreaScorer, Scorer};
use crate::zobrist::ZobristHash;

/// Words per history snapshot: both color bitsets.
const SNAPSHOT_WORDS: usize = BITSET_WORDS << 1;

/// A player identity with its stone color and reported turn value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    /// First player, plays black.
    South,
    /// Second player, plays white.
    North,
}

impl Player {
    /// The bitset index of this player's stones.
    #[inline]
    pub fn color(self) -> usize {
        match self {
            Player::South => BLACK,
            Player::North => WHITE,
        }
    }

    /// The public turn identifier: `SOUTH` or `NORTH`.
    #[inline]
    pub fn turn(self) -> i32 {
        match self {
            Player::South => SOUTH,
            Player::North => NORTH,
        }
    }

    /// The opposing player.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Player::South => Player::North,
            Player::North => Player::South,
        }
    }

    fn from_turn(turn: i32) -> Self {
        if turn == SOUTH {
            Player::South
        } else {
            Player::North
        }
    }
}

/// A Go game between two players.
pub struct GoGame {
    /// Start position and turn.
    board: GoBoard,
    /// Player to move.
    player: Player,
    /// Current position bitsets.
    state: [Bitset; PIECE_COUNT],
    /// Current position hash.
    hash: u64,
    /// Last move played, `NULL_MOVE` on the start position.
    mv: usize,
    /// Ply index; `-1` means no moves played.
    index: isize,
    /// Current move generation cursor.
    cursor: usize,
    /// Current illegal ko move.
    kopoint: usize,
    /// Compensation score for white.
    komi: i32,
    /// Number of plies history can hold.
    capacity: usize,
    /// Move history (pre-move last move, per ply).
    moves: Vec<usize>,
    /// Hash code history.
    hashes: Vec<u64>,
    /// Move generation cursor history.
    cursors: Vec<usize>,
    /// Ko point history.
    kopoints: Vec<usize>,
    /// Position snapshot arena, `SNAPSHOT_WORDS` words per ply.
    states: Vec<u64>,
    /// Hash code generator.
    hasher: ZobristHash,
    /// Evaluation function.
    scorer: AreaScorer,
}

impl GoGame {
    /// A new game on the empty start position.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A new game with an explicit initial history capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_CAPACITY);
        let mut game = Self {
            board: GoBoard::new(),
            player: Player::South,
            state: [Bitset::new(), Bitset::new()],
            hash: 0,
            mv: NULL_MOVE,
            index: -1,
            cursor: NULL_MOVE,
            kopoint: NULL_MOVE,
            komi: DEFAULT_KOMI,
            capacity,
            moves: vec![NULL_MOVE; capacity],
            hashes: vec![0; capacity],
            cursors: vec![NULL_MOVE; capacity],
            kopoints: vec![NULL_MOVE; capacity],
            states: vec![0; capacity * SNAPSHOT_WORDS],
            hasher: ZobristHash::new(),
            scorer: AreaScorer,
        };
        game.set_board(GoBoard::new());
        game
    }

    /// Restart the game from the given board, discarding all history.
    pub fn set_board(&mut self, board: GoBoard) {
        self.index = -1;
        self.mv = NULL_MOVE;
        self.kopoint = board.kopoint();
        self.state = board.position();
        self.player = Player::from_turn(board.turn());
        self.board = board;
        self.hash = self.compute_hash();
        self.reset_cursor();
    }

    /// The board this game started from.
    pub fn board(&self) -> &GoBoard {
        &self.board
    }

    /// Export the current position and turn as a board snapshot.
    pub fn to_board(&self) -> GoBoard {
        GoBoard::with_position(self.state, self.turn())
    }

    /// Side to move: `SOUTH` or `NORTH`.
    #[inline]
    pub fn turn(&self) -> i32 {
        self.player.turn()
    }

    /// Number of plies played so far.
    pub fn length(&self) -> usize {
        (1 + self.index) as usize
    }

    /// Current position hash.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Last move played, `NULL_MOVE` when none has been.
    #[inline]
    pub fn last_move(&self) -> usize {
        self.mv
    }

    /// Set the compensation score granted to white.
    pub fn set_komi_score(&mut self, komi: i32) {
        self.komi = komi;
    }

    /// The stones of one color on the current position.
    #[inline]
    pub fn state(&self, color: usize) -> &Bitset {
        &self.state[color]
    }

    // =========================================================================
    // Legality
    // =========================================================================

    /// Check if a move can be played on the current position.
    pub fn is_legal(&self, mv: usize) -> bool {
        if self.is_forfeit(mv) {
            return true;
        }

        if self.is_ko_point(mv) || !self.is_empty_point(mv) {
            return false;
        }

        !self.is_suicide(self.player.color(), mv)
    }

    /// Check if it is a forfeit move identifier.
    #[inline]
    pub fn is_forfeit(&self, mv: usize) -> bool {
        mv == FORFEIT_MOVE
    }

    /// Check if a move targets the current ko point.
    #[inline]
    pub fn is_ko_point(&self, mv: usize) -> bool {
        mv == self.kopoint
    }

    /// Check if an intersection does not contain any stones.
    #[inline]
    pub fn is_empty_point(&self, point: usize) -> bool {
        !self.state[BLACK].contains(point) && !self.state[WHITE].contains(point)
    }

    /// Check if a stone would be captured immediately if placed on a
    /// point: the move captures no rival stones and the chain of the
    /// placed stone would have no liberties.
    fn is_suicide(&self, color: usize, point: usize) -> bool {
        let chain = Chain::resolve(&self.state, color, point);

        if chain.liberties.count() != 0 {
            return false;
        }

        for &neighbor in neighbors(point) {
            if self.state[color ^ 1].contains(neighbor)
                && Chain::resolve(&self.state, color ^ 1, neighbor).is_in_atari()
            {
                return false;
            }
        }

        true
    }

    // =========================================================================
    // Termination and outcome
    // =========================================================================

    /// Check if the game has ended: two consecutive passes, or a repeated
    /// position hash.
    pub fn has_ended(&self) -> bool {
        if self.index < 0 {
            return false;
        }

        if self.is_forfeit(self.mv) && self.is_forfeit(self.moves[self.index as usize]) {
            return true;
        }

        self.is_repetition()
    }

    /// Check if the current hash occurred before. Entries that recorded a
    /// forfeit as their previous move are skipped.
    fn is_repetition(&self) -> bool {
        for n in (0..self.index as usize).rev() {
            if self.moves[n] != FORFEIT_MOVE && self.hashes[n] == self.hash {
                return true;
            }
        }

        false
    }

    /// Turn identifier of the winning player, or `DRAW`.
    pub fn winner(&self) -> i32 {
        match self.outcome() {
            INFINITY_SCORE => SOUTH,
            score if score == -INFINITY_SCORE => NORTH,
            _ => DRAW,
        }
    }

    /// Map the final score to a win, loss, or draw value.
    pub fn outcome(&self) -> i32 {
        let score = self.score();
        if score < DRAW_SCORE {
            return -INFINITY_SCORE;
        }
        if score > DRAW_SCORE {
            return INFINITY_SCORE;
        }
        DRAW_SCORE
    }

    /// The current area score minus komi; positive favors south.
    pub fn score(&self) -> i32 {
        self.scorer.evaluate(self) - self.komi
    }

    /// Upper bound of every reachable score.
    pub fn infinity(&self) -> i32 {
        INFINITY_SCORE
    }

    // =========================================================================
    // Move generation
    // =========================================================================

    /// Current move generation cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Overwrite the move generation cursor.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    /// Rewind move generation to the first candidate.
    pub fn reset_cursor(&mut self) {
        self.cursor = NULL_MOVE;
    }

    /// Next legal move for the player to move, or `NULL_MOVE` when the
    /// generator is exhausted. The forfeit move is produced last.
    pub fn next_move(&mut self) -> usize {
        while self.cursor != FORFEIT_MOVE {
            self.cursor = match self.cursor {
                NULL_MOVE => 0,
                cursor => cursor + 1,
            };

            if self.is_legal(self.cursor) {
                return self.cursor;
            }
        }

        NULL_MOVE
    }

    // =========================================================================
    // Move execution
    // =========================================================================

    /// Play a move on the current position.
    ///
    /// The move must have been approved by [`GoGame::is_legal`] for this
    /// exact position; passing anything else is a caller bug.
    pub fn make_move(&mut self, mv: usize) {
        self.push_state();
        self.move_pieces(mv);
        self.player = self.player.flip();
        self.mv = mv;
        self.reset_cursor();
    }

    /// Retract the last played move.
    pub fn unmake_move(&mut self) {
        self.pop_state(self.index as usize);
        self.player = self.player.flip();
        self.index -= 1;
    }

    /// Retract the last `length` moves in one step. Each history record
    /// is a full snapshot, so only the target record is restored.
    pub fn unmake_moves(&mut self, length: usize) {
        if length > 0 {
            self.index -= length as isize;
            if length % 2 != 0 {
                self.player = self.player.flip();
            }
            self.pop_state((1 + self.index) as usize);
        }
    }

    /// Performs a move on the current position.
    fn move_pieces(&mut self, mv: usize) {
        let player = self.player;
        let rival = player.flip();

        // Toggle the hash sign

        self.hash ^= self.hasher.sign(player.color());
        self.hash ^= self.hasher.sign(rival.color());

        // Player forfeits the turn

        if mv == FORFEIT_MOVE {
            return;
        }

        // Remove captures and place a new stone

        let mut captures = 0;

        for &point in neighbors(mv) {
            if self.state[rival.color()].contains(point) {
                let chain = Chain::resolve(&self.state, rival.color(), point);

                if chain.is_in_atari() {
                    for stone in chain.stones.iter_ones() {
                        self.capture(stone, rival.color());
                    }
                    self.kopoint = point;
                    captures += 1;
                }
            }
        }

        self.place(mv, player.color());

        // Ko only applies to single-stone recaptures

        if captures != 1 {
            self.kopoint = NULL_MOVE;
        }
    }

    /// Adds a stone of the given color to a point.
    fn place(&mut self, point: usize, color: usize) {
        self.state[color].insert(point);
        self.hash = self.hasher.insert(self.hash, point, color);
    }

    /// Removes a stone of the given color from a point.
    fn capture(&mut self, point: usize, color: usize) {
        self.state[color].toggle(point);
        self.hash = self.hasher.remove(self.hash, point, color);
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Store the game state on the history.
    fn push_state(&mut self) {
        self.ensure_capacity((2 + self.index) as usize);
        self.index += 1;

        let index = self.index as usize;
        self.moves[index] = self.mv;
        self.hashes[index] = self.hash;
        self.cursors[index] = self.cursor;
        self.kopoints[index] = self.kopoint;

        let offset = index * SNAPSHOT_WORDS;
        self.state[BLACK].copy_to(&mut self.states, offset);
        self.state[WHITE].copy_to(&mut self.states, offset + BITSET_WORDS);
    }

    /// Retrieve a game state from the history.
    fn pop_state(&mut self, index: usize) {
        let offset = index * SNAPSHOT_WORDS;
        self.state[BLACK].copy_from(&self.states, offset);
        self.state[WHITE].copy_from(&self.states, offset + BITSET_WORDS);

        self.kopoint = self.kopoints[index];
        self.cursor = self.cursors[index];
        self.hash = self.hashes[index];
        self.mv = self.moves[index];
    }

    /// Hash the current position from scratch. Used once per
    /// [`GoGame::set_board`]; all later updates are incremental.
    fn compute_hash(&self) -> u64 {
        self.hasher.compute(&self.state, self.player.color())
    }

    /// Grow the history storage to hold at least `size` plies.
    ///
    /// Growth adds at least `CAPACITY_INCREMENT` plies and never exceeds
    /// `MAX_CAPACITY`; running into that cap is a fatal configuration
    /// error, the game cannot safely keep recording history.
    pub fn ensure_capacity(&mut self, size: usize) {
        if size > self.capacity {
            let grown = size.max(self.capacity + CAPACITY_INCREMENT).min(MAX_CAPACITY);
            assert!(grown >= size, "history capacity exhausted at {MAX_CAPACITY} plies");

            self.moves.resize(grown, NULL_MOVE);
            self.hashes.resize(grown, 0);
            self.cursors.resize(grown, NULL_MOVE);
            self.kopoints.resize(grown, NULL_MOVE);
            self.states.resize(grown * SNAPSHOT_WORDS, 0);
            self.capacity = grown;
        }
    }
}

impl Default for GoGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position() {
        let game = GoGame::new();
        assert_eq!(game.turn(), SOUTH);
        assert_eq!(game.length(), 0);
        assert!(!game.has_ended());
        assert_eq!(game.state(BLACK).count(), 0);
        assert_eq!(game.state(WHITE).count(), 0);
    }

    #[test]
    fn test_make_move_places_stone() {
        let mut game = GoGame::new();
        assert!(game.is_legal(0));
        game.make_move(0);
        assert!(game.state(BLACK).contains(0));
        assert_eq!(game.turn(), NORTH);
        assert_eq!(game.length(), 1);
        assert!(!game.is_legal(0));
    }

    #[test]
    fn test_unmake_restores_everything() {
        let mut game = GoGame::new();
        game.make_move(3);
        game.make_move(4);

        game.next_move();
        game.next_move();
        let mv = game.next_move();

        let hash = game.hash();
        let cursor = game.cursor();
        let state = [*game.state(BLACK), *game.state(WHITE)];
        let turn = game.turn();

        game.make_move(mv);
        game.unmake_move();

        assert_eq!(game.hash(), hash);
        assert_eq!(game.cursor(), cursor);
        assert_eq!(*game.state(BLACK), state[BLACK]);
        assert_eq!(*game.state(WHITE), state[WHITE]);
        assert_eq!(game.turn(), turn);
    }

    #[test]
    fn test_unmake_moves_bulk() {
        let mut a = GoGame::new();
        let mut b = GoGame::new();
        for mv in [0, 9, 20, 33, 41] {
            a.make_move(mv);
            b.make_move(mv);
        }

        a.unmake_move();
        a.unmake_move();
        a.unmake_move();
        b.unmake_moves(3);

        assert_eq!(a.hash(), b.hash());
        assert_eq!(a.turn(), b.turn());
        assert_eq!(a.length(), b.length());
        assert_eq!(a.state(BLACK), b.state(BLACK));
        assert_eq!(a.state(WHITE), b.state(WHITE));
    }

    #[test]
    fn test_hash_toggles_on_pass() {
        let mut game = GoGame::new();
        let hash = game.hash();
        game.make_move(FORFEIT_MOVE);
        assert_ne!(game.hash(), hash);
        game.unmake_move();
        assert_eq!(game.hash(), hash);
    }

    #[test]
    fn test_double_pass_ends_game() {
        let mut game = GoGame::new();
        game.make_move(FORFEIT_MOVE);
        assert!(!game.has_ended());
        game.make_move(FORFEIT_MOVE);
        assert!(game.has_ended());
    }

    #[test]
    fn test_next_move_enumerates_all_points() {
        let mut game = GoGame::new();
        let mut count = 0;
        let mut last = NULL_MOVE;
        loop {
            let mv = game.next_move();
            if mv == NULL_MOVE {
                break;
            }
            last = mv;
            count += 1;
        }
        // Empty board: every point plus the forfeit move is legal
        assert_eq!(count, FORFEIT_MOVE + 1);
        assert_eq!(last, FORFEIT_MOVE);
        assert_eq!(game.next_move(), NULL_MOVE);
    }

    #[test]
    fn test_state_disjointness() {
        let mut game = GoGame::new();
        for _ in 0..40 {
            let mv = game.next_move();
            if mv == NULL_MOVE || game.has_ended() {
                break;
            }
            game.make_move(mv);
            let both: Vec<usize> = game
                .state(BLACK)
                .iter_ones()
                .filter(|&p| game.state(WHITE).contains(p))
                .collect();
            assert!(both.is_empty(), "point in both colors: {both:?}");
        }
    }

    #[test]
    fn test_history_grows_past_initial_capacity() {
        let mut game = GoGame::with_capacity(2);
        for mv in [0, 1, FORFEIT_MOVE, 5, 6, 7] {
            game.make_move(mv);
        }
        assert_eq!(game.length(), 6);
        game.unmake_moves(6);
        assert_eq!(game.length(), 0);
        assert_eq!(game.turn(), SOUTH);
    }
}
