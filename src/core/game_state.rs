//! Game state module - the command-driven engine
//!
//! Ties board, piece, and piece source together: position validity, locking,
//! line clears, the timed auto-drop, and game-over detection. The engine is a
//! two-state machine (falling piece / game over) driven by discrete commands
//! and caller-supplied timestamps; it performs no I/O of its own.

use crate::core::{ActiveSnapshot, Board, GameSnapshot, Piece, PieceSource, RandomSource};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomSource> {
    board: Board,
    piece: Piece,
    source: S,
    drop_interval_ms: u64,
    last_drop_ms: u64,
    lines: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game drawing pieces from a seeded uniform source
    pub fn new(seed: u32) -> Self {
        Self::with_source(RandomSource::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game drawing pieces from the given source
    pub fn with_source(mut source: S) -> Self {
        let piece = Piece::new(source.next_kind());
        Self {
            board: Board::new(),
            piece,
            source,
            drop_interval_ms: DROP_INTERVAL_MS,
            last_drop_ms: 0,
            lines: 0,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Whether every cell of `piece` shifted by (dx, dy) lands on a legal
    /// position: column within the board, row below the bottom edge never,
    /// and no overlap with locked cells. Rows above the top edge are legal
    /// territory - only the lock pass rejects them.
    pub fn is_valid_position(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        piece.occupied_cells().into_iter().all(|(x, y)| {
            let nx = i32::from(x) + i32::from(dx);
            let ny = i32::from(y) + i32::from(dy);
            if nx < 0 || nx >= i32::from(BOARD_WIDTH) || ny >= i32::from(BOARD_HEIGHT) {
                return false;
            }
            ny < 0 || !self.board.is_occupied(nx as i8, ny as i8)
        })
    }

    /// Shift the piece horizontally; invalid shifts are silently dropped
    pub fn try_move(&mut self, dx: i8) -> bool {
        if self.game_over {
            return false;
        }
        if self.is_valid_position(&self.piece, dx, 0) {
            self.piece = self.piece.shifted(dx, 0);
            true
        } else {
            false
        }
    }

    /// Turn the piece a quarter clockwise; on failure the piece is untouched
    pub fn try_rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let candidate = self.piece.rotated_cw();
        if self.is_valid_position(&candidate, 0, 0) {
            self.piece = candidate;
            true
        } else {
            false
        }
    }

    /// One drop step: move down a row if possible, otherwise lock.
    /// Returns true while the piece keeps falling.
    pub fn soft_drop(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if self.is_valid_position(&self.piece, 0, 1) {
            self.piece = self.piece.shifted(0, 1);
            true
        } else {
            self.lock_piece();
            false
        }
    }

    /// Send the piece to the floor and lock it.
    /// Runs synchronously; callers never observe an intermediate position.
    pub fn hard_drop(&mut self) {
        while self.soft_drop() {}
    }

    /// Commit the piece into the grid, clear full rows, spawn the next piece.
    ///
    /// A piece locked with any cell above the top row ends the game before
    /// anything is written. The game also ends when the next piece has no
    /// room to spawn.
    fn lock_piece(&mut self) {
        let cells = self.piece.occupied_cells();

        if cells.iter().any(|&(_, y)| y < 0) {
            self.game_over = true;
            return;
        }

        let kind = self.piece.kind();
        for (x, y) in cells {
            self.board.set(x, y, Some(kind));
        }
        self.lines += self.board.clear_full_rows() as u32;

        let next = Piece::new(self.source.next_kind());
        if !self.is_valid_position(&next, 0, 0) {
            self.game_over = true;
        }
        self.piece = next;
    }

    /// Timed auto-drop: one drop step once the interval has elapsed.
    /// Returns true if the step ran.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.game_over {
            return false;
        }
        if now_ms.saturating_sub(self.last_drop_ms) > self.drop_interval_ms {
            self.soft_drop();
            self.last_drop_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Apply a game command; returns whether the state changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.try_move(-1),
            GameAction::MoveRight => self.try_move(1),
            GameAction::RotateCw => self.try_rotate(),
            GameAction::SoftDrop => {
                self.soft_drop();
                true
            }
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Start over: empty grid, fresh piece, drop timer re-armed at `now_ms`.
    /// The piece source keeps its sequence. This is the one transition a
    /// finished game accepts.
    pub fn reset(&mut self, now_ms: u64) {
        self.board.clear();
        self.piece = Piece::new(self.source.next_kind());
        self.last_drop_ms = now_ms;
        self.lines = 0;
        self.game_over = false;
    }

    /// Read-only render snapshot of the current state
    pub fn snapshot(&self) -> GameSnapshot {
        let mut board = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (row, out) in self.board.rows().zip(board.iter_mut()) {
            out.copy_from_slice(row);
        }
        GameSnapshot {
            board,
            active: (!self.game_over).then(|| ActiveSnapshot::from(&self.piece)),
            lines: self.lines,
            game_over: self.game_over,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
