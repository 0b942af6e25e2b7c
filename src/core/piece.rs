//! Piece module - the active falling tetromino
//!
//! A piece is a kind, the owned rotation matrix, and a (column, row) anchor
//! addressing the matrix's top-left cell in the grid. The anchor may sit
//! above the grid; only the lock pass cares about negative rows.

use arrayvec::ArrayVec;

use crate::core::shape::{base_matrix, PieceMatrix};
use crate::types::{PieceKind, BOARD_WIDTH};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    matrix: PieceMatrix,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a new piece at the spawn position: row 0, horizontally centered
    pub fn new(kind: PieceKind) -> Self {
        let matrix = base_matrix(kind);
        Self {
            kind,
            matrix,
            x: (BOARD_WIDTH / 2) as i8 - (matrix.width() / 2) as i8,
            y: 0,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn matrix(&self) -> &PieceMatrix {
        &self.matrix
    }

    /// The piece shifted by (dx, dy); no validity check
    #[must_use]
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// The piece with its matrix turned a quarter clockwise; anchor unchanged
    #[must_use]
    pub fn rotated_cw(&self) -> Self {
        Self {
            matrix: self.matrix.rotated_cw(),
            ..*self
        }
    }

    /// Absolute (column, row) grid coordinates covered by the piece
    pub fn occupied_cells(&self) -> ArrayVec<(i8, i8), 4> {
        let mut cells = ArrayVec::new();
        for my in 0..self.matrix.height() {
            for mx in 0..self.matrix.width() {
                if self.matrix.is_set(mx, my) {
                    cells.push((self.x + mx as i8, self.y + my as i8));
                }
            }
        }
        cells
    }
}
