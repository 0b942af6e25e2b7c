use crate::core::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: [(i8, i8); 4],
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        let mut cells = [(0, 0); 4];
        for (slot, cell) in cells.iter_mut().zip(piece.occupied_cells()) {
            *slot = cell;
        }
        Self {
            kind: piece.kind(),
            cells,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub lines: u32,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            lines: 0,
            game_over: false,
        }
    }
}
