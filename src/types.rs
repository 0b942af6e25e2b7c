//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Frame length for the driver loop (milliseconds)
pub const TICK_MS: u64 = 16;

/// Interval between timed auto-drops (milliseconds)
pub const DROP_INTERVAL_MS: u64 = 500;

/// Playfield geometry in terminal cells (one grid cell = CELL_W x CELL_H characters)
pub const CELL_W: u16 = 2;
pub const CELL_H: u16 = 1;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Game commands accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    RotateCw,
    SoftDrop,
    HardDrop,
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
