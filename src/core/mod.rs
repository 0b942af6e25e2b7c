//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or I/O, which keeps it
//! deterministic (same seed, same game) and testable without a terminal.

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod shape;
pub mod snapshot;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use piece::Piece;
pub use rng::{PieceSource, RandomSource, ScriptedSource, SimpleRng};
pub use shape::{base_matrix, color, PieceMatrix};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
