//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: [`GameView`] paints a snapshot of
//! the game into a [`FrameBuffer`], and [`TerminalRenderer`] flushes buffers
//! to the real terminal with diff-based redraws. Keeping the view pure makes
//! the whole layout testable without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
