//! GameView: maps a core game snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). Layout and glyph choices can be unit-tested
//! without touching a terminal.

use crate::core::{shape, GameSnapshot};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, CELL_H, CELL_W};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders a [`GameSnapshot`] into a framebuffer: bordered playfield with the
/// locked stack and falling piece, a side panel, and the game-over overlay.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: CELL_W,
            cell_h: CELL_H,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot into a fresh framebuffer sized to the viewport.
    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let well = CellStyle {
            fg: Rgb::new(70, 70, 80),
            bg: Rgb::new(16, 16, 20),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        // Empty playfield, one grid dot per board cell.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well);
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                self.fill_cell_rect(&mut fb, start_x, start_y, x, y, '·', well);
            }
        }

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked stack.
        for (y, row) in snapshot.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(kind) = cell {
                    let style = CellStyle {
                        fg: shape::color(*kind).into(),
                        bg: Rgb::new(16, 16, 20),
                        bold: false,
                    };
                    self.fill_cell_rect(&mut fb, start_x, start_y, x as u16, y as u16, '█', style);
                }
            }
        }

        // Falling piece, drawn over the stack.
        if let Some(active) = &snapshot.active {
            let style = CellStyle {
                fg: shape::color(active.kind).into(),
                bg: Rgb::new(16, 16, 20),
                bold: true,
            };
            for &(x, y) in &active.cells {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.fill_cell_rect(&mut fb, start_x, start_y, x as u16, y as u16, '█', style);
                }
            }
        }

        self.draw_side_panel(&mut fb, snapshot, viewport, start_x, start_y, frame_w);

        if snapshot.game_over {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = CellStyle {
            fg: Rgb::new(160, 160, 160),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let mut y = start_y.saturating_add(1);
        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &snapshot.lines.to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        let keys = [
            "← → move",
            "↑   rotate",
            "↓   drop",
            "spc hard drop",
            "r   restart",
            "q   quit",
        ];
        for line in keys {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, value);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let banner = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let hint = CellStyle {
            fg: Rgb::new(160, 160, 160),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let mid_y = start_y.saturating_add(frame_h / 2);
        self.put_centered(fb, start_x, mid_y.saturating_sub(1), frame_w, "GAME OVER", banner);
        self.put_centered(fb, start_x, mid_y.saturating_add(1), frame_w, "r to restart", hint);
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        y: u16,
        frame_w: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}
