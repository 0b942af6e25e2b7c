//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Owns raw mode and the alternate screen, and redraws frames by diffing
//! against the previously flushed one so static frames cost almost nothing.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw. Useful on resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush a frame to the terminal.
    ///
    /// The first frame after `enter` or `invalidate` clears the screen and
    /// paints everything; later frames repaint only rows that changed.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let mut prev = self.last.take();
        match &prev {
            Some(p) if p.width() == fb.width() && p.height() == fb.height() => {
                self.diff_redraw(fb, p)?;
            }
            _ => self.full_redraw(fb)?,
        }

        // Keep the flushed frame around for the next diff, reusing the
        // allocation across frames.
        let store = prev.get_or_insert_with(|| FrameBuffer::new(0, 0));
        store.copy_from(fb);
        self.last = prev;
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut current: Option<CellStyle> = None;
        for y in 0..fb.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            if let Some(row) = fb.row(y) {
                self.print_cells(row, &mut current)?;
            }
        }

        self.finish_frame()
    }

    fn diff_redraw(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> Result<()> {
        let mut current: Option<CellStyle> = None;
        let mut wrote = false;

        for y in 0..next.height() {
            if let (Some(old_row), Some(new_row)) = (prev.row(y), next.row(y)) {
                // One cursor move and one span per row; unchanged cells
                // inside the span simply get repainted.
                if let Some((first, last)) = dirty_span(old_row, new_row) {
                    self.stdout.queue(cursor::MoveTo(first as u16, y))?;
                    self.print_cells(&new_row[first..=last], &mut current)?;
                    wrote = true;
                }
            }
        }

        if wrote {
            self.finish_frame()?;
        }
        Ok(())
    }

    fn print_cells(&mut self, cells: &[Cell], current: &mut Option<CellStyle>) -> Result<()> {
        for cell in cells {
            if *current != Some(cell.style) {
                self.apply_style(cell.style)?;
                *current = Some(cell.style);
            }
            self.stdout.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        // Reset first: bold would otherwise leak from the previous style.
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        Ok(())
    }

    fn finish_frame(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// First and last differing index between two rows of equal length, or
/// `None` when the rows already match.
fn dirty_span(prev: &[Cell], next: &[Cell]) -> Option<(usize, usize)> {
    let first = prev.iter().zip(next).position(|(a, b)| a != b)?;
    let last = prev.iter().zip(next).rposition(|(a, b)| a != b)?;
    Some((first, last))
}
