//! Board module - the grid of locked cells
//!
//! A 10x20 playfield stored as a flat row-major array, indexed through a
//! bounds-checked helper. The board only tracks settled blocks: the falling
//! piece lives in the game state and is merged in at lock time, and the
//! placement rules (including rows above the top) belong to the engine.

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y); None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Write the cell at (x, y); false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) is within bounds and holds a locked block
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether every cell of row y is filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, shift the rows above it down, and refill the
    /// top with empty rows. Non-full rows keep their relative order.
    /// Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Compact non-full rows downward, scanning bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        // Everything above the write cursor becomes fresh empty rows
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        write_y
    }

    /// Empty the whole board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Iterate rows top to bottom as cell slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(kind));
        }
    }

    #[test]
    fn test_index_bounds() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, -1), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut board = Board::new();
        assert!(board.set(3, 5, Some(PieceKind::T)));
        assert_eq!(board.get(3, 5), Some(Some(PieceKind::T)));
        assert_eq!(board.get(3, 6), Some(None));
        assert!(!board.set(10, 5, Some(PieceKind::T)));
        assert_eq!(board.get(10, 5), None);
    }

    #[test]
    fn test_is_occupied() {
        let mut board = Board::new();
        board.set(2, 19, Some(PieceKind::L));
        assert!(board.is_occupied(2, 19));
        assert!(!board.is_occupied(3, 19));
        // Out of bounds is never occupied
        assert!(!board.is_occupied(-1, 0));
        assert!(!board.is_occupied(0, 20));
    }

    #[test]
    fn test_row_full_detection() {
        let mut board = Board::new();
        fill_row(&mut board, 19, PieceKind::I);
        assert!(board.is_row_full(19));
        assert!(!board.is_row_full(18));

        board.set(4, 19, None);
        assert!(!board.is_row_full(19));
    }

    #[test]
    fn test_clear_single_bottom_row() {
        let mut board = Board::new();
        board.set(0, 18, Some(PieceKind::S));
        fill_row(&mut board, 19, PieceKind::I);

        assert_eq!(board.clear_full_rows(), 1);

        // The survivor from row 18 dropped onto row 19
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::S)));
        assert_eq!(board.get(0, 18), Some(None));
        assert!(board.rows().next().is_some_and(|row| row.iter().all(Cell::is_none)));
    }

    #[test]
    fn test_clear_preserves_relative_order() {
        let mut board = Board::new();
        board.set(0, 15, Some(PieceKind::J));
        fill_row(&mut board, 16, PieceKind::I);
        board.set(1, 17, Some(PieceKind::L));
        fill_row(&mut board, 18, PieceKind::I);
        board.set(2, 19, Some(PieceKind::Z));

        assert_eq!(board.clear_full_rows(), 2);

        // Row 19 was below every cleared row and does not move
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::Z)));
        // Rows 15 and 17 slide down by the number of cleared rows beneath them
        assert_eq!(board.get(1, 18), Some(Some(PieceKind::L)));
        assert_eq!(board.get(0, 17), Some(Some(PieceKind::J)));
        assert_eq!(board.get(0, 15), Some(None));
        assert_eq!(board.get(1, 17), Some(None));
    }

    #[test]
    fn test_clear_four_rows_at_once() {
        let mut board = Board::new();
        for y in 16..20 {
            fill_row(&mut board, y, PieceKind::I);
        }
        board.set(5, 15, Some(PieceKind::T));

        assert_eq!(board.clear_full_rows(), 4);
        assert_eq!(board.get(5, 19), Some(Some(PieceKind::T)));
        for y in 0..19 {
            assert!(!board.is_row_full(y as usize));
            assert_eq!(board.get(5, y), Some(None), "row {}", y);
        }
    }

    #[test]
    fn test_clear_with_no_full_rows() {
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::O));
        let before = board.clone();
        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_dimensions_survive_clearing() {
        let mut board = Board::new();
        for y in 10..20 {
            fill_row(&mut board, y, PieceKind::Z);
        }
        board.clear_full_rows();
        assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
        assert!(board.rows().all(|row| row.len() == BOARD_WIDTH as usize));
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut board = Board::new();
        fill_row(&mut board, 0, PieceKind::I);
        fill_row(&mut board, 19, PieceKind::O);
        board.clear();
        assert_eq!(board, Board::new());
    }
}
