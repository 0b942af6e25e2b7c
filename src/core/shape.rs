//! Shape module - tetromino base matrices, rotation, and display colors
//!
//! Every orientation is an explicit 2-D occupancy matrix. Rotation rebuilds
//! the matrix (reverse the row order, then transpose) instead of indexing
//! pre-baked orientation tables, so width and height travel with the data.

use crate::types::PieceKind;

/// Maximum matrix extent (the I piece spans 4 cells)
pub const MATRIX_SIZE: usize = 4;

/// Owned 2-D occupancy matrix with explicit dimensions.
///
/// Storage is a fixed 4x4 array; only the `width x height` corner is
/// meaningful. Dimensions swap on every quarter turn (the I piece alternates
/// between 4x1 and 1x4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceMatrix {
    cells: [[bool; MATRIX_SIZE]; MATRIX_SIZE],
    width: u8,
    height: u8,
}

impl PieceMatrix {
    /// Build a matrix from `#`/`.` pattern rows
    const fn from_pattern(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        let mut cells = [[false; MATRIX_SIZE]; MATRIX_SIZE];
        let mut y = 0;
        while y < height {
            let row = rows[y].as_bytes();
            let mut x = 0;
            while x < width {
                if row[x] == b'#' {
                    cells[y][x] = true;
                }
                x += 1;
            }
            y += 1;
        }
        Self {
            cells,
            width: width as u8,
            height: height as u8,
        }
    }

    /// Width in cells of the current orientation
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height in cells of the current orientation
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at (column, row) is occupied
    pub fn is_set(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.cells[y as usize][x as usize]
    }

    /// Number of occupied cells
    pub fn block_count(&self) -> usize {
        let mut count = 0;
        for row in &self.cells {
            for &set in row {
                if set {
                    count += 1;
                }
            }
        }
        count
    }

    /// The matrix turned 90 degrees clockwise.
    ///
    /// Row `i`, column `j` of the result is row `height - 1 - j`, column `i`
    /// of the original; width and height swap.
    #[must_use]
    pub fn rotated_cw(&self) -> Self {
        let mut out = Self {
            cells: [[false; MATRIX_SIZE]; MATRIX_SIZE],
            width: self.height,
            height: self.width,
        };
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.cells[y][x] {
                    out.cells[x][self.height as usize - 1 - y] = true;
                }
            }
        }
        out
    }
}

/// Base (spawn) orientation for a piece kind
pub const fn base_matrix(kind: PieceKind) -> PieceMatrix {
    match kind {
        PieceKind::I => PieceMatrix::from_pattern(&["####"]),
        PieceKind::O => PieceMatrix::from_pattern(&["##", "##"]),
        PieceKind::T => PieceMatrix::from_pattern(&[".#.", "###"]),
        PieceKind::S => PieceMatrix::from_pattern(&[".##", "##."]),
        PieceKind::Z => PieceMatrix::from_pattern(&["##.", ".##"]),
        PieceKind::J => PieceMatrix::from_pattern(&["#..", "###"]),
        PieceKind::L => PieceMatrix::from_pattern(&["..#", "###"]),
    }
}

/// Display color for a piece kind (r, g, b)
pub const fn color(kind: PieceKind) -> (u8, u8, u8) {
    match kind {
        PieceKind::I => (0, 255, 255),  // cyan
        PieceKind::O => (255, 255, 0),  // yellow
        PieceKind::T => (128, 0, 128),  // purple
        PieceKind::S => (0, 255, 0),    // green
        PieceKind::Z => (255, 0, 0),    // red
        PieceKind::J => (0, 0, 255),    // blue
        PieceKind::L => (255, 165, 0),  // orange
    }
}
