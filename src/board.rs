//! The 4x4 fusion board.
//!
//! Cells are stored row-major in a flat array: index `y * BOARD_SIZE + x`,
//! with y = 0 as the top row.

use std::fmt;

use serde::Serialize;

use crate::color::Color;
use crate::error::BoardError;

/// Board width and height.
pub const BOARD_SIZE: usize = 4;

/// Total cells on the board.
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Converts (x, y) coordinates to a linear cell index.
#[inline(always)]
pub const fn coord_to_idx(x: usize, y: usize) -> usize {
    y * BOARD_SIZE + x
}

/// Converts a linear cell index to (x, y) coordinates.
#[inline(always)]
pub const fn idx_to_coord(cell_index: usize) -> (usize, usize) {
    (cell_index % BOARD_SIZE, cell_index / BOARD_SIZE)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    cells: [Color; BOARD_CELLS],
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [Color::Empty; BOARD_CELLS],
        }
    }

    pub const fn from_colors(cells: [Color; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    /// Decodes a board snapshot read from the contract, one color code per cell.
    pub fn from_codes(codes: &[u8]) -> Result<Self, BoardError> {
        if codes.len() != BOARD_CELLS {
            return Err(BoardError::WrongLength {
                expected: BOARD_CELLS,
                actual: codes.len(),
            });
        }

        let mut cells = [Color::Empty; BOARD_CELLS];
        for (index, (&code, cell)) in codes.iter().zip(cells.iter_mut()).enumerate() {
            *cell = Color::from_code(code).ok_or(BoardError::UnknownColor { index, code })?;
        }
        Ok(Self { cells })
    }

    /// Color at (x, y), or `None` off the board.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        (x < BOARD_SIZE && y < BOARD_SIZE).then(|| self.cells[coord_to_idx(x, y)])
    }

    pub fn cells(&self) -> &[Color; BOARD_CELLS] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&color| color != Color::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.filled() == BOARD_CELLS
    }

    /// True when every cell equals the target's.
    pub fn matches(&self, target: &Board) -> bool {
        self.cells == target.cells
    }

    /// Coordinates of cells that differ from the target, in index order.
    pub fn mismatches(&self, target: &Board) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .zip(target.cells.iter())
            .enumerate()
            .filter(|(_, (current, wanted))| current != wanted)
            .map(|(index, _)| idx_to_coord(index))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            for color in row {
                write!(f, "{color}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
