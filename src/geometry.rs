//! 2D rotation, mirroring and normalization of piece cells.
//!
//! A flat piece has 8 orientations: 4 quarter turns, each optionally mirrored.
//! Every function here returns cells translated so the minimum x and y are zero.
//! Input cells must not carry the `Color::Empty` sentinel; that is filtered
//! out once when the piece table is loaded.

use serde::Serialize;

use crate::color::Color;

/// A unit cell of a piece, relative to the piece's local origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Cell {
    /// Unused slot marker in fixed-width piece definitions.
    pub const EMPTY: Cell = Cell::new(0, 0, Color::Empty);

    pub const fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }
}

/// Quarter-turn clockwise rotation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    pub const fn quarter_turns(self) -> u8 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    pub const fn from_quarter_turns(turns: u8) -> Option<Rotation> {
        match turns {
            0 => Some(Rotation::R0),
            1 => Some(Rotation::R90),
            2 => Some(Rotation::R180),
            3 => Some(Rotation::R270),
            _ => None,
        }
    }

    /// The next state after one more clockwise quarter turn.
    pub const fn clockwise(self) -> Rotation {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }
}

/// Orientation chosen for the currently selected piece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Transform {
    pub rotation: Rotation,
    pub flipped: bool,
}

impl Transform {
    /// All 8 rotation and mirror combinations.
    pub const ALL: [Transform; 8] = {
        let mut all = [Transform::new(Rotation::R0, false); 8];
        let mut i = 0;
        while i < 8 {
            all[i] = Transform::new(Rotation::ALL[i % 4], i >= 4);
            i += 1;
        }
        all
    };

    pub const fn new(rotation: Rotation, flipped: bool) -> Self {
        Self { rotation, flipped }
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotation = self.rotation.clockwise();
    }

    pub fn toggle_flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Back to the identity orientation, as after a placement or deselect.
    pub fn reset(&mut self) {
        *self = Transform::default();
    }

    pub fn apply(&self, cells: &[Cell]) -> Vec<Cell> {
        transform(cells, self.rotation, self.flipped)
    }
}

/// Translates cells so the minimum x and y offsets are both zero.
pub fn normalize(cells: &[Cell]) -> Vec<Cell> {
    let (Some(min_x), Some(min_y)) = (
        cells.iter().map(|cell| cell.x).min(),
        cells.iter().map(|cell| cell.y).min(),
    ) else {
        return Vec::new();
    };

    cells
        .iter()
        .map(|cell| Cell::new(cell.x - min_x, cell.y - min_y, cell.color))
        .collect()
}

/// Rotates 90 degrees clockwise about the origin: (x, y) -> (y, -x).
pub fn rotate_clockwise_90(cells: &[Cell]) -> Vec<Cell> {
    let rotated: Vec<Cell> = cells
        .iter()
        .map(|cell| Cell::new(cell.y, -cell.x, cell.color))
        .collect();
    normalize(&rotated)
}

/// Mirrors x about the current maximum x: x -> max_x - x.
pub fn flip_horizontal(cells: &[Cell]) -> Vec<Cell> {
    let Some(max_x) = cells.iter().map(|cell| cell.x).max() else {
        return Vec::new();
    };

    let mirrored: Vec<Cell> = cells
        .iter()
        .map(|cell| Cell::new(max_x - cell.x, cell.y, cell.color))
        .collect();
    normalize(&mirrored)
}

/// Applies the flip (if requested) first, then `rotation` clockwise quarter turns.
///
/// Flip-then-rotate differs from rotate-then-flip for asymmetric pieces; the
/// contract uses flip first.
pub fn transform(cells: &[Cell], rotation: Rotation, flipped: bool) -> Vec<Cell> {
    debug_assert!(
        cells.iter().all(|cell| cell.color != Color::Empty),
        "empty sentinel cell reached the transform engine"
    );

    let mut current = if flipped {
        flip_horizontal(cells)
    } else {
        normalize(cells)
    };
    for _ in 0..rotation.quarter_turns() {
        current = rotate_clockwise_90(&current);
    }
    current
}

/// Width and height of the bounding box of normalized cells.
pub fn extent(cells: &[Cell]) -> (i32, i32) {
    let width = cells.iter().map(|cell| cell.x + 1).max().unwrap_or(0);
    let height = cells.iter().map(|cell| cell.y + 1).max().unwrap_or(0);
    (width, height)
}

/// Order-independent comparison of two cell sets.
pub fn same_cells(a: &[Cell], b: &[Cell]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Generates all distinct orientations of a piece.
///
/// Applies the 8 transforms, sorts each result so equal shapes compare equal,
/// then removes duplicates. Symmetric pieces have fewer than 8.
pub fn all_orientations(cells: &[Cell]) -> Vec<Vec<Cell>> {
    let mut orientations: Vec<Vec<Cell>> = Transform::ALL
        .iter()
        .map(|transform| {
            let mut oriented = transform.apply(cells);
            oriented.sort_unstable();
            oriented
        })
        .collect();

    // symmetric pieces produce duplicates
    orientations.sort();
    orientations.dedup();
    orientations
}

/// Formats a cell set as a text grid, top row first.
///
/// Gaps show as '.'. Cells are expected to be normalized.
pub fn format_shape(cells: &[Cell]) -> String {
    let (width, height) = extent(cells);
    let mut output = String::new();

    for y in 0..height {
        for x in 0..width {
            let symbol = cells
                .iter()
                .find(|cell| cell.x == x && cell.y == y)
                .map_or('.', |cell| cell.color.symbol());
            output.push(symbol);
        }
        output.push('\n');
    }

    output
}
