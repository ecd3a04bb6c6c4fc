//! Puzzle piece definitions.
//!
//! The table keeps the contract's fixed-width layout: four cell slots per
//! piece, with unused slots holding `Cell::EMPTY`. `Piece::from_def` drops
//! those sentinels, so everything downstream works on 1 to 4 real cells.

use serde::Serialize;

use crate::color::Color;
use crate::geometry::{normalize, Cell, Transform};

/// One-based piece identifier, as used by the contract.
pub type PieceId = u8;

/// Slot capacity of a piece definition.
pub const MAX_CELLS: usize = 4;

/// A piece exactly as the contract stores it.
#[derive(Debug, Clone, Copy)]
pub struct PieceDef {
    pub id: PieceId,
    pub slots: [Cell; MAX_CELLS],
}

impl PieceDef {
    /// Number of non-sentinel slots.
    pub const fn size(&self) -> usize {
        let mut count = 0;
        let mut i = 0;
        while i < MAX_CELLS {
            if !matches!(self.slots[i].color, Color::Empty) {
                count += 1;
            }
            i += 1;
        }
        count
    }
}

const fn cell(x: i32, y: i32, color: Color) -> Cell {
    Cell::new(x, y, color)
}

const E: Cell = Cell::EMPTY;

use Color::{Blue as B, Red as R, White as W, Yellow as Y};

/// The piece catalog, ids 1 through 13.
pub const PIECE_TABLE: &[PieceDef] = &[
    // straight 4
    PieceDef { id: 1, slots: [cell(0, 0, R), cell(0, 1, R), cell(0, 2, R), cell(0, 3, R)] },
    // straight 3
    PieceDef { id: 2, slots: [cell(0, 0, Y), cell(0, 1, Y), cell(0, 2, Y), E] },
    // straight 2
    PieceDef { id: 3, slots: [cell(0, 0, B), cell(0, 1, B), E, E] },
    // square
    PieceDef { id: 4, slots: [cell(0, 0, Y), cell(1, 0, Y), cell(0, 1, Y), cell(1, 1, Y)] },
    // T
    PieceDef { id: 5, slots: [cell(0, 0, B), cell(1, 0, B), cell(2, 0, B), cell(1, 1, B)] },
    // L
    PieceDef { id: 6, slots: [cell(0, 0, R), cell(0, 1, R), cell(0, 2, R), cell(1, 0, R)] },
    // S, two-tone
    PieceDef { id: 7, slots: [cell(0, 0, Y), cell(1, 0, Y), cell(1, 1, B), cell(2, 1, B)] },
    // small L, two-tone
    PieceDef { id: 8, slots: [cell(0, 0, B), cell(0, 1, B), cell(1, 0, R), E] },
    // domino, two-tone
    PieceDef { id: 9, slots: [cell(0, 0, R), cell(1, 0, Y), E, E] },
    // small L, neutral
    PieceDef { id: 10, slots: [cell(0, 0, W), cell(1, 0, W), cell(0, 1, W), E] },
    // singles
    PieceDef { id: 11, slots: [cell(0, 0, R), E, E, E] },
    PieceDef { id: 12, slots: [cell(0, 0, Y), E, E, E] },
    PieceDef { id: 13, slots: [cell(0, 0, B), E, E, E] },
];

/// Compile-time checks on a piece table.
///
/// Ids must run 1..=N in order, every piece needs 1 to 4 real cells, and
/// sentinels may only trail the real cells.
pub const fn validate_piece_table(table: &[PieceDef]) {
    let mut i = 0;
    while i < table.len() {
        let def = &table[i];
        assert!(def.id as usize == i + 1, "piece ids must run 1..=N in order");
        assert!(def.size() >= 1, "piece has no cells");

        let mut slot = def.size();
        while slot < MAX_CELLS {
            assert!(
                matches!(def.slots[slot].color, Color::Empty),
                "empty slots must come after real cells"
            );
            slot += 1;
        }
        i += 1;
    }
}

const _: () = validate_piece_table(PIECE_TABLE);

/// A piece with its sentinel slots removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Piece {
    id: PieceId,
    cells: Vec<Cell>,
}

impl Piece {
    /// Filters out the `Color::Empty` slots and normalizes the rest.
    pub fn from_def(def: &PieceDef) -> Self {
        let real: Vec<Cell> = def
            .slots
            .iter()
            .copied()
            .filter(|cell| cell.color != Color::Empty)
            .collect();

        Self {
            id: def.id,
            cells: normalize(&real),
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Base cells, normalized and sentinel-free.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn oriented(&self, transform: Transform) -> Vec<Cell> {
        transform.apply(&self.cells)
    }

    /// Sorted color multiset of the piece.
    pub fn colors(&self) -> Vec<Color> {
        let mut colors: Vec<Color> = self.cells.iter().map(|cell| cell.color).collect();
        colors.sort_unstable();
        colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{all_orientations, extent, flip_horizontal, same_cells, Rotation};

    fn all_pieces() -> Vec<Piece> {
        PIECE_TABLE.iter().map(Piece::from_def).collect()
    }

    #[test]
    fn test_size_matches_declared_slots() {
        for def in PIECE_TABLE {
            let piece = Piece::from_def(def);
            assert_eq!(piece.size(), def.size(), "piece {}", def.id);
            assert!((1..=MAX_CELLS).contains(&piece.size()));
            assert!(piece.cells().iter().all(|cell| cell.color != Color::Empty));
        }
    }

    #[test]
    fn test_four_quarter_turns_return_every_piece() {
        for piece in all_pieces() {
            let mut cells = piece.cells().to_vec();
            for _ in 0..4 {
                cells = Transform::new(Rotation::R90, false).apply(&cells);
            }
            assert!(same_cells(&cells, piece.cells()), "piece {}", piece.id());
        }
    }

    #[test]
    fn test_double_flip_returns_every_piece() {
        for piece in all_pieces() {
            let twice = flip_horizontal(&flip_horizontal(piece.cells()));
            assert!(same_cells(&twice, piece.cells()), "piece {}", piece.id());
        }
    }

    #[test]
    fn test_orientations_keep_color_multiset() {
        for piece in all_pieces() {
            for transform in Transform::ALL {
                let mut colors: Vec<Color> =
                    piece.oriented(transform).iter().map(|cell| cell.color).collect();
                colors.sort_unstable();
                assert_eq!(colors, piece.colors(), "piece {} {transform:?}", piece.id());
            }
        }
    }

    #[test]
    fn test_l_piece_quarter_turn_is_three_wide() {
        let piece = Piece::from_def(&PIECE_TABLE[5]);
        assert_eq!(piece.id(), 6);
        assert_eq!(extent(piece.cells()), (2, 3));
        assert_eq!(
            extent(&piece.oriented(Transform::new(Rotation::R90, false))),
            (3, 2)
        );
    }

    #[test]
    fn test_single_cell_pieces_are_invariant() {
        for def in &PIECE_TABLE[10..13] {
            let piece = Piece::from_def(def);
            let color = piece.cells()[0].color;
            for transform in Transform::ALL {
                assert_eq!(piece.oriented(transform), vec![Cell::new(0, 0, color)]);
            }
        }
    }

    #[test]
    fn test_orientation_counts() {
        let counts: Vec<usize> = all_pieces()
            .iter()
            .map(|piece| all_orientations(piece.cells()).len())
            .collect();
        // mirror-symmetric shapes collapse; two-tone L and S shapes do not
        assert_eq!(counts, vec![2, 2, 2, 1, 4, 8, 8, 8, 4, 4, 1, 1, 1]);
    }
}
