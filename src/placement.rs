//! Client-side placement pre-check and the move tuple sent to the contract.
//!
//! Only board bounds are checked here. Overlap and color legality belong to
//! the contract.

use serde::Serialize;

use crate::board::BOARD_SIZE;
use crate::error::PlacementError;
use crate::geometry::{Cell, Rotation, Transform};
use crate::levels::Level;
use crate::pieces::{Piece, PieceId};

const BOARD_RANGE: std::ops::Range<i32> = 0..BOARD_SIZE as i32;

/// Absolute board position of a cell, or `None` if it is off the board.
///
/// Any origin is accepted; offsets that overflow `i32` count as off the board.
fn board_position(cell: &Cell, origin_x: i32, origin_y: i32) -> Option<(i32, i32)> {
    let x = origin_x.checked_add(cell.x).filter(|x| BOARD_RANGE.contains(x))?;
    let y = origin_y.checked_add(cell.y).filter(|y| BOARD_RANGE.contains(y))?;
    Some((x, y))
}

/// True when every cell, offset by the origin, lands on the board.
pub fn can_place(cells: &[Cell], origin_x: i32, origin_y: i32) -> bool {
    cells
        .iter()
        .all(|cell| board_position(cell, origin_x, origin_y).is_some())
}

/// Translates cells to absolute board positions.
///
/// Returns `None` if any cell would fall outside the board.
pub fn absolute_cells(cells: &[Cell], origin_x: i32, origin_y: i32) -> Option<Vec<Cell>> {
    cells
        .iter()
        .map(|cell| {
            board_position(cell, origin_x, origin_y).map(|(x, y)| Cell::new(x, y, cell.color))
        })
        .collect()
}

/// Every origin at which the cells fit, in row-major order.
pub fn valid_origins(cells: &[Cell]) -> Vec<(i32, i32)> {
    BOARD_RANGE
        .flat_map(|y| BOARD_RANGE.map(move |x| (x, y)))
        .filter(|&(x, y)| can_place(cells, x, y))
        .collect()
}

/// A placement ready to be encoded as contract calldata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub piece: PieceId,
    pub x: u8,
    pub y: u8,
    pub rotation: Rotation,
    pub flipped: bool,
}

impl Move {
    /// Validates a chosen placement against the level whitelist and the board bounds.
    ///
    /// The transform is passed through unchanged, with no per-piece adjustment.
    pub fn plan(
        level: &Level,
        piece: &Piece,
        transform: Transform,
        x: i32,
        y: i32,
    ) -> Result<Move, PlacementError> {
        if !level.allows(piece.id()) {
            return Err(PlacementError::PieceNotAllowed {
                level: level.id(),
                piece: piece.id(),
            });
        }
        if !can_place(&piece.oriented(transform), x, y) {
            return Err(PlacementError::OutOfBounds {
                piece: piece.id(),
                x,
                y,
            });
        }

        // a fitting piece has at least one cell, so the origin is on the board
        Ok(Move {
            piece: piece.id(),
            x: x as u8,
            y: y as u8,
            rotation: transform.rotation,
            flipped: transform.flipped,
        })
    }

    /// The (piece, x, y, quarter turns, flipped) argument tuple.
    pub fn args(&self) -> (u8, u8, u8, u8, bool) {
        (
            self.piece,
            self.x,
            self.y,
            self.rotation.quarter_turns(),
            self.flipped,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::levels::LEVEL_TABLE;
    use crate::pieces::PIECE_TABLE;

    fn piece(id: PieceId) -> Piece {
        Piece::from_def(&PIECE_TABLE[id as usize - 1])
    }

    #[test]
    fn test_vertical_bar_bounds() {
        let bar = piece(1);
        assert!(can_place(bar.cells(), 0, 0));
        assert!(can_place(bar.cells(), 3, 0));
        assert!(!can_place(bar.cells(), 0, 1));
        assert!(!can_place(bar.cells(), 4, 0));
        assert!(!can_place(bar.cells(), -1, 0));
    }

    #[test]
    fn test_horizontal_bar_bounds() {
        let bar = piece(1).oriented(Transform::new(Rotation::R90, false));
        assert!(can_place(&bar, 0, 3));
        assert!(!can_place(&bar, 1, 0));
    }

    #[test]
    fn test_empty_cells_always_fit() {
        assert!(can_place(&[], 100, -100));
    }

    #[test]
    fn test_absolute_cells() {
        let cells = [Cell::new(0, 0, Color::Red), Cell::new(1, 0, Color::Yellow)];
        assert_eq!(
            absolute_cells(&cells, 2, 3),
            Some(vec![Cell::new(2, 3, Color::Red), Cell::new(3, 3, Color::Yellow)])
        );
        assert_eq!(absolute_cells(&cells, 3, 3), None);
    }

    #[test]
    fn test_valid_origins() {
        assert_eq!(valid_origins(piece(11).cells()).len(), 16);
        assert_eq!(valid_origins(piece(1).cells()), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        // 2x2 square fits at 3x3 origins
        assert_eq!(valid_origins(piece(4).cells()).len(), 9);
    }

    #[test]
    fn test_plan_move() {
        let level = Level::from_def(&LEVEL_TABLE[0]);
        let transform = Transform::new(Rotation::R270, true);
        let planned = Move::plan(&level, &piece(5), transform, 1, 1).unwrap();
        assert_eq!(planned.args(), (5, 1, 1, 3, true));
    }

    #[test]
    fn test_plan_rejects_piece_outside_whitelist() {
        let level = Level::from_def(&LEVEL_TABLE[0]);
        assert_eq!(
            Move::plan(&level, &piece(1), Transform::default(), 0, 0),
            Err(PlacementError::PieceNotAllowed { level: 1, piece: 1 })
        );
    }

    #[test]
    fn test_plan_rejects_out_of_bounds() {
        let level = Level::from_def(&LEVEL_TABLE[0]);
        assert_eq!(
            Move::plan(&level, &piece(5), Transform::default(), 2, 0),
            Err(PlacementError::OutOfBounds { piece: 5, x: 2, y: 0 })
        );
    }

    #[test]
    fn test_extreme_origins_never_fit() {
        let offset = [Cell::new(1, 1, Color::Red)];
        for (x, y) in [(i32::MAX, 0), (0, i32::MAX), (i32::MIN, 0), (0, i32::MIN)] {
            assert!(!can_place(&offset, x, y), "origin ({x}, {y})");
            assert_eq!(absolute_cells(&offset, x, y), None);
        }
        assert!(!can_place(&offset, i32::MAX, i32::MAX));
    }

    #[test]
    fn test_off_board_origins_for_every_orientation() {
        let level = Level::from_def(&LEVEL_TABLE[48]);
        let origins = [i32::MIN, -1, 4, i32::MAX];
        for def in PIECE_TABLE {
            let piece = Piece::from_def(def);
            for transform in Transform::ALL {
                let cells = piece.oriented(transform);
                for &x in &origins {
                    for &y in &origins {
                        assert!(!can_place(&cells, x, y), "piece {} at ({x}, {y})", def.id);
                        assert!(!can_place(&cells, x, 0));
                        assert!(!can_place(&cells, 0, y));
                        if level.allows(def.id) {
                            assert_eq!(
                                Move::plan(&level, &piece, transform, x, y),
                                Err(PlacementError::OutOfBounds {
                                    piece: def.id,
                                    x,
                                    y
                                })
                            );
                        }
                    }
                }
            }
        }
    }
}
