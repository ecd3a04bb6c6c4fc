//! Kanoodle Fusion piece geometry.
//!
//! Mirrors the parts of the fusion puzzle a client needs before it submits a
//! move: piece orientation, the board-bounds pre-check, and the piece and
//! level catalogs. The contract stays authoritative for overlap, color mixing
//! and solution checks.

pub mod board;
pub mod catalog;
pub mod color;
pub mod error;
pub mod geometry;
pub mod levels;
pub mod pieces;
pub mod placement;

pub use board::{Board, BOARD_CELLS, BOARD_SIZE};
pub use catalog::Catalog;
pub use color::Color;
pub use error::{BoardError, CatalogError, PlacementError};
pub use geometry::{transform, Cell, Rotation, Transform};
pub use levels::{Level, LevelId};
pub use pieces::{Piece, PieceId};
pub use placement::{can_place, Move};
