//! Error types.

use thiserror::Error;

use crate::levels::LevelId;
use crate::pieces::PieceId;

/// Catalog lookups and integrity checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("piece {0} does not exist")]
    PieceNotFound(PieceId),
    #[error("level {0} does not exist")]
    LevelNotFound(LevelId),
    /// A level whitelists a piece the catalog does not have.
    #[error("level {level} allows unknown piece {piece}")]
    DanglingPiece { level: LevelId, piece: PieceId },
}

/// Decoding a board snapshot read from the contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board snapshot has {actual} cells, expected {expected}")]
    WrongLength { expected: usize, actual: usize },
    #[error("unknown color code {code} at cell {index}")]
    UnknownColor { index: usize, code: u8 },
}

/// Planning a move before submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("piece {piece} is not allowed in level {level}")]
    PieceNotAllowed { level: LevelId, piece: PieceId },
    #[error("piece {piece} does not fit on the board at ({x}, {y})")]
    OutOfBounds { piece: PieceId, x: i32, y: i32 },
}
