//! Read-only piece and level lookup.
//!
//! A `Catalog` is built once from definition tables and never mutated, so a
//! shared reference can be handed to any number of threads.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{CatalogError, PlacementError};
use crate::geometry::Transform;
use crate::levels::{Level, LevelDef, LevelId, LEVEL_TABLE};
use crate::pieces::{Piece, PieceDef, PieceId, PIECE_TABLE};
use crate::placement::Move;

#[derive(Debug)]
pub struct Catalog {
    pieces: FxHashMap<PieceId, Piece>,
    levels: FxHashMap<LevelId, Level>,
}

impl Catalog {
    /// Converts definition tables into lookup maps.
    ///
    /// Piece sentinels are dropped here. Later duplicates of an id replace
    /// earlier ones.
    pub fn build(piece_defs: &[PieceDef], level_defs: &[LevelDef]) -> Self {
        let pieces: FxHashMap<PieceId, Piece> = piece_defs
            .iter()
            .map(|def| (def.id, Piece::from_def(def)))
            .collect();
        let levels: FxHashMap<LevelId, Level> = level_defs
            .iter()
            .map(|def| (def.id, Level::from_def(def)))
            .collect();

        tracing::debug!(
            pieces = pieces.len(),
            levels = levels.len(),
            "built catalog"
        );

        Self { pieces, levels }
    }

    /// The compiled-in catalog, built on first use.
    pub fn standard() -> &'static Catalog {
        static STANDARD: OnceLock<Catalog> = OnceLock::new();
        STANDARD.get_or_init(|| Catalog::build(PIECE_TABLE, LEVEL_TABLE))
    }

    pub fn piece(&self, id: PieceId) -> Result<&Piece, CatalogError> {
        self.pieces.get(&id).ok_or(CatalogError::PieceNotFound(id))
    }

    pub fn level(&self, id: LevelId) -> Result<&Level, CatalogError> {
        self.levels.get(&id).ok_or(CatalogError::LevelNotFound(id))
    }

    /// Resolves both ids and plans the move with `Move::plan`.
    pub fn plan_move(
        &self,
        level: LevelId,
        piece: PieceId,
        transform: Transform,
        x: i32,
        y: i32,
    ) -> Result<Move, PlacementError> {
        let level = self.level(level)?;
        let piece = self.piece(piece)?;
        Move::plan(level, piece, transform, x, y)
    }

    /// All pieces in id order.
    pub fn pieces(&self) -> Vec<&Piece> {
        let mut pieces: Vec<&Piece> = self.pieces.values().collect();
        pieces.sort_unstable_by_key(|piece| piece.id());
        pieces
    }

    /// All levels in id order.
    pub fn levels(&self) -> Vec<&Level> {
        let mut levels: Vec<&Level> = self.levels.values().collect();
        levels.sort_unstable_by_key(|level| level.id());
        levels
    }

    /// Checks that every whitelisted piece id resolves.
    pub fn check_integrity(&self) -> Result<(), CatalogError> {
        for level in self.levels() {
            for &piece in level.allowed() {
                if !self.pieces.contains_key(&piece) {
                    return Err(CatalogError::DanglingPiece {
                        level: level.id(),
                        piece,
                    });
                }
            }
        }
        tracing::debug!(levels = self.levels.len(), "catalog integrity ok");
        Ok(())
    }

    /// Serializable view of the whole catalog, in id order.
    pub fn export(&self) -> CatalogExport<'_> {
        CatalogExport {
            pieces: self.pieces(),
            levels: self.levels(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogExport<'a> {
    pub pieces: Vec<&'a Piece>,
    pub levels: Vec<&'a Level>,
}
