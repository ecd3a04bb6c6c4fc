//! Level definitions: a target board and the pieces a player may use.
//!
//! Targets are written as four row strings of color symbols, top row first,
//! and parsed at compile time. A bad symbol, a non-full target or a
//! whitelisted piece id missing from the piece table fails the build.

use serde::Serialize;

use crate::board::{Board, BOARD_CELLS, BOARD_SIZE};
use crate::color::Color;
use crate::pieces::{PieceDef, PieceId, PIECE_TABLE};

/// One-based level identifier, as used by the contract.
pub type LevelId = u8;

#[derive(Debug, Clone, Copy)]
pub struct LevelDef {
    pub id: LevelId,
    pub target: [Color; BOARD_CELLS],
    pub allowed: &'static [PieceId],
}

/// Builds a level from row strings, panicking at compile time on bad input.
const fn level(id: LevelId, rows: [&str; BOARD_SIZE], allowed: &'static [PieceId]) -> LevelDef {
    let mut target = [Color::Empty; BOARD_CELLS];
    let mut y = 0;
    while y < BOARD_SIZE {
        let row = rows[y].as_bytes();
        assert!(row.len() == BOARD_SIZE, "target rows must be 4 symbols wide");
        let mut x = 0;
        while x < BOARD_SIZE {
            target[y * BOARD_SIZE + x] = match Color::from_symbol(row[x]) {
                Some(color) => color,
                None => panic!("unknown color symbol in level table"),
            };
            x += 1;
        }
        y += 1;
    }
    LevelDef {
        id,
        target,
        allowed,
    }
}

/// The level catalog, ids 1 through 50.
pub const LEVEL_TABLE: &[LevelDef] = &[
    level(1, ["YBBR", "RBBB", "WBGY", "WWYY"], &[4, 5, 8, 10, 11, 12, 13]),
    level(2, ["YYYY", "YYRR", "YYBR", "BRBR"], &[2, 4, 6, 8, 12, 13]),
    level(3, ["RRRR", "YYYY", "BYYR", "YRBB"], &[1, 2, 7, 9, 11, 12, 13]),
    level(4, ["RBWW", "RBBW", "RRPR", "RBBP"], &[1, 3, 5, 6, 10, 13]),
    level(5, ["RRRR", "RRRY", "RBBP", "YYGY"], &[1, 2, 5, 6, 9, 12]),
    level(6, ["YYBB", "YRRB", "GYYY", "BRYY"], &[2, 3, 4, 8, 9, 11, 12, 13]),
    level(7, ["RBBB", "RPBB", "RPRY", "RRRR"], &[1, 5, 6, 8, 11, 12, 13]),
    level(8, ["BBRB", "YGYB", "YBYY", "YYOY"], &[2, 3, 4, 7, 8, 9]),
    level(9, ["BRRR", "BPPB", "GYBB", "YYYR"], &[3, 4, 5, 6, 8, 9]),
    level(10, ["BBYR", "RPBY", "RBPY", "RBBG"], &[2, 3, 5, 6, 8, 9, 13]),
    level(11, ["WYYO", "WWBB", "BRPR", "BPBB"], &[2, 3, 5, 6, 8, 10]),
    level(12, ["YRBB", "YWWR", "OWRY", "RRRY"], &[2, 6, 8, 9, 10, 11, 12]),
    level(13, ["YYYR", "GYRR", "GRRR", "PRRR"], &[1, 2, 6, 7, 9, 11, 13]),
    level(14, ["BBYR", "RRRB", "GGPB", "YYRB"], &[3, 4, 5, 6, 8, 11, 12]),
    level(15, ["YRPP", "YBYO", "WBOY", "WWBB"], &[3, 4, 6, 7, 8, 10]),
    level(16, ["YYBR", "GGYR", "YPYR", "RBYR"], &[1, 2, 3, 4, 8, 9, 13]),
    level(17, ["YBWW", "OBWY", "PPPY", "BBRY"], &[2, 3, 5, 6, 9, 10, 12, 13]),
    level(18, ["WYOG", "WWBB", "GBBB", "RBYB"], &[2, 3, 5, 8, 9, 10, 12, 13]),
    level(19, ["RYWW", "RYWB", "RYPB", "RBBB"], &[1, 2, 5, 8, 10]),
    level(20, ["RRRY", "BBRB", "YORB", "OORP"], &[1, 3, 4, 6, 8, 11, 12, 13]),
    level(21, ["WWYY", "YWGY", "YPBB", "GBBB"], &[2, 3, 4, 5, 8, 10]),
    level(22, ["OOOR", "RBRB", "RBYY", "RRYY"], &[1, 2, 4, 6, 8, 13]),
    level(23, ["PGBB", "PPWB", "PWWR", "RRRR"], &[1, 3, 5, 6, 8, 10, 12]),
    level(24, ["BWWR", "PWYO", "BBOO", "YORB"], &[3, 4, 6, 8, 9, 10, 11, 12, 13]),
    level(25, ["ROOR", "PGYY", "BYYW", "BYWW"], &[3, 4, 6, 7, 9, 10, 12]),
    level(26, ["OBYO", "YPPR", "ORRR", "YOBB"], &[1, 2, 3, 6, 7, 9, 11, 12, 13]),
    level(27, ["BBWW", "GYWB", "GYGB", "PPGB"], &[3, 4, 5, 7, 8, 10, 11, 13]),
    level(28, ["WWGY", "WGYY", "BGBR", "BBBB"], &[4, 5, 7, 8, 10, 13]),
    level(29, ["BBRW", "YBWW", "GPPB", "YPOP"], &[2, 3, 5, 6, 8, 10, 11, 12, 13]),
    level(30, ["RRGR", "YPBR", "BPBW", "BPWW"], &[1, 3, 5, 8, 9, 10, 11, 12]),
    level(31, ["RRWR", "ORWW", "OBGY", "YYGY"], &[4, 6, 7, 9, 10, 11, 12, 13]),
    level(32, ["YOOR", "GOGR", "GBWW", "BBBW"], &[2, 4, 5, 6, 8, 10, 13]),
    level(33, ["BRWY", "BPWW", "PPPP", "YRBB"], &[3, 5, 6, 8, 9, 10, 11, 12, 13]),
    level(34, ["YYOR", "ORGO", "YYGO", "RORR"], &[1, 2, 4, 6, 7, 9, 11, 12]),
    level(35, ["RRBY", "PBBB", "RRGB", "RROR"], &[1, 5, 6, 7, 11, 12, 13]),
    level(36, ["BBBR", "WGPP", "WWRP", "RRPP"], &[1, 3, 5, 6, 8, 10, 12, 13]),
    level(37, ["YGGB", "ROGB", "RPYG", "RPYR"], &[4, 5, 6, 7, 8, 9, 11, 12]),
    level(38, ["RRRR", "ORRR", "WGGO", "WWGG"], &[1, 2, 3, 6, 7, 10, 11, 12]),
    level(39, ["RPYY", "PPWR", "PPWW", "ROOO"], &[1, 2, 3, 6, 8, 9, 10, 11, 12, 13]),
    level(40, ["ROOR", "POOW", "OOWW", "YPBY"], &[1, 4, 6, 7, 9, 10, 11, 12, 13]),
    level(41, ["WBBP", "WWRR", "PPPR", "OGGP"], &[1, 3, 5, 6, 7, 10, 11, 12, 13]),
    level(42, ["OBBP", "YBPR", "OPPR", "RYPR"], &[1, 5, 6, 7, 8, 9, 11, 12]),
    level(43, ["RRYY", "OOGG", "WOOB", "WWRB"], &[4, 6, 7, 8, 9, 10, 11, 12]),
    level(44, ["YYRO", "YOPR", "PPPR", "BBBR"], &[1, 4, 5, 6, 8, 11, 12, 13]),
    level(45, ["RRRR", "GWWO", "GWBG", "OBBB"], &[1, 2, 3, 5, 9, 10, 11, 12, 13]),
    level(46, ["WWYY", "WOGO", "OOGG", "YOPB"], &[2, 3, 4, 6, 7, 9, 10, 11, 12, 13]),
    level(47, ["OYYP", "YPPP", "GPBW", "PBWW"], &[2, 3, 5, 6, 8, 9, 10, 11, 12, 13]),
    level(48, ["RRRR", "WWRP", "WBOP", "PGGR"], &[1, 5, 6, 7, 9, 10, 11]),
    level(49, ["OOOO", "BPRY", "GGWW", "GGBW"], &[1, 2, 3, 4, 5, 9, 10, 11, 12, 13]),
    level(50, ["POOP", "PYOP", "OWWR", "YRWR"], &[1, 3, 4, 6, 8, 9, 10, 11, 12]),
];

/// Compile-time checks on a level table against a piece table.
///
/// Ids must run 1..=N in order, targets must be full, and every whitelisted
/// piece must exist.
pub const fn validate_level_table(levels: &[LevelDef], pieces: &[PieceDef]) {
    let mut i = 0;
    while i < levels.len() {
        let def = &levels[i];
        assert!(def.id as usize == i + 1, "level ids must run 1..=N in order");
        assert!(!def.allowed.is_empty(), "level allows no pieces");

        let mut cell = 0;
        while cell < BOARD_CELLS {
            assert!(
                !matches!(def.target[cell], Color::Empty),
                "level target must be full"
            );
            cell += 1;
        }

        let mut a = 0;
        while a < def.allowed.len() {
            let wanted = def.allowed[a];
            let mut found = false;
            let mut p = 0;
            while p < pieces.len() {
                if pieces[p].id == wanted {
                    found = true;
                }
                p += 1;
            }
            assert!(found, "level allows a piece missing from the piece table");
            a += 1;
        }
        i += 1;
    }
}

const _: () = validate_level_table(LEVEL_TABLE, PIECE_TABLE);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Level {
    id: LevelId,
    target: Board,
    allowed: Vec<PieceId>,
}

impl Level {
    pub fn from_def(def: &LevelDef) -> Self {
        let mut allowed = def.allowed.to_vec();
        allowed.sort_unstable();
        allowed.dedup();

        Self {
            id: def.id,
            target: Board::from_colors(def.target),
            allowed,
        }
    }

    pub fn id(&self) -> LevelId {
        self.id
    }

    pub fn target(&self) -> &Board {
        &self.target
    }

    /// Whitelisted piece ids, ascending.
    pub fn allowed(&self) -> &[PieceId] {
        &self.allowed
    }

    pub fn allows(&self, piece: PieceId) -> bool {
        self.allowed.binary_search(&piece).is_ok()
    }
}
