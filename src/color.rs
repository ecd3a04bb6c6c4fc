//! Cell colors and the color-combination model.
//!
//! Codes are the one-byte values the contract reports for each board cell.
//! Symbols are the single characters used by the level table and text output.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    /// Unoccupied board cell, or an unused slot in a piece definition.
    #[default]
    Empty = 0,
    Red = 1,
    Yellow = 2,
    Blue = 3,
    /// Neutral primary: never mixes with anything.
    White = 4,
    /// Red + Yellow.
    Orange = 5,
    /// Yellow + Blue.
    Green = 6,
    /// Red + Blue.
    Purple = 7,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Empty,
        Color::Red,
        Color::Yellow,
        Color::Blue,
        Color::White,
        Color::Orange,
        Color::Green,
        Color::Purple,
    ];

    /// Decodes a contract color code.
    pub const fn from_code(code: u8) -> Option<Color> {
        match code {
            0 => Some(Color::Empty),
            1 => Some(Color::Red),
            2 => Some(Color::Yellow),
            3 => Some(Color::Blue),
            4 => Some(Color::White),
            5 => Some(Color::Orange),
            6 => Some(Color::Green),
            7 => Some(Color::Purple),
            _ => None,
        }
    }

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parses a table symbol. Usable in const context so the level table is
    /// checked at compile time.
    pub const fn from_symbol(symbol: u8) -> Option<Color> {
        match symbol {
            b'.' => Some(Color::Empty),
            b'R' => Some(Color::Red),
            b'Y' => Some(Color::Yellow),
            b'B' => Some(Color::Blue),
            b'W' => Some(Color::White),
            b'O' => Some(Color::Orange),
            b'G' => Some(Color::Green),
            b'P' => Some(Color::Purple),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Color::Empty => '.',
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
            Color::White => 'W',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Purple => 'P',
        }
    }

    /// True for the three colors that take part in mixing.
    pub const fn is_primary(self) -> bool {
        matches!(self, Color::Red | Color::Yellow | Color::Blue)
    }

    pub const fn is_mixed(self) -> bool {
        matches!(self, Color::Orange | Color::Green | Color::Purple)
    }

    /// Combines a color already on a cell with an incoming color.
    ///
    /// Returns `None` when the pair cannot share a cell. This is the color
    /// model only; legality of an actual placement is decided by the contract.
    pub fn mix(self, incoming: Color) -> Option<Color> {
        match (self, incoming) {
            (Color::Empty, color) | (color, Color::Empty) => Some(color),
            (Color::Red, Color::Yellow) | (Color::Yellow, Color::Red) => Some(Color::Orange),
            (Color::Yellow, Color::Blue) | (Color::Blue, Color::Yellow) => Some(Color::Green),
            (Color::Red, Color::Blue) | (Color::Blue, Color::Red) => Some(Color::Purple),
            _ => None,
        }
    }

    /// The two primaries a mixed color is made of.
    pub const fn components(self) -> Option<(Color, Color)> {
        match self {
            Color::Orange => Some((Color::Red, Color::Yellow)),
            Color::Green => Some((Color::Yellow, Color::Blue)),
            Color::Purple => Some((Color::Red, Color::Blue)),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
