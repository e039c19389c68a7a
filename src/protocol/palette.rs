//! Indexed colour palette (4-bit field).
//!
//! Two historical id assignments exist. `Extended` is the one the cloud
//! firmware ships with; `Classic` is the earlier nine-colour table. Both
//! are explicit `(colour, id)` tables keyed both ways.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Named colours the cloud can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Black,
    White,
    Red,
    Green,
    Blue,
    LightBlue,
    DarkBlue,
    LightGray,
    DarkGray,
    Yellow,
    Orange,
}

impl PaletteColor {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "BLACK",
            Self::White => "WHITE",
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::LightBlue => "LIGHT_BLUE",
            Self::DarkBlue => "DARK_BLUE",
            Self::LightGray => "LIGHT_GRAY",
            Self::DarkGray => "DARK_GRAY",
            Self::Yellow => "YELLOW",
            Self::Orange => "ORANGE",
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const EXTENDED: [(PaletteColor, u8); 11] = [
    (PaletteColor::Black, 0),
    (PaletteColor::White, 1),
    (PaletteColor::Red, 2),
    (PaletteColor::Green, 3),
    (PaletteColor::Blue, 4),
    (PaletteColor::LightBlue, 5),
    (PaletteColor::DarkBlue, 6),
    (PaletteColor::LightGray, 7),
    (PaletteColor::DarkGray, 8),
    (PaletteColor::Yellow, 9),
    (PaletteColor::Orange, 10),
];

// No GREEN or BLUE in this generation.
const CLASSIC: [(PaletteColor, u8); 9] = [
    (PaletteColor::Black, 0),
    (PaletteColor::White, 1),
    (PaletteColor::LightBlue, 2),
    (PaletteColor::DarkBlue, 3),
    (PaletteColor::LightGray, 4),
    (PaletteColor::DarkGray, 5),
    (PaletteColor::Yellow, 6),
    (PaletteColor::Orange, 7),
    (PaletteColor::Red, 8),
];

/// Which id table to encode colours with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Palette {
    Classic,
    #[default]
    Extended,
}

impl Palette {
    fn table(self) -> &'static [(PaletteColor, u8)] {
        match self {
            Self::Classic => &CLASSIC,
            Self::Extended => &EXTENDED,
        }
    }

    /// Wire id of `color`, or `None` if this palette has no such colour.
    pub fn id(self, color: PaletteColor) -> Option<u8> {
        self.table()
            .iter()
            .find(|(c, _)| *c == color)
            .map(|(_, id)| *id)
    }

    /// Colour for a wire id, or `None` if the id is unassigned.
    pub fn color(self, id: u8) -> Option<PaletteColor> {
        self.table()
            .iter()
            .find(|(_, i)| *i == id)
            .map(|(c, _)| *c)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Extended => "extended",
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Palette {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Self::Classic),
            "extended" => Ok(Self::Extended),
            other => Err(Error::Config(format!(
                "unknown palette '{other}' (expected classic or extended)"
            ))),
        }
    }
}
