//! 16-bit cloud command codec.
//!
//! Bit layout (bit 0 = least significant):
//! ```text
//!  15        12 11        8 7         4    3    2      0
//! ┌────────────┬───────────┬───────────┬─────┬────────┐
//! │ highlight  │   base    │ reserved  │speed│  anim  │
//! │  colour    │  colour   │  (zero)   │     │        │
//! └────────────┴───────────┴───────────┴─────┴────────┘
//! ```
//!
//! On the wire the word is two bytes, high byte first. The cloud reads
//! them in that order, so [`Command::to_bytes`] is the only sanctioned way
//! to serialise a command.

use core::fmt;

use super::Animation;

const ANIMATION_MASK: u16 = 0b0000_0000_0000_0111;
const SPEED_MASK: u16 = 0b0000_0000_0000_1000;
/// Never written; kept for assertions.
pub const RESERVED_MASK: u16 = 0b0000_0000_1111_0000;
const BASE_COLOR_MASK: u16 = 0b0000_1111_0000_0000;
const HIGHLIGHT_COLOR_MASK: u16 = 0b1111_0000_0000_0000;

const SPEED_SHIFT: u32 = 3;
const BASE_COLOR_SHIFT: u32 = 8;
const HIGHLIGHT_COLOR_SHIFT: u32 = 12;

/// Replace one field of `word`, leaving every other bit untouched.
const fn set_field(word: u16, mask: u16, shift: u32, value: u16) -> u16 {
    (word & !mask) | ((value << shift) & mask)
}

/// Raw field values of a command.
///
/// Values wider than their field are truncated to the field width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CommandFields {
    /// Animation id, 3 bits.
    pub animation: u8,
    pub fast: bool,
    /// Palette id, 4 bits.
    pub base_color: u8,
    /// Palette id, 4 bits.
    pub highlight_color: u8,
}

impl CommandFields {
    /// The named animation, if the id is assigned.
    pub fn animation_kind(&self) -> Option<Animation> {
        Animation::from_id(self.animation)
    }
}

/// A packed 16-bit command word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Command(u16);

impl Command {
    /// Default animation, slow, colour 0 / colour 0. The cloud ignores the
    /// speed and colour bits for this animation.
    pub const DEFAULT: Self = Self(0);

    /// Pack all four fields at once.
    pub const fn encode(fields: CommandFields) -> Self {
        let mut word = 0;
        word = set_field(word, ANIMATION_MASK, 0, fields.animation as u16);
        word = set_field(word, SPEED_MASK, SPEED_SHIFT, fields.fast as u16);
        word = set_field(word, BASE_COLOR_MASK, BASE_COLOR_SHIFT, fields.base_color as u16);
        word = set_field(
            word,
            HIGHLIGHT_COLOR_MASK,
            HIGHLIGHT_COLOR_SHIFT,
            fields.highlight_color as u16,
        );
        Self(word)
    }

    /// Unpack the four fields. Reserved bits are discarded.
    pub const fn decode(self) -> CommandFields {
        CommandFields {
            animation: (self.0 & ANIMATION_MASK) as u8,
            fast: self.0 & SPEED_MASK != 0,
            base_color: ((self.0 & BASE_COLOR_MASK) >> BASE_COLOR_SHIFT) as u8,
            highlight_color: ((self.0 & HIGHLIGHT_COLOR_MASK) >> HIGHLIGHT_COLOR_SHIFT) as u8,
        }
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Wire bytes: `[bits 8–15, bits 0–7]`.
    pub const fn to_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}
