//! Cloud command protocol.
//!
//! ```text
//!  Phenomenon ──▶ Classification ──▶ Category ──▶ Style
//!                                                  │
//!            Palette (colour → 4-bit id) ◀─────────┤
//!                                                  ▼
//!                                   Command (16 bits, MSB first)
//! ```
//!
//! Every id that crosses the wire comes from an explicit table so that
//! reordering a declaration can never silently renumber the protocol.

pub mod animation;
pub mod command;
pub mod palette;
pub mod style;

pub use animation::Animation;
pub use command::{Command, CommandFields};
pub use palette::{Palette, PaletteColor};
pub use style::{Classification, Style};

/// The two selectable data tables that shape a command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Profile {
    pub palette: Palette,
    pub classification: Classification,
}
