//! Animation identifiers (3-bit field).

use core::fmt;

/// Animations understood by the cloud. Ids are transmitted on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Animation {
    /// The cloud's idle animation. Speed and colour bits are ignored.
    Default = 0,
    /// Random twinkling.
    Precipitation = 1,
    /// Waves moving from one end to the other.
    Flood = 2,
    Pulse = 3,
    /// Colours chasing clockwise around the cloud.
    Swirl = 4,
}

impl Animation {
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::Precipitation,
        Self::Flood,
        Self::Pulse,
        Self::Swirl,
    ];

    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Inverse of [`id`](Self::id). Ids 5–7 fit the field but are unassigned.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Precipitation => "PRECIPITATION",
            Self::Flood => "FLOOD",
            Self::Pulse => "PULSE",
            Self::Swirl => "SWIRL",
        }
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
