//! P-VTEC significance (`s` field).

use core::fmt;

/// Severity class of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Significance {
    Warning,
    Watch,
    Advisory,
    Statement,
    Forecast,
    Outlook,
    Synopsis,
}

impl Significance {
    pub const ALL: [Self; 7] = [
        Self::Warning,
        Self::Watch,
        Self::Advisory,
        Self::Statement,
        Self::Forecast,
        Self::Outlook,
        Self::Synopsis,
    ];

    /// Tiers the selector considers, most severe first. Everything else is
    /// a valid lookup value but never drives the cloud.
    pub const SELECTION_ORDER: [Self; 3] = [Self::Warning, Self::Watch, Self::Advisory];

    /// Resolve a one-letter VTEC significance code.
    pub fn from_vtec(code: &str) -> Option<Self> {
        match code {
            "W" => Some(Self::Warning),
            "A" => Some(Self::Watch),
            "Y" => Some(Self::Advisory),
            "S" => Some(Self::Statement),
            "F" => Some(Self::Forecast),
            "O" => Some(Self::Outlook),
            "N" => Some(Self::Synopsis),
            _ => None,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Warning => "W",
            Self::Watch => "A",
            Self::Advisory => "Y",
            Self::Statement => "S",
            Self::Forecast => "F",
            Self::Outlook => "O",
            Self::Synopsis => "N",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Warning => "Warning",
            Self::Watch => "Watch",
            Self::Advisory => "Advisory",
            Self::Statement => "Statement",
            Self::Forecast => "Forecast",
            Self::Outlook => "Outlook",
            Self::Synopsis => "Synopsis",
        }
    }

    /// Severity rank, 1 (Synopsis) through 7 (Warning).
    pub const fn rank(self) -> u8 {
        match self {
            Self::Synopsis => 1,
            Self::Outlook => 2,
            Self::Forecast => 3,
            Self::Statement => 4,
            Self::Advisory => 5,
            Self::Watch => 6,
            Self::Warning => 7,
        }
    }

    /// Whether alerts of this significance can be selected at all.
    pub const fn is_selectable(self) -> bool {
        matches!(self, Self::Warning | Self::Watch | Self::Advisory)
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
