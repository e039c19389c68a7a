//! Phenomenon categories.

use core::fmt;

/// Our own grouping of VTEC phenomena into style buckets.
///
/// Each category maps to exactly one [`Style`](crate::protocol::Style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    AirQuality,
    Cold,
    Heat,
    Flood,
    /// A flood of muddy water.
    LowWater,
    /// Blue waves rippling.
    Marine,
    Snow,
    Wind,
    Dust,
    Fog,
    Freeze,
    Fire,
    Storm,
    Ice,
    Smoke,
    Tornado,
}

impl Category {
    /// Every category, in table order.
    pub const ALL: [Self; 16] = [
        Self::AirQuality,
        Self::Cold,
        Self::Heat,
        Self::Flood,
        Self::LowWater,
        Self::Marine,
        Self::Snow,
        Self::Wind,
        Self::Dust,
        Self::Fog,
        Self::Freeze,
        Self::Fire,
        Self::Storm,
        Self::Ice,
        Self::Smoke,
        Self::Tornado,
    ];

    /// Upper-snake name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AirQuality => "AIR_QUALITY",
            Self::Cold => "COLD",
            Self::Heat => "HEAT",
            Self::Flood => "FLOOD",
            Self::LowWater => "LOW_WATER",
            Self::Marine => "MARINE",
            Self::Snow => "SNOW",
            Self::Wind => "WIND",
            Self::Dust => "DUST",
            Self::Fog => "FOG",
            Self::Freeze => "FREEZE",
            Self::Fire => "FIRE",
            Self::Storm => "STORM",
            Self::Ice => "ICE",
            Self::Smoke => "SMOKE",
            Self::Tornado => "TORNADO",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
