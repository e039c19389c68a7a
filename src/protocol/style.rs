//! Category → style table and phenomenon classification profiles.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Animation, PaletteColor};
use crate::error::Error;
use crate::vtec::{Category, Phenomenon};

/// What the cloud shows for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub animation: Animation,
    pub base: PaletteColor,
    pub highlight: PaletteColor,
}

const fn style(animation: Animation, base: PaletteColor, highlight: PaletteColor) -> Style {
    Style {
        animation,
        base,
        highlight,
    }
}

impl Style {
    /// The one style assigned to `category`.
    pub const fn of(category: Category) -> Self {
        use Animation::{Flood, Precipitation, Pulse, Swirl};
        use PaletteColor::{
            Black, DarkBlue, DarkGray, LightBlue, LightGray, Orange, Red, White, Yellow,
        };

        match category {
            Category::AirQuality => style(Pulse, LightGray, Yellow),
            Category::Cold => style(Pulse, LightGray, DarkBlue),
            Category::Heat => style(Pulse, White, Orange),
            Category::Flood => style(Flood, Black, DarkBlue),
            Category::LowWater => style(Flood, Black, Yellow),
            Category::Marine => style(Flood, DarkBlue, LightBlue),
            Category::Snow => style(Precipitation, Black, White),
            Category::Wind => style(Swirl, DarkGray, LightGray),
            Category::Dust => style(Pulse, LightGray, Yellow),
            Category::Fog => style(Pulse, DarkGray, LightGray),
            Category::Freeze => style(Pulse, LightGray, LightBlue),
            Category::Fire => style(Pulse, Black, Orange),
            Category::Storm => style(Precipitation, DarkBlue, LightBlue),
            Category::Ice => style(Precipitation, Black, LightBlue),
            Category::Smoke => style(Pulse, Black, DarkGray),
            // This one should get some attention
            Category::Tornado => style(Swirl, White, Red),
        }
    }
}

/// Phenomenon → category assignment profile.
///
/// `Standard` keeps every phenomenon's own category. `AirQuality` folds
/// Dense Smoke and Ashfall into AIR_QUALITY, as the earlier cloud
/// generation (which had no SMOKE bucket) did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    #[default]
    Standard,
    AirQuality,
}

impl Classification {
    pub fn categorize(self, phenomenon: Phenomenon) -> Category {
        match (self, phenomenon) {
            (Self::AirQuality, Phenomenon::DenseSmoke | Phenomenon::Ashfall) => {
                Category::AirQuality
            }
            _ => phenomenon.category(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::AirQuality => "air-quality",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Classification {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "air-quality" => Ok(Self::AirQuality),
            other => Err(Error::Config(format!(
                "unknown classification '{other}' (expected standard or air-quality)"
            ))),
        }
    }
}
