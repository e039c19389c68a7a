//! P-VTEC phenomenon (`pp` field) table.

use core::fmt;

use super::Category;

/// A weather phenomenon as identified by its two-letter VTEC code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phenomenon {
    Ashfall,
    AirStagnation,
    BlowingSnow,
    BriskWind,
    Blizzard,
    CoastalFlood,
    DustStorm,
    BlowingDust,
    ExtremeCold,
    ExcessiveHeat,
    ExtremeWind,
    ArealFlood,
    FlashFlood,
    DenseFog,
    Flood,
    Frost,
    FireWeather,
    Freeze,
    Gale,
    HurricaneForceWind,
    InlandHurricane,
    HeavySnow,
    Heat,
    Hurricane,
    HighWind,
    Hydrologic,
    HardFreeze,
    Sleet,
    IceStorm,
    LakeEffectSnowAndBlowingSnow,
    LakeEffectSnow,
    LowWater,
    LakeshoreFlood,
    LakeWind,
    Marine,
    SmallCraftForRoughBar,
    SnowAndBlowingSnow,
    SmallCraft,
    HazardousSeas,
    SmallCraftForWinds,
    DenseSmoke,
    Snow,
    Storm,
    HighSurf,
    SevereThunderstorm,
    SmallCraftForHazardousSeas,
    InlandTropicalStorm,
    Tornado,
    TropicalStorm,
    Tsunami,
    Typhoon,
    IceAccretion,
    WindChill,
    Wind,
    WinterStorm,
    WinterWeather,
    FreezingFog,
    FreezingRain,
}

#[derive(Clone, Copy)]
struct Entry {
    code: &'static str,
    description: &'static str,
    category: Category,
}

const fn entry(code: &'static str, description: &'static str, category: Category) -> Entry {
    Entry {
        code,
        description,
        category,
    }
}

impl Phenomenon {
    /// Every known phenomenon, ordered by code.
    pub const ALL: [Self; 58] = [
        Self::Ashfall,
        Self::AirStagnation,
        Self::BlowingSnow,
        Self::BriskWind,
        Self::Blizzard,
        Self::CoastalFlood,
        Self::DustStorm,
        Self::BlowingDust,
        Self::ExtremeCold,
        Self::ExcessiveHeat,
        Self::ExtremeWind,
        Self::ArealFlood,
        Self::FlashFlood,
        Self::DenseFog,
        Self::Flood,
        Self::Frost,
        Self::FireWeather,
        Self::Freeze,
        Self::Gale,
        Self::HurricaneForceWind,
        Self::InlandHurricane,
        Self::HeavySnow,
        Self::Heat,
        Self::Hurricane,
        Self::HighWind,
        Self::Hydrologic,
        Self::HardFreeze,
        Self::Sleet,
        Self::IceStorm,
        Self::LakeEffectSnowAndBlowingSnow,
        Self::LakeEffectSnow,
        Self::LowWater,
        Self::LakeshoreFlood,
        Self::LakeWind,
        Self::Marine,
        Self::SmallCraftForRoughBar,
        Self::SnowAndBlowingSnow,
        Self::SmallCraft,
        Self::HazardousSeas,
        Self::SmallCraftForWinds,
        Self::DenseSmoke,
        Self::Snow,
        Self::Storm,
        Self::HighSurf,
        Self::SevereThunderstorm,
        Self::SmallCraftForHazardousSeas,
        Self::InlandTropicalStorm,
        Self::Tornado,
        Self::TropicalStorm,
        Self::Tsunami,
        Self::Typhoon,
        Self::IceAccretion,
        Self::WindChill,
        Self::Wind,
        Self::WinterStorm,
        Self::WinterWeather,
        Self::FreezingFog,
        Self::FreezingRain,
    ];

    /// Resolve a two-letter VTEC phenomenon code.
    pub fn from_vtec(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Every known phenomenon, ordered by code.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Adding a phenomenon is a new variant plus its arm here.
    const fn entry(self) -> Entry {
        match self {
            Self::Ashfall => entry("AF", "Ashfall", Category::Smoke),
            Self::AirStagnation => entry("AS", "Air Stagnation", Category::AirQuality),
            Self::BlowingSnow => entry("BS", "Blowing Snow", Category::Snow),
            Self::BriskWind => entry("BW", "Brisk Wind", Category::Wind),
            Self::Blizzard => entry("BZ", "Blizzard", Category::Snow),
            Self::CoastalFlood => entry("CF", "Coastal Flood", Category::Flood),
            Self::DustStorm => entry("DS", "Dust Storm", Category::Dust),
            Self::BlowingDust => entry("DU", "Blowing Dust", Category::Dust),
            Self::ExtremeCold => entry("EC", "Extreme Cold", Category::Cold),
            Self::ExcessiveHeat => entry("EH", "Excessive Heat", Category::Heat),
            Self::ExtremeWind => entry("EW", "Extreme Wind", Category::Wind),
            Self::ArealFlood => entry("FA", "Areal Flood", Category::Flood),
            Self::FlashFlood => entry("FF", "Flash Flood", Category::Flood),
            Self::DenseFog => entry("FG", "Dense Fog", Category::Fog),
            Self::Flood => entry("FL", "Flood", Category::Flood),
            Self::Frost => entry("FR", "Frost", Category::Freeze),
            Self::FireWeather => entry("FW", "Fire Weather", Category::Fire),
            Self::Freeze => entry("FZ", "Freeze", Category::Freeze),
            Self::Gale => entry("GL", "Gale", Category::Wind),
            Self::HurricaneForceWind => entry("HF", "Hurricane Force Wind", Category::Wind),
            Self::InlandHurricane => entry("HI", "Inland Hurricane", Category::Wind),
            Self::HeavySnow => entry("HS", "Heavy Snow", Category::Snow),
            Self::Heat => entry("HT", "Heat", Category::Heat),
            Self::Hurricane => entry("HU", "Hurricane", Category::Storm),
            Self::HighWind => entry("HW", "High Wind", Category::Wind),
            Self::Hydrologic => entry("HY", "Hydrologic", Category::Flood),
            Self::HardFreeze => entry("HZ", "Hard Freeze", Category::Freeze),
            Self::Sleet => entry("IP", "Sleet", Category::Ice),
            Self::IceStorm => entry("IS", "Ice Storm", Category::Ice),
            Self::LakeEffectSnowAndBlowingSnow => entry("LB", "Lake Effect Snow and Blowing Snow", Category::Snow),
            Self::LakeEffectSnow => entry("LE", "Lake Effect Snow", Category::Snow),
            Self::LowWater => entry("LO", "Low Water", Category::LowWater),
            Self::LakeshoreFlood => entry("LS", "Lakeshore Flood", Category::Flood),
            Self::LakeWind => entry("LW", "Lake Wind", Category::Wind),
            Self::Marine => entry("MA", "Marine", Category::Marine),
            Self::SmallCraftForRoughBar => entry("RB", "Small Craft for Rough Bar", Category::Marine),
            Self::SnowAndBlowingSnow => entry("SB", "Snow and Blowing Snow", Category::Snow),
            Self::SmallCraft => entry("SC", "Small Craft", Category::Marine),
            Self::HazardousSeas => entry("SE", "Hazardous Seas", Category::Marine),
            Self::SmallCraftForWinds => entry("SI", "Small Craft for Winds", Category::Marine),
            Self::DenseSmoke => entry("SM", "Dense Smoke", Category::Smoke),
            Self::Snow => entry("SN", "Snow", Category::Snow),
            Self::Storm => entry("SR", "Storm", Category::Storm),
            Self::HighSurf => entry("SU", "High Surf", Category::Marine),
            Self::SevereThunderstorm => entry("SV", "Severe Thunderstorm", Category::Storm),
            Self::SmallCraftForHazardousSeas => entry("SW", "Small Craft for Hazardous Seas", Category::Marine),
            Self::InlandTropicalStorm => entry("TI", "Inland Tropical Storm", Category::Storm),
            Self::Tornado => entry("TO", "Tornado", Category::Tornado),
            Self::TropicalStorm => entry("TR", "Tropical Storm", Category::Storm),
            Self::Tsunami => entry("TS", "Tsunami", Category::Marine),
            Self::Typhoon => entry("TY", "Typhoon", Category::Storm),
            Self::IceAccretion => entry("UP", "Ice Accretion", Category::Ice),
            Self::WindChill => entry("WC", "Wind Chill", Category::Cold),
            Self::Wind => entry("WI", "Wind", Category::Wind),
            Self::WinterStorm => entry("WS", "Winter Storm", Category::Storm),
            Self::WinterWeather => entry("WW", "Winter Weather", Category::Ice),
            Self::FreezingFog => entry("ZF", "Freezing Fog", Category::Ice),
            Self::FreezingRain => entry("ZR", "Freezing Rain", Category::Ice),
        }
    }

    pub fn code(self) -> &'static str {
        self.entry().code
    }

    pub fn description(self) -> &'static str {
        self.entry().description
    }

    /// The phenomenon's own category. A [`Classification`] profile may
    /// reassign it before styling.
    ///
    /// [`Classification`]: crate::protocol::Classification
    pub fn category(self) -> Category {
        self.entry().category
    }
}

impl fmt::Display for Phenomenon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
