use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::OnceLock};

/// Embedded JSON data for the five supported ocean regions.
pub static REGIONS_JSON: &str = include_str!("../fixtures/regions.json");

/// Identifier for one of the five supported ocean regions.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKey {
    ArabianSea,
    BayOfBengal,
    IndianOcean,
    EquatorialIndian,
    SouthernOcean,
}

impl RegionKey {
    /// All region keys, in catalog order.
    pub const ALL: [RegionKey; 5] = [
        RegionKey::ArabianSea,
        RegionKey::BayOfBengal,
        RegionKey::IndianOcean,
        RegionKey::EquatorialIndian,
        RegionKey::SouthernOcean,
    ];

    /// The wire/CSV form of the key, e.g. `arabian_sea`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionKey::ArabianSea => "arabian_sea",
            RegionKey::BayOfBengal => "bay_of_bengal",
            RegionKey::IndianOcean => "indian_ocean",
            RegionKey::EquatorialIndian => "equatorial_indian",
            RegionKey::SouthernOcean => "southern_ocean",
        }
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by catalog lookups.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum RegionError {
    UnknownRegion(String),
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::UnknownRegion(key) => write!(f, "unknown region: {}", key),
        }
    }
}

impl std::error::Error for RegionError {}

impl FromStr for RegionKey {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arabian_sea" => Ok(RegionKey::ArabianSea),
            "bay_of_bengal" => Ok(RegionKey::BayOfBengal),
            "indian_ocean" => Ok(RegionKey::IndianOcean),
            "equatorial_indian" => Ok(RegionKey::EquatorialIndian),
            "southern_ocean" => Ok(RegionKey::SouthernOcean),
            other => Err(RegionError::UnknownRegion(other.to_string())),
        }
    }
}

/// Bounding box given as south-west and north-east corners.
///
/// Invariant: `south < north`. East/west are region-specific and not
/// normalized for antimeridian crossing; the Southern Ocean spans 0-180
/// by convention.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.south && lat <= self.north && lon >= self.west && lon <= self.east
    }
}

/// A geographic point.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Characteristic averages and descriptive text for a region.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Characteristics {
    /// Average surface temperature in degrees C
    pub avg_temp: f64,
    /// Average salinity in PSU
    pub avg_salinity: f64,
    /// Typical basin depth in meters
    pub depth: u32,
    pub description: String,
    pub currents: String,
    pub features: String,
}

/// Static reference data for one ocean region.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OceanRegion {
    pub key: RegionKey,
    pub name: String,
    pub bounds: BoundingBox,
    pub center: Coordinate,
    /// Display color as a hex string, e.g. `#3b82f6`
    pub color: String,
    pub characteristics: Characteristics,
}

fn catalog() -> &'static [OceanRegion] {
    static CATALOG: OnceLock<Vec<OceanRegion>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(REGIONS_JSON).expect("embedded regions fixture is valid JSON")
    })
}

/// All regions, in catalog order.
pub fn all_regions() -> &'static [OceanRegion] {
    catalog()
}

/// Look up a region by key.
pub fn region(key: RegionKey) -> &'static OceanRegion {
    catalog()
        .iter()
        .find(|r| r.key == key)
        .expect("embedded catalog covers every RegionKey")
}

/// Look up a region by its string key, e.g. `"arabian_sea"`.
///
/// Fails for any key outside the five supported regions. There is no
/// default here; falling back to the Indian Ocean is the classifier's
/// decision, not the catalog's.
pub fn region_by_key(key: &str) -> Result<&'static OceanRegion, RegionError> {
    let parsed: RegionKey = key.parse()?;
    Ok(region(parsed))
}
