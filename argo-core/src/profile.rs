use crate::region::RegionKey;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Depth spacing between consecutive samples, in meters.
pub const DEPTH_STEP: u32 = 25;

/// Deepest sample of a profile, in meters.
pub const MAX_DEPTH: u32 = 2000;

/// Samples per profile: 0, 25, ..., 2000.
pub const SAMPLES_PER_PROFILE: usize = (MAX_DEPTH / DEPTH_STEP) as usize + 1;

/// Quality flag for good data. The only flag this synthetic system emits;
/// reserved for real QC codes.
pub const QC_GOOD: u8 = 1;

/// Parameters every synthetic float reports.
pub const FLOAT_PARAMETERS: [&str; 3] = ["temperature", "salinity", "pressure"];

/// A single measurement at depth.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct DepthSample {
    /// Depth in meters, a multiple of 25 in 0..=2000
    pub depth: u32,
    /// Measured value in parameter-specific units, rounded to 2 decimals
    pub value: f64,
    /// Quality flag, always [`QC_GOOD`] here
    pub qc: u8,
}

/// One synthetic ARGO float profile: position, date, and full temperature
/// and salinity curves from the surface to 2000m.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FloatProfile {
    /// `WMO` + 7-digit number. Ids are drawn from a small range and not
    /// deduplicated, so collisions within a batch are possible; display
    /// only, not an identity key.
    pub float_id: String,
    pub date: NaiveDateTime,
    pub lat: f64,
    pub lon: f64,
    pub temperature: Vec<DepthSample>,
    pub salinity: Vec<DepthSample>,
    pub region: RegionKey,
}

/// Projection of a profile for map consumers.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FloatLocation {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub parameters: Vec<String>,
    pub region: RegionKey,
}

impl FloatProfile {
    /// Project this profile to its map summary.
    pub fn location_summary(&self) -> FloatLocation {
        FloatLocation {
            id: self.float_id.clone(),
            lat: self.lat,
            lon: self.lon,
            parameters: FLOAT_PARAMETERS.iter().map(|p| p.to_string()).collect(),
            region: self.region,
        }
    }
}

impl Eq for FloatProfile {}

impl Ord for FloatProfile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.float_id.cmp(&other.float_id))
    }
}

impl PartialOrd for FloatProfile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
