use crate::profile::FloatProfile;
use crate::region::{region, RegionKey};
use crate::synth::{synthesize_depth_profile, Parameter};
use chrono::{Duration, Utc};
use log::debug;
use rand::Rng;

/// How far back an ad-hoc query may date its observations, in days.
pub const QUERY_BACKDATE_DAYS: u32 = 90;

/// Backdating window for the static reference dataset, in days.
pub const DATASET_BACKDATE_DAYS: u32 = 365;

/// Synthetic WMO float ids are `WMO` + (base + U[0, range)).
const WMO_ID_BASE: u32 = 5_900_000;
const WMO_ID_RANGE: u32 = 10_000;

/// Reference dataset float counts per region.
const DATASET_COUNT_INDIAN: usize = 20;
const DATASET_COUNT_OTHER: usize = 15;

/// Generate `count` float profiles inside the given region.
///
/// Locations are sampled uniformly inside the region's bounding box and
/// observation times are backdated up to `backdate_days` from now. A count
/// of zero yields an empty vector.
pub fn generate_profiles(
    key: RegionKey,
    count: usize,
    backdate_days: u32,
    rng: &mut impl Rng,
) -> Vec<FloatProfile> {
    let ocean = region(key);
    let now = Utc::now().naive_utc();
    let backdate_secs = backdate_days as f64 * 86_400.0;

    let mut profiles = Vec::with_capacity(count);
    for _ in 0..count {
        let float_id = format!("WMO{}", WMO_ID_BASE + rng.random_range(0..WMO_ID_RANGE));
        let lat = rng.random_range(ocean.bounds.south..ocean.bounds.north);
        let lon = rng.random_range(ocean.bounds.west..ocean.bounds.east);
        let age_secs = if backdate_secs > 0.0 {
            rng.random_range(0.0..backdate_secs)
        } else {
            0.0
        };
        let age = Duration::seconds(age_secs as i64);

        profiles.push(FloatProfile {
            float_id,
            date: now - age,
            lat,
            lon,
            temperature: synthesize_depth_profile(Parameter::Temperature, ocean, rng),
            salinity: synthesize_depth_profile(Parameter::Salinity, ocean, rng),
            region: key,
        });
    }
    debug!("generated {} profiles for {}", profiles.len(), key);
    profiles
}

/// Generate the year-long reference dataset covering all five regions:
/// 20 floats for the Indian Ocean, 15 for each other region, observation
/// dates spread over the last 365 days.
pub fn reference_dataset(rng: &mut impl Rng) -> Vec<FloatProfile> {
    let mut profiles = Vec::new();
    for key in RegionKey::ALL {
        let count = if key == RegionKey::IndianOcean {
            DATASET_COUNT_INDIAN
        } else {
            DATASET_COUNT_OTHER
        };
        profiles.extend(generate_profiles(key, count, DATASET_BACKDATE_DAYS, rng));
    }
    profiles
}
