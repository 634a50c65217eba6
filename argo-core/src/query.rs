use crate::classify::classify;
use crate::generate::{generate_profiles, QUERY_BACKDATE_DAYS};
use crate::profile::{FloatLocation, FloatProfile};
use crate::region::{region, RegionKey};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Base profile count is drawn uniformly from this range before the
/// classifier's scale factor is applied.
pub const BASE_COUNT_MIN: u32 = 8;
pub const BASE_COUNT_MAX: u32 = 19;

/// Headline statistics for one query.
///
/// The averages are the region's characteristic values plus jitter, NOT
/// aggregates of the generated curves; the two are intentionally
/// independent.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct QuerySummary {
    pub avg_temperature: f64,
    pub avg_salinity: f64,
    pub count: usize,
    pub region: RegionKey,
}

/// Everything a query produces: the profiles, their map projections, and
/// the summary record. Fresh per query; a new query supersedes, never
/// merges.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub profiles: Vec<FloatProfile>,
    pub float_locations: Vec<FloatLocation>,
    pub summary: QuerySummary,
}

/// Run a free-text query: classify, generate scaled profile count, project
/// float locations, and synthesize the summary.
pub fn run_query(text: &str, rng: &mut impl Rng) -> QueryResult {
    let classification = classify(text);
    let base = rng.random_range(BASE_COUNT_MIN..=BASE_COUNT_MAX);
    let count = (base as f64 * classification.scale).floor() as usize;
    debug!(
        "query resolved to {} (scale {}, base {}, count {})",
        classification.region, classification.scale, base, count
    );

    let profiles = generate_profiles(classification.region, count, QUERY_BACKDATE_DAYS, rng);
    let float_locations: Vec<FloatLocation> =
        profiles.iter().map(FloatProfile::location_summary).collect();

    let characteristics = &region(classification.region).characteristics;
    let summary = QuerySummary {
        avg_temperature: characteristics.avg_temp + rng.random_range(-1.0..1.0),
        avg_salinity: characteristics.avg_salinity + rng.random_range(-0.25..0.25),
        count,
        region: classification.region,
    };

    QueryResult {
        profiles,
        float_locations,
        summary,
    }
}

/// [`run_query`] with the process-wide random source.
pub fn run_query_now(text: &str) -> QueryResult {
    run_query(text, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_arabian_sea_end_to_end() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = run_query("Show temperature profiles in Arabian Sea", &mut rng);
            assert_eq!(result.summary.region, RegionKey::ArabianSea);
            // count = floor(base * 0.7) with base in 8..=19
            assert!(result.summary.count >= 5 && result.summary.count <= 13);
            assert_eq!(result.profiles.len(), result.summary.count);
            for p in &result.profiles {
                assert!((8.0..=27.0).contains(&p.lat));
                assert!((50.0..=80.0).contains(&p.lon));
            }
        }
    }

    #[test]
    fn test_empty_query_defaults_to_indian_ocean() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = run_query("", &mut rng);
        assert_eq!(result.summary.region, RegionKey::IndianOcean);
        // scale 1.0: count equals the unscaled base draw
        assert!(result.summary.count >= 8 && result.summary.count <= 19);
    }

    #[test]
    fn test_locations_mirror_profiles() {
        let mut rng = StdRng::seed_from_u64(2);
        let result = run_query("bengal", &mut rng);
        assert_eq!(result.float_locations.len(), result.profiles.len());
        for (loc, p) in result.float_locations.iter().zip(&result.profiles) {
            assert_eq!(loc.id, p.float_id);
            assert_eq!(loc.lat, p.lat);
            assert_eq!(loc.lon, p.lon);
            assert_eq!(loc.region, p.region);
        }
    }

    #[test]
    fn test_summary_jitter_bounds() {
        let characteristics = &region(RegionKey::SouthernOcean).characteristics;
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = run_query("southern ocean salinity", &mut rng);
            assert!((result.summary.avg_temperature - characteristics.avg_temp).abs() <= 1.0);
            assert!((result.summary.avg_salinity - characteristics.avg_salinity).abs() <= 0.25);
        }
    }

    #[test]
    fn test_regeneration_is_fresh() {
        // Same query, same rng stream: results differ because every call
        // consumes fresh randomness.
        let mut rng = StdRng::seed_from_u64(9);
        let a = run_query("indian ocean", &mut rng);
        let b = run_query("indian ocean", &mut rng);
        assert_ne!(a, b);
    }
}
