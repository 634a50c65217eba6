use crate::region::RegionKey;

/// Result of classifying a free-text query: the target region and the
/// multiplier applied to the base profile count.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Classification {
    pub region: RegionKey,
    pub scale: f64,
}

/// Ordered keyword rules; the first matching rule wins.
///
/// Order is load-bearing: "southern ocean" must be checked before the
/// generic "indian ocean" rule, and region phrases share substrings with
/// one another. Do not reorder.
const RULES: &[(&[&str], RegionKey, f64)] = &[
    (&["arabian sea", "arabian"], RegionKey::ArabianSea, 0.7),
    (&["bay of bengal", "bengal"], RegionKey::BayOfBengal, 0.8),
    (&["equator", "equatorial"], RegionKey::EquatorialIndian, 0.9),
    (
        &["southern ocean", "southern", "antarctic"],
        RegionKey::SouthernOcean,
        0.6,
    ),
    (&["indian ocean", "indian"], RegionKey::IndianOcean, 1.0),
];

/// Classify a free-text query by case-insensitive substring matching.
///
/// Queries matching no rule (including the empty string) fall back to the
/// Indian Ocean at full scale.
pub fn classify(query: &str) -> Classification {
    let lower = query.to_lowercase();
    for (keywords, region, scale) in RULES {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return Classification {
                region: *region,
                scale: *scale,
            };
        }
    }
    Classification {
        region: RegionKey::IndianOcean,
        scale: 1.0,
    }
}
