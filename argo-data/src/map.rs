//! Map rendering seam.
//!
//! One polymorphic provider interface with a single concrete backend,
//! selected at configuration time. Map consumers get a self-contained
//! document (GeoJSON today) rather than talking to a specific map SDK.

use argo_core::profile::FloatLocation;
use serde_json::json;

/// Renders float locations into a map document.
pub trait MapProvider {
    fn name(&self) -> &'static str;
    fn render(&self, floats: &[FloatLocation]) -> anyhow::Result<String>;
}

/// Available map backends.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum MapBackend {
    #[default]
    GeoJson,
}

impl MapBackend {
    pub fn provider(&self) -> Box<dyn MapProvider> {
        match self {
            MapBackend::GeoJson => Box::new(GeoJsonMap),
        }
    }
}

/// Emits a GeoJSON FeatureCollection of Point features, one per float,
/// carrying id, region, and parameter list as properties.
pub struct GeoJsonMap;

impl MapProvider for GeoJsonMap {
    fn name(&self) -> &'static str {
        "geojson"
    }

    fn render(&self, floats: &[FloatLocation]) -> anyhow::Result<String> {
        let features: Vec<_> = floats
            .iter()
            .map(|f| {
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        // GeoJSON positions are [lon, lat]
                        "coordinates": [f.lon, f.lat],
                    },
                    "properties": {
                        "id": f.id,
                        "region": f.region,
                        "parameters": f.parameters,
                    },
                })
            })
            .collect();

        let collection = json!({
            "type": "FeatureCollection",
            "features": features,
        });
        Ok(serde_json::to_string_pretty(&collection)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argo_core::query::run_query;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_geojson_feature_per_float() {
        let mut rng = StdRng::seed_from_u64(31);
        let result = run_query("equatorial", &mut rng);
        let doc = MapBackend::default()
            .provider()
            .render(&result.float_locations)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(parsed["type"], "FeatureCollection");
        let features = parsed["features"].as_array().unwrap();
        assert_eq!(features.len(), result.float_locations.len());

        let first = &features[0];
        assert_eq!(first["geometry"]["type"], "Point");
        assert_eq!(
            first["geometry"]["coordinates"][0].as_f64().unwrap(),
            result.float_locations[0].lon
        );
        assert_eq!(first["properties"]["region"], "equatorial_indian");
    }

    #[test]
    fn test_empty_collection() {
        let doc = GeoJsonMap.render(&[]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(parsed["features"].as_array().unwrap().len(), 0);
    }
}
