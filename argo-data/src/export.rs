//! CSV and JSON export of query results.
//!
//! The CSV layout is flat: one row per depth sample per float, with the
//! temperature and salinity curves paired by sample index.

use argo_core::profile::FloatProfile;
use argo_core::query::QueryResult;
use argo_core::region::RegionKey;
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use log::debug;
use serde::{Deserialize, Serialize};

/// One exported CSV row.
///
/// Columns: `float_id,date,lat,lon,depth,temperature,salinity,ocean`,
/// date as "YYYY-MM-DD", lat/lon rounded to 4 decimals.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CsvRow {
    pub float_id: String,
    pub date: NaiveDate,
    pub lat: f64,
    pub lon: f64,
    pub depth: u32,
    pub temperature: f64,
    pub salinity: f64,
    pub ocean: RegionKey,
}

/// Serialize profiles to CSV, one row per (float, depth sample).
pub fn profiles_to_csv(profiles: &[FloatProfile]) -> anyhow::Result<String> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    for profile in profiles {
        let date = profile.date.date();
        for (temp, sal) in profile.temperature.iter().zip(&profile.salinity) {
            wtr.serialize(CsvRow {
                float_id: profile.float_id.clone(),
                date,
                lat: round4(profile.lat),
                lon: round4(profile.lon),
                depth: temp.depth,
                temperature: temp.value,
                salinity: sal.value,
                ocean: profile.region,
            })?;
        }
    }
    debug!(
        "serialized {} floats to {} CSV rows",
        profiles.len(),
        profiles.len() * argo_core::profile::SAMPLES_PER_PROFILE
    );
    Ok(String::from_utf8(wtr.into_inner()?)?)
}

/// Serialize a full query result to CSV.
pub fn to_csv(result: &QueryResult) -> anyhow::Result<String> {
    profiles_to_csv(&result.profiles)
}

/// Parse exported CSV back into rows.
pub fn from_csv(data: &str) -> anyhow::Result<Vec<CsvRow>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(data.as_bytes());
    let mut rows = Vec::new();
    for row in rdr.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Serialize a full query result as pretty-printed JSON.
pub fn to_json(result: &QueryResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
