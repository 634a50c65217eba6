use crate::query::QueryResult;
use crate::region::region;
use std::fmt::Write;

/// Fixed response when a query resolves to zero profiles.
pub const NO_DATA_MESSAGE: &str = "I couldn't find any ARGO data matching your criteria. \
     Try adjusting your query or selecting a different ocean region.";

/// Render a query result as the chat narrative: profile count, summary
/// statistics, and the region's characteristics, with fixed label text.
pub fn format_narrative(result: &QueryResult) -> String {
    if result.profiles.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let ocean = region(result.summary.region);
    let c = &ocean.characteristics;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "Found {} ARGO profiles in the {}!",
        result.profiles.len(),
        ocean.name
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Data Summary:");
    let _ = writeln!(
        out,
        "- Average Temperature: {:.1}\u{b0}C",
        result.summary.avg_temperature
    );
    let _ = writeln!(out, "- Average Salinity: {:.2} PSU", result.summary.avg_salinity);
    let _ = writeln!(out, "- Ocean Depth: ~{}m", c.depth);
    let _ = writeln!(out);
    let _ = writeln!(out, "Ocean Characteristics:");
    let _ = writeln!(out, "{}", c.description);
    let _ = writeln!(out, "- Main Currents: {}", c.currents);
    let _ = writeln!(out, "- Key Features: {}", c.features);
    let _ = writeln!(out);
    let _ = write!(
        out,
        "Each float provides detailed temperature and salinity profiles \
         from surface to 2000m depth."
    );

    out
}
