//! Query, dataset, and catalog command implementations.

use argo_core::generate::reference_dataset;
use argo_core::narrative::format_narrative;
use argo_core::region::all_regions;
use argo_data::export;
use argo_data::map::MapBackend;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

/// Build the generator RNG: seeded when requested, OS-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Run one query, print the narrative, and write any requested exports.
pub fn run_query(
    text: &str,
    csv: Option<&str>,
    json: Option<&str>,
    map: Option<&str>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let mut rng = rng_from_seed(seed);
    let result = argo_core::query::run_query(text, &mut rng);
    info!(
        "query resolved to {} with {} profiles",
        result.summary.region, result.summary.count
    );

    println!("{}", format_narrative(&result));

    if let Some(path) = csv {
        std::fs::write(path, export::to_csv(&result)?)?;
        info!("wrote CSV export to {}", path);
    }
    if let Some(path) = json {
        std::fs::write(path, export::to_json(&result)?)?;
        info!("wrote JSON export to {}", path);
    }
    if let Some(path) = map {
        let provider = MapBackend::default().provider();
        std::fs::write(path, provider.render(&result.float_locations)?)?;
        info!("wrote {} map document to {}", provider.name(), path);
    }

    Ok(())
}

/// Generate the 365-day reference dataset and write it as CSV.
pub fn run_dataset(output: &str, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = rng_from_seed(seed);
    let profiles = reference_dataset(&mut rng);
    std::fs::write(output, export::profiles_to_csv(&profiles)?)?;
    info!(
        "reference dataset complete: {} floats written to {}",
        profiles.len(),
        output
    );
    Ok(())
}

/// Print the region catalog.
pub fn run_regions() -> anyhow::Result<()> {
    for region in all_regions() {
        let c = &region.characteristics;
        println!(
            "{:<18} {:<24} lat [{}, {}] lon [{}, {}]  avg {:.1}\u{b0}C / {:.1} PSU",
            region.key,
            region.name,
            region.bounds.south,
            region.bounds.north,
            region.bounds.west,
            region.bounds.east,
            c.avg_temp,
            c.avg_salinity,
        );
    }
    Ok(())
}
