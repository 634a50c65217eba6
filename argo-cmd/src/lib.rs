//! Command implementations for the ARGO CLI.
//!
//! Provides subcommands for running free-text queries against the
//! synthetic profile engine, exporting results, and browsing the region
//! catalog.

use clap::Subcommand;

pub mod chat;
pub mod query;

#[derive(Subcommand)]
pub enum Command {
    /// Run a free-text query and print the narrative response
    Query {
        /// Query text, e.g. "Show temperature profiles in Arabian Sea"
        text: String,

        /// Write the profiles as flat CSV (one row per float and depth sample)
        #[arg(long)]
        csv: Option<String>,

        /// Write the full result as pretty-printed JSON
        #[arg(long)]
        json: Option<String>,

        /// Write float locations as a GeoJSON map document
        #[arg(long)]
        map: Option<String>,

        /// Seed the generator for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate the year-long reference dataset across all five regions
    Dataset {
        /// Output CSV path
        #[arg(short = 'o', long)]
        output: String,

        /// Seed the generator for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the supported ocean regions and their characteristics
    Regions,

    /// Interactive chat: each line of input is a query
    Chat {
        /// Seed the generator for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Query {
            text,
            csv,
            json,
            map,
            seed,
        } => query::run_query(&text, csv.as_deref(), json.as_deref(), map.as_deref(), seed),
        Command::Dataset { output, seed } => query::run_dataset(&output, seed),
        Command::Regions => query::run_regions(),
        Command::Chat { seed } => chat::run_chat(seed),
    }
}
