//! Interactive chat loop over stdin.

use argo_core::narrative::format_narrative;
use argo_data::session::{Session, UserLocation};
use log::debug;
use std::io::{self, BufRead, Write};

use crate::query::rng_from_seed;

/// Run the chat REPL: each line is a query, answered with the narrative.
/// `exit`, `quit`, or EOF ends the session.
pub fn run_chat(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = rng_from_seed(seed);
    let mut session = Session::new();
    let home = UserLocation::default();

    println!("ARGO float explorer. Ask about a region, e.g. \"salinity in the Bay of Bengal\".");
    println!(
        "Map centered at {:.4}\u{b0}N {:.4}\u{b0}E until a query resolves. Type 'exit' to quit.",
        home.lat, home.lon
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("exit") || text.eq_ignore_ascii_case("quit") {
            break;
        }

        session.push_user(text);
        let result = argo_core::query::run_query(text, &mut rng);
        let narrative = format_narrative(&result);
        session.record_response(&narrative, result);

        println!("{}\n", narrative);
    }

    debug!("chat ended after {} messages", session.messages().len());
    Ok(())
}
