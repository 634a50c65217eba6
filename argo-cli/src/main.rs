//! argo-cli - command line tool for synthetic ARGO float profile data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "argo-cli",
    version,
    about = "Synthetic ARGO float profile toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: argo_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    argo_cmd::run(cli.command)
}
