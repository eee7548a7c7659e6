mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::search;
use tracing_subscriber::EnvFilter;

fn enable_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_target(false)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    enable_tracing(cli.verbose);

    match &cli.command {
        Commands::Express(args) => search::run(&cli, gridmander::express()?, args),
        Commands::Classic(args) => search::run(&cli, gridmander::classic()?, args),
        Commands::Run(args) => search::run(&cli, gridmander::Scenario::read_json(&args.scenario)?, &args.search),
    }
}

fn main() -> anyhow::Result<()> { run() }
