use std::path::PathBuf;

/// Monte Carlo district trading on voter grids
#[derive(clap::Parser, Debug)]
#[command(name = "gridmander", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Search the built-in 5x5 scenario (target: 3 of 5 districts)
    Express(SearchArgs),

    /// Search the built-in 10x14 scenario with seven districts
    Classic(SearchArgs),

    /// Search a scenario read from a JSON file
    Run(RunArgs),
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Scenario file: {"voters": [[..]], "districts": [[[row, col], ..]], "stop_at": n}
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub scenario: PathBuf,

    #[command(flatten)]
    pub search: SearchArgs,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyKind {
    /// Accept non-worsening trades, worsening ones with probability p-lower
    Classic,
    /// Metropolis acceptance with geometric cooling
    Anneal,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Maximum number of iterations per chain
    #[arg(short = 'n', long, default_value_t = 10_000)]
    pub iters: usize,

    /// Stop once this many districts are won or tied (overrides the scenario target)
    #[arg(long)]
    pub stop_at: Option<usize>,

    /// Acceptance rule
    #[arg(long, value_enum, default_value_t = PolicyKind::Classic)]
    pub policy: PolicyKind,

    /// Probability of accepting a trade that lowers wins (classic policy)
    #[arg(long, default_value_t = 0.1)]
    pub p_lower: f64,

    /// Starting temperature (anneal policy)
    #[arg(long, default_value_t = 2.0)]
    pub initial_temp: f64,

    /// Final temperature (anneal policy)
    #[arg(long, default_value_t = 0.05)]
    pub final_temp: f64,

    /// RNG seed, random if omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Independent chains to run in parallel
    #[arg(short, long, default_value_t = 1)]
    pub chains: usize,

    /// Write the best configuration as JSON
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
