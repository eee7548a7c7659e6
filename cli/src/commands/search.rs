use std::fs;

use anyhow::{Context, Result, ensure};
use gridmander::{AcceptancePolicy, Annealing, Classic, Scenario, SearchParams, search_ensemble};

use crate::cli::{Cli, PolicyKind, SearchArgs};

pub fn run(cli: &Cli, scenario: Scenario, args: &SearchArgs) -> Result<()> {
    ensure!((0.0..=1.0).contains(&args.p_lower), "[search] --p-lower must lie in [0, 1]");
    ensure!(args.initial_temp > 0.0 && args.final_temp > 0.0, "[search] temperatures must be positive");

    match args.policy {
        PolicyKind::Classic => run_with(cli, scenario, args, Classic::new(args.p_lower)),
        PolicyKind::Anneal => {
            let policy = Annealing::new(args.initial_temp, args.final_temp, args.iters);
            run_with(cli, scenario, args, policy)
        }
    }
}

fn run_with<P>(cli: &Cli, scenario: Scenario, args: &SearchArgs, policy: P) -> Result<()>
where
    P: AcceptancePolicy + Clone + Send + Sync,
{
    let configuration = scenario.configuration()?;
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut params = SearchParams::new(args.iters).with_verbose(true);
    if let Some(stop_at) = args.stop_at.or(scenario.stop_at) {
        params = params.with_stop_at(stop_at);
    }

    println!(
        "[search] scenario '{}': {}x{} grid, {} districts, {} legal trades",
        scenario.name,
        configuration.voters().rows(),
        configuration.voters().cols(),
        configuration.len(),
        configuration.trades().len(),
    );
    println!("[search] initial plan wins or ties {} districts", configuration.num_districts_one_win_or_tie());
    if cli.verbose > 0 { println!("{configuration}") }

    println!("[search] running {} chain(s) with {} policy, seed {seed}", args.chains, policy.name());
    let result = search_ensemble(&configuration, &policy, &params, args.chains, seed)?;
    let outcome = &result.outcome;

    println!(
        "[search] chain {} stopped ({}) after {} iterations, {} accepted",
        result.chain, outcome.stop_reason, outcome.iterations, outcome.accepted,
    );
    println!("[search] best plan wins or ties {} of {} districts", outcome.best_wins, outcome.best.len());
    print!("{}", outcome.best);

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&outcome.best.summary())?;
        fs::write(path, json).with_context(|| format!("[search] failed to write {}", path.display()))?;
        println!("[search] wrote best plan to {}", path.display());
    }

    Ok(())
}
