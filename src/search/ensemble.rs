use anyhow::{Context, Result, ensure};
use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;

use crate::{
    acceptance::AcceptancePolicy,
    configuration::Configuration,
    search::{Search, SearchOutcome, SearchParams},
};

/// Result of several independent chains.
#[derive(Clone, Debug)]
pub struct EnsembleOutcome {
    /// Index of the chain whose result was kept.
    pub chain: usize,
    /// Best objective reached by each chain, by chain index.
    pub chain_best: Vec<usize>,
    /// The winning chain's outcome.
    pub outcome: SearchOutcome,
}

/// Run `chains` independent searches in parallel and keep the best.
///
/// Each chain starts from its own copy of `initial` with its own clone of
/// `policy` and an RNG seeded with `seed + chain`. Ties go to the lowest
/// chain index, so the result depends only on `seed`.
pub fn search_ensemble<P>(
    initial: &Configuration,
    policy: &P,
    params: &SearchParams,
    chains: usize,
    seed: u64,
) -> Result<EnsembleOutcome>
where
    P: AcceptancePolicy + Clone + Send + Sync,
{
    ensure!(chains > 0, "[search_ensemble] need at least one chain");
    params.validate()?;

    let outcomes = (0..chains).into_par_iter()
        .map(|chain| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(chain as u64));
            Search::new(initial.clone(), policy.clone(), params.clone())?
                .run(&mut rng)
                .with_context(|| format!("chain {chain} failed"))
        })
        .collect::<Result<Vec<_>>>()?;

    let chain_best = outcomes.iter().map(|outcome| outcome.best_wins).collect::<Vec<_>>();
    let (chain, outcome) = outcomes.into_iter().enumerate()
        .max_by(|(i, a), (j, b)| a.best_wins.cmp(&b.best_wins).then(j.cmp(i)))
        .context("[search_ensemble] no chain produced a result")?;

    tracing::info!(chains, chain, best = outcome.best_wins, "ensemble finished");
    Ok(EnsembleOutcome { chain, chain_best, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{acceptance::Classic, district::District, grid::{Tile, VoterDistribution}};

    fn configuration() -> Configuration {
        let district = |list: &[(usize, usize)]| list.iter().map(|&t| Tile::from(t)).collect::<District>();
        Configuration::new(
            vec![
                district(&[(0, 0), (0, 1), (0, 2)]),
                district(&[(1, 0), (1, 1), (1, 2)]),
                district(&[(2, 0), (2, 1), (2, 2)]),
            ],
            VoterDistribution::from_rows(&[vec![1, 1, 0], vec![0, 0, 1], vec![1, 0, 0]]).unwrap(),
        ).unwrap()
    }

    #[test]
    fn keeps_best_chain() {
        let params = SearchParams::new(300);
        let result = search_ensemble(&configuration(), &Classic::default(), &params, 4, 17).unwrap();
        assert_eq!(result.chain_best.len(), 4);
        assert_eq!(result.outcome.best_wins, *result.chain_best.iter().max().unwrap());
        assert_eq!(result.chain_best[result.chain], result.outcome.best_wins);
        assert!(result.chain_best[..result.chain].iter().all(|&wins| wins < result.outcome.best_wins));
        assert!(result.outcome.best.validate().is_ok());
    }

    #[test]
    fn same_seed_same_result() {
        let params = SearchParams::new(200);
        let a = search_ensemble(&configuration(), &Classic::default(), &params, 3, 5).unwrap();
        let b = search_ensemble(&configuration(), &Classic::default(), &params, 3, 5).unwrap();
        assert_eq!(a.chain, b.chain);
        assert_eq!(a.chain_best, b.chain_best);
        assert_eq!(a.outcome.best.districts(), b.outcome.best.districts());
    }

    #[test]
    fn zero_chains_is_an_error() {
        assert!(search_ensemble(&configuration(), &Classic::default(), &SearchParams::new(10), 0, 0).is_err());
    }
}
