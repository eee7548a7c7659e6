// Invariants of a configuration under long random trade sequences.

use gridmander::{
    Configuration, ConfigurationError, District, StepOutcome, Tile, Trade, TradeProposal,
    VoterDistribution, classic, express, snake_districts,
};
use rand::{SeedableRng, rngs::StdRng};

fn always(_: &TradeProposal<'_>) -> f64 { 1.0 }

fn sorted(trades: &[Trade]) -> Vec<Trade> {
    let mut trades = trades.to_vec();
    trades.sort_unstable();
    trades
}

fn assert_consistent(configuration: &Configuration, initial_tiles: usize, sizes: &[usize]) {
    configuration.validate().unwrap();
    assert_eq!(configuration.districts().iter().map(District::len).sum::<usize>(), initial_tiles);
    assert_eq!(configuration.districts().iter().map(District::len).collect::<Vec<_>>(), sizes);
    assert_eq!(sorted(configuration.trades()), sorted(&configuration.compute_all_trades()));
}

/// Trades between districts the swap did not touch stay in place, in order, ahead of the recomputed ones.
fn assert_untouched_trades_kept(before: &[Trade], after: &[Trade], applied: Trade) {
    let (a, b) = applied.districts;
    let kept = before.iter().copied()
        .filter(|trade| !trade.involves(a) && !trade.involves(b))
        .collect::<Vec<_>>();

    assert!(after.len() >= kept.len());
    assert_eq!(&after[..kept.len()], kept.as_slice());
    assert!(after[kept.len()..].iter().all(|trade| trade.involves(a) || trade.involves(b)));
}

fn random_walk(configuration: &mut Configuration, steps: usize, seed: u64) {
    let tiles = configuration.voters().num_tiles();
    let sizes = configuration.districts().iter().map(District::len).collect::<Vec<_>>();
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..steps {
        let before = configuration.trades().to_vec();
        match configuration.iterate(&always, &mut rng).unwrap() {
            StepOutcome::Accepted { trade, .. } => {
                assert_untouched_trades_kept(&before, configuration.trades(), trade);
                assert_consistent(configuration, tiles, &sizes);
            }
            StepOutcome::Rejected { .. } => panic!("always-accept policy rejected a trade"),
            StepOutcome::Exhausted => break,
        }
    }
}

#[test]
fn express_walk_preserves_invariants() {
    let mut configuration = express().unwrap().configuration().unwrap();
    random_walk(&mut configuration, 300, 1);
}

#[test]
fn classic_walk_preserves_invariants() {
    let mut configuration = classic().unwrap().configuration().unwrap();
    random_walk(&mut configuration, 150, 2);
}

#[test]
fn small_snake_walk_preserves_invariants() {
    let voters = VoterDistribution::from_rows(&vec![vec![1, 0, 1, 0, 1, 0]; 4]).unwrap();
    let mut configuration = Configuration::new(snake_districts(4, 6, 6).unwrap(), voters).unwrap();
    for seed in 0..5 {
        random_walk(&mut configuration, 100, seed);
    }
}

#[test]
fn objective_matches_direct_count() {
    let mut configuration = classic().unwrap().configuration().unwrap();
    let mut rng = StdRng::seed_from_u64(9);

    for _ in 0..100 {
        configuration.iterate(&always, &mut rng).unwrap();
        let direct = configuration.districts().iter()
            .filter(|district| {
                let votes = district.iter().map(|&t| configuration.voters().vote(t) as usize).sum::<usize>();
                2 * votes >= district.len()
            })
            .count();
        assert_eq!(configuration.num_districts_one_win_or_tie(), direct);
    }
}

#[test]
fn same_seed_same_walk() {
    let walk = |seed| {
        let mut configuration = express().unwrap().configuration().unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        (0..50).map(|_| configuration.iterate(&always, &mut rng).unwrap()).collect::<Vec<_>>()
    };
    assert_eq!(walk(5), walk(5));
}

#[test]
fn rejects_bad_partitions() {
    let voters = VoterDistribution::from_rows(&[vec![1, 0], vec![0, 1]]).unwrap();
    let district = |list: &[(usize, usize)]| list.iter().map(|&t| Tile::from(t)).collect::<District>();

    let diagonal = Configuration::new(
        vec![district(&[(0, 0), (1, 1)]), district(&[(0, 1), (1, 0)])],
        voters.clone(),
    ).unwrap_err();
    assert!(matches!(
        diagonal.downcast_ref::<ConfigurationError>(),
        Some(ConfigurationError::NonContiguous { index: 0 })
    ));

    let missing = Configuration::new(vec![district(&[(0, 0), (0, 1)])], voters).unwrap_err();
    assert!(matches!(
        missing.downcast_ref::<ConfigurationError>(),
        Some(ConfigurationError::Uncovered { .. })
    ));
}
