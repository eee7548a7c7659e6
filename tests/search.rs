// End-to-end searches over the built-in scenarios.

use gridmander::{
    Annealing, Classic, Scenario, Search, SearchParams, SearchState, StopReason, classic, express,
    search_configurations, search_ensemble,
};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn express_reaches_target() {
    let scenario = express().unwrap();
    let params = SearchParams::new(20_000).with_stop_at(3);
    let mut rng = StdRng::seed_from_u64(42);

    let outcome = search_configurations(scenario.configuration().unwrap(), Classic::default(), &params, &mut rng).unwrap();
    assert_eq!(outcome.stop_reason, StopReason::Target);
    assert!(outcome.best_wins >= 3);
    assert_eq!(outcome.best.num_districts_one_win_or_tie(), outcome.best_wins);
    outcome.best.validate().unwrap();
}

#[test]
fn best_never_decreases() {
    let configuration = classic().unwrap().configuration().unwrap();
    let initial = configuration.num_districts_one_win_or_tie();
    let mut search = Search::new(configuration, Classic::new(0.3), SearchParams::new(500)).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    let mut best = search.best_wins();
    assert_eq!(best, initial);
    while search.step(&mut rng).unwrap() == SearchState::Running {
        assert!(search.best_wins() >= best);
        assert!(search.best_wins() >= search.current().num_districts_one_win_or_tie());
        assert_eq!(search.best().num_districts_one_win_or_tie(), search.best_wins());
        best = search.best_wins();
    }

    assert_eq!(search.state(), SearchState::Done(StopReason::Budget));
    assert_eq!(search.iterations(), 500);
}

#[test]
fn annealing_search_is_valid() {
    let configuration = classic().unwrap().configuration().unwrap();
    let initial = configuration.num_districts_one_win_or_tie();
    let policy = Annealing::new(2.0, 0.05, 2_000);
    let mut rng = StdRng::seed_from_u64(11);

    let outcome = search_configurations(configuration, policy, &SearchParams::new(2_000), &mut rng).unwrap();
    assert!(outcome.best_wins >= initial);
    assert!(outcome.accepted <= outcome.iterations);
    outcome.best.validate().unwrap();
}

#[test]
fn ensemble_is_reproducible() {
    let configuration = express().unwrap().configuration().unwrap();
    let params = SearchParams::new(400);

    let first = search_ensemble(&configuration, &Classic::default(), &params, 3, 7).unwrap();
    let second = search_ensemble(&configuration, &Classic::default(), &params, 3, 7).unwrap();
    assert_eq!(first.chain, second.chain);
    assert_eq!(first.chain_best, second.chain_best);
    assert_eq!(first.outcome.best.summary(), second.outcome.best.summary());
}

#[test]
fn file_scenario_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("express.json");
    std::fs::write(&path, express().unwrap().to_json().unwrap()).unwrap();

    let scenario = Scenario::read_json(&path).unwrap();
    assert_eq!(scenario.name, "express");
    assert_eq!(scenario.stop_at, Some(3));
    assert_eq!(scenario.configuration().unwrap().num_districts_one_win_or_tie(), 1);
}
