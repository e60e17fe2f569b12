//! Full-match tests across strategy pairings.

use noughts::{
    MatchEvent, MatchOutcome, OptimalStrategy, Orchestrator, RandomStrategy, Side, Strategy,
    StrategyKind, TacticalStrategy, run_match,
};

fn random(seed: u64) -> Box<dyn Strategy> {
    Box::new(RandomStrategy::seeded(seed))
}

fn optimal() -> Box<dyn Strategy> {
    Box::new(OptimalStrategy::new())
}

#[test]
fn test_optimal_self_play_draws() {
    let outcome = run_match(optimal(), optimal()).unwrap();
    assert_eq!(outcome, MatchOutcome::Draw);
    assert!(outcome.is_draw());
    assert_eq!(outcome.winner(), None);
}

#[test]
fn test_optimal_never_loses_as_first() {
    for seed in 0..40 {
        let outcome = run_match(optimal(), random(seed)).unwrap();
        assert_ne!(outcome, MatchOutcome::Winner(Side::Second), "seed {seed}");
    }
}

#[test]
fn test_optimal_never_loses_as_second() {
    for seed in 0..40 {
        let outcome = run_match(random(seed), optimal()).unwrap();
        assert_ne!(outcome, MatchOutcome::Winner(Side::First), "seed {seed}");
    }
}

#[test]
fn test_optimal_never_loses_to_tactical() {
    for seed in 0..20 {
        let tactical = Box::new(TacticalStrategy::with_fallback(RandomStrategy::seeded(seed)));
        let outcome = run_match(tactical, optimal()).unwrap();
        assert_ne!(outcome, MatchOutcome::Winner(Side::First), "seed {seed}");
    }
}

#[test]
fn test_seeded_matches_replay_identically() {
    let play = || {
        let mut events: Vec<MatchEvent> = Vec::new();
        let mut orch = Orchestrator::new(random(17), random(18));
        orch.run_with(&mut events).unwrap();
        events
    };
    assert_eq!(play(), play());
}

#[test]
fn test_every_computer_pairing_terminates() {
    let kinds = [
        StrategyKind::Random,
        StrategyKind::Tactical,
        StrategyKind::Optimal,
    ];
    for first in kinds {
        for second in kinds {
            let mut orch = Orchestrator::new(
                first.computer(Some(3)).unwrap(),
                second.computer(Some(4)).unwrap(),
            );
            orch.run().unwrap();
            let moves = orch.history().len();
            assert!((5..=9).contains(&moves), "{first} vs {second}: {moves} moves");
        }
    }
}
