use scoundrel_autoplay::{run_batch, AutoplayConfig, GameOutcome, Policy, Simulator};
use scoundrel_core::{DECK_SIZE, MAX_HEALTH};

#[test]
fn batch_bookkeeping_adds_up() {
    let config = AutoplayConfig {
        seed: 41,
        games: 30,
        max_steps: 500,
        policy: Policy::Greedy,
    };
    let report = run_batch(&config, false);
    let summary = &report.summary;
    assert_eq!(summary.games, 30);
    assert_eq!(summary.wins + summary.losses + summary.step_capped, summary.games);
    assert!(summary.win_rate >= 0.0 && summary.win_rate <= 1.0);
    assert!(summary.best_overall <= DECK_SIZE);
    for game in &report.games {
        assert!(game.final_health >= 0 && game.final_health <= MAX_HEALTH);
        assert!(game.best <= DECK_SIZE);
        assert!(game.rooms_entered >= 1);
    }
}

#[test]
fn random_playouts_respect_the_invariants_step_by_step() {
    let mut sim = Simulator::new(Policy::Random, 7);
    let record = sim.play_game(500, true);
    assert!(!record.trace.is_empty());
    let mut best_seen = DECK_SIZE;
    for step in &record.trace {
        assert!(step.health_after >= 0 && step.health_after <= MAX_HEALTH);
        assert!(step.best_after <= best_seen, "best may only shrink");
        best_seen = step.best_after;
    }
}

#[test]
fn seeded_batches_are_reproducible() {
    let config = AutoplayConfig {
        seed: 1234,
        games: 10,
        max_steps: 500,
        policy: Policy::Random,
    };
    let first = run_batch(&config, true);
    let second = run_batch(&config, true);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize report"),
        serde_json::to_string(&second).expect("serialize report"),
    );
}

#[test]
fn games_reach_a_terminal_phase_well_under_the_cap() {
    // 44 cards plus the odd run can never need anywhere near 500 moves.
    for policy in [Policy::Random, Policy::Greedy] {
        let config = AutoplayConfig {
            seed: 99,
            games: 20,
            max_steps: 500,
            policy,
        };
        let report = run_batch(&config, false);
        assert_eq!(report.summary.step_capped, 0, "{policy:?} stalled");
        for game in &report.games {
            assert!(matches!(game.outcome, GameOutcome::Won | GameOutcome::Lost));
        }
    }
}
