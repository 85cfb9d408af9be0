use crate::{
    choose_action, AutoplayConfig, BatchReport, BatchSummary, GameOutcome, GameRecord, Policy,
    StepRecord,
};
use scoundrel_core::{EventBus, GameState, Phase, RngState, DECK_SIZE};

/// Drives one game to a terminal phase with a policy choosing the moves.
#[derive(Debug)]
pub struct Simulator {
    pub state: GameState,
    pub rng: RngState,
    pub events: EventBus,
    policy: Policy,
}

impl Simulator {
    pub fn new(policy: Policy, seed: u64) -> Self {
        Self {
            state: GameState::new(),
            rng: RngState::from_seed(seed),
            events: EventBus::default(),
            policy,
        }
    }

    /// One policy move against the current snapshot.
    pub fn step(&mut self, step: u32) -> StepRecord {
        let action = choose_action(self.policy, &self.state, &mut self.rng);
        self.state = self.state.apply(action, &mut self.rng, &mut self.events);
        StepRecord {
            step,
            action,
            health_after: self.state.health,
            deck_after: self.state.deck.len(),
            room_after: self.state.room_count,
            best_after: self.state.best,
        }
    }

    pub fn play_game(&mut self, max_steps: u32, keep_trace: bool) -> GameRecord {
        let seed = self.rng.seed();
        let mut trace = Vec::new();
        let mut steps = 0u32;
        while !self.state.phase.is_terminal() && steps < max_steps {
            let record = self.step(steps);
            steps += 1;
            if keep_trace {
                trace.push(record);
            }
        }
        let outcome = match self.state.phase {
            Phase::Won => GameOutcome::Won,
            Phase::Lost => GameOutcome::Lost,
            Phase::NotStarted | Phase::InProgress => GameOutcome::StepCap,
        };
        GameRecord {
            seed,
            outcome,
            steps,
            rooms_entered: self.state.room_count,
            final_health: self.state.health,
            best: self.state.best,
            trace,
        }
    }
}

/// Plays `config.games` consecutively seeded games and aggregates them.
pub fn run_batch(config: &AutoplayConfig, keep_traces: bool) -> BatchReport {
    let mut games = Vec::with_capacity(config.games as usize);
    for offset in 0..config.games {
        let mut sim = Simulator::new(config.policy, config.seed.wrapping_add(u64::from(offset)));
        games.push(sim.play_game(config.max_steps, keep_traces));
    }
    BatchReport {
        summary: summarize(&games),
        games,
    }
}

fn summarize(games: &[GameRecord]) -> BatchSummary {
    let total = games.len().max(1) as f64;
    let wins = games.iter().filter(|game| game.outcome == GameOutcome::Won).count() as u32;
    let losses = games.iter().filter(|game| game.outcome == GameOutcome::Lost).count() as u32;
    let step_capped = games
        .iter()
        .filter(|game| game.outcome == GameOutcome::StepCap)
        .count() as u32;
    BatchSummary {
        games: games.len() as u32,
        wins,
        losses,
        step_capped,
        win_rate: f64::from(wins) / total,
        average_best: games.iter().map(|game| game.best as f64).sum::<f64>() / total,
        best_overall: games.iter().map(|game| game.best).min().unwrap_or(DECK_SIZE),
        average_rooms: games.iter().map(|game| f64::from(game.rooms_entered)).sum::<f64>() / total,
    }
}
