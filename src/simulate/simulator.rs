use super::Interval;
use crate::FACES;
use crate::PROGRESS_TICKS;
use crate::SIMULATION_SEED;
use crate::Utility;
use crate::game::Game;
use crate::game::State;
use crate::progress::Progress;
use crate::strategy::Strategy;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

/// Plays a game many times under a strategy.
///
/// Game `i` of a run draws from its own generator seeded with
/// `seed + i`, so a run is reproducible regardless of how rayon
/// schedules the games across threads.
#[derive(Debug, Clone)]
pub struct Simulator {
    game: Game,
    seed: u64,
}

impl Simulator {
    pub fn new(game: Game) -> Self {
        Self::seeded(game, SIMULATION_SEED)
    }

    pub fn seeded(game: Game, seed: u64) -> Self {
        Self { game, seed }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// play one game from the opening state, return the final score
    pub fn play<S, R>(&self, strategy: &S, rng: &mut R) -> Utility
    where
        S: Strategy + ?Sized,
        R: Rng,
    {
        let ref game = self.game;
        let mut state = State::opening();
        for step in 0..game.time() {
            if game.affords(state.score)
                && game.capacity(state.dice)
                && strategy.buy(step, &state)
            {
                state.buy(game.price());
            }
            if state.dice == 0 {
                continue;
            }
            let roll = (0..state.dice)
                .map(|_| rng.random_range(1..=FACES))
                .max()
                .unwrap_or_default();
            let before = state;
            state.gain(roll);
            if game.rule() && state.dice >= 2 && strategy.sell(step, &before, roll) {
                state.sell(roll);
            }
        }
        state.score as Utility + game.bonus(state.dice)
    }

    /// confidence interval on the strategy's expected score over `size` games
    pub fn run<S>(&self, size: usize, strategy: &S) -> Interval
    where
        S: Strategy + ?Sized,
    {
        let ref progress = Progress::new("simulate", size, PROGRESS_TICKS);
        let scores = (0..size)
            .into_par_iter()
            .map(|i| {
                let ref mut rng = SmallRng::seed_from_u64(self.seed.wrapping_add(i as u64));
                let score = self.play(strategy, rng);
                progress.tick();
                score
            })
            .collect::<Vec<Utility>>();
        Interval::from(scores.as_slice())
    }
}
