use super::Tables;
use crate::Face;
use crate::OPENING_DICE;
use crate::OPENING_SCORE;
use crate::Step;
use crate::Utility;
use crate::game::Game;
use crate::game::State;
use std::sync::OnceLock;

/// Optimal play of one game.
///
/// Tables are filled at most once, on the first query, and only
/// published when complete. Every query is therefore self-solving,
/// and concurrent first queries block on a single induction rather
/// than racing over a half-written store.
pub struct Solver {
    game: Game,
    tables: OnceLock<Tables>,
}

impl Solver {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            tables: OnceLock::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn solved(&self) -> bool {
        self.tables.get().is_some()
    }

    /// solve unless already solved. idempotent.
    pub fn run(&self) -> &Tables {
        self.tables.get_or_init(|| Tables::solve(&self.game))
    }

    pub fn tables(&self) -> &Tables {
        self.run()
    }

    /// expected final score from the opening state
    pub fn optimal_value(&self) -> Utility {
        self.tables().value(0, OPENING_SCORE, OPENING_DICE)
    }

    /// flat liquidation bonus equivalent to playing this game out,
    /// for each opening dice count in `1..=limit`.
    pub fn liquidation(&self) -> Vec<Utility> {
        (1..=self.game.limit())
            .map(|dice| self.tables().value(0, OPENING_SCORE, dice))
            .collect()
    }

    pub fn value(&self, step: Step, state: &State) -> Utility {
        self.tables().value(step, state.score, state.dice)
    }

    pub fn buy(&self, step: Step, state: &State) -> bool {
        self.tables().buy(step, state.score, state.dice)
    }

    pub fn sell(&self, step: Step, state: &State, roll: Face) -> bool {
        self.game.rule() && self.tables().sell(step, state.score, state.dice, roll)
    }
}

impl std::fmt::Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("game", &self.game)
            .field("solved", &self.solved())
            .finish()
    }
}
