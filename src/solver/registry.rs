use super::Solver;
use crate::Face;
use crate::Step;
use crate::Utility;
use crate::game::Game;
use crate::game::State;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

/// One [`Solver`] per distinct [`Game`].
///
/// The map lock is only held to look up or insert an entry. Solving
/// happens afterwards, inside the shared solver, so different games
/// solve concurrently while identical games solve once.
#[derive(Debug, Default)]
pub struct Registry {
    solvers: Mutex<HashMap<Game, Arc<Solver>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// existing solver for this game, or a fresh unsolved one
    pub fn solver(&self, game: &Game) -> Arc<Solver> {
        self.solvers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(game.clone())
            .or_insert_with(|| {
                log::debug!("registering solver for {}", game);
                Arc::new(Solver::new(game.clone()))
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.solvers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn optimal_value(&self, game: &Game) -> Utility {
        self.solver(game).optimal_value()
    }

    pub fn liquidation(&self, game: &Game) -> Vec<Utility> {
        self.solver(game).liquidation()
    }

    /// should a player in `state` buy a die before rolling at `step`?
    pub fn decision(&self, game: &Game, step: Step, state: &State) -> bool {
        self.solver(game).buy(step, state)
    }

    /// having rolled `roll`, should a player in `state` sell a die?
    pub fn decision_after_roll(&self, game: &Game, step: Step, state: &State, roll: Face) -> bool {
        self.solver(game).sell(step, state, roll)
    }
}
