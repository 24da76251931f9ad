use super::Strategy;
use crate::Face;
use crate::Step;
use crate::game::State;
use crate::solver::Solver;
use std::sync::Arc;

/// Plays the solved decision tables.
#[derive(Debug, Clone)]
pub struct Optimal {
    solver: Arc<Solver>,
}

impl Optimal {
    /// solves up front so that play never stalls on induction
    pub fn new(solver: Arc<Solver>) -> Self {
        solver.run();
        Self { solver }
    }
}

impl Strategy for Optimal {
    fn buy(&self, step: Step, state: &State) -> bool {
        self.solver.buy(step, state)
    }

    fn sell(&self, step: Step, state: &State, roll: Face) -> bool {
        self.solver.sell(step, state, roll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    #[test]
    fn solved_on_construction() {
        let solver = Arc::new(Solver::new(Game::simple(3, 4).unwrap()));
        let optimal = Optimal::new(solver.clone());
        assert!(solver.solved());
        let ref state = State::new(1, 5);
        assert!(optimal.buy(1, state) == solver.buy(1, state));
    }
}
