use super::Strategy;
use crate::Step;
use crate::game::Game;
use crate::game::State;

/// Last round at which a second die is still worth buying
/// in the reference game.
const HORIZON: Step = 4;

/// Hand-written rule read off solved reference tables:
/// buy the second die as soon as it is affordable in the
/// first few rounds, then never again.
#[derive(Debug, Clone)]
pub struct Early {
    game: Game,
}

impl Early {
    pub fn new(game: &Game) -> Self {
        Self { game: game.clone() }
    }
}

impl Strategy for Early {
    fn buy(&self, step: Step, state: &State) -> bool {
        self.game.affords(state.score) && step <= HORIZON && state.dice == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_die_only() {
        let early = Early::new(&Game::simple(5, 10).unwrap());
        assert!(early.buy(2, &State::new(1, 6)));
        assert!(!early.buy(2, &State::new(1, 5)));
        assert!(!early.buy(2, &State::new(2, 20)));
        assert!(!early.buy(5, &State::new(1, 20)));
    }
}
