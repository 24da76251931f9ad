use super::Strategy;
use crate::Dice;
use crate::Face;
use crate::Step;
use crate::Utility;
use crate::game::Game;
use crate::game::State;
use crate::solver::expectation;

/// Greedy control subject.
///
/// Buys when one more die, kept for every remaining round, is expected
/// to return more than its price. Sells whenever the roll alone would
/// buy the die back.
#[derive(Debug, Clone)]
pub struct Basic {
    game: Game,
    expected: Vec<Utility>,
}

impl Basic {
    pub fn new(game: &Game) -> Self {
        let most = match game.limit() {
            0 => game.time() + 2,
            n => n + 1,
        };
        Self {
            game: game.clone(),
            expected: (0..=most).map(expectation).collect(),
        }
    }

    /// expected best face of `dice` dice, memoized up to the most dice ever held
    fn expect(&self, dice: Dice) -> Utility {
        self.expected
            .get(dice)
            .copied()
            .unwrap_or_else(|| expectation(dice))
    }
}

impl Strategy for Basic {
    fn buy(&self, step: Step, state: &State) -> bool {
        let delta = self.expect(state.dice + 1) - self.expect(state.dice);
        let rounds = self.game.time().saturating_sub(step) as Utility;
        delta * rounds > self.game.price() as Utility
    }

    fn sell(&self, _: Step, _: &State, roll: Face) -> bool {
        roll > self.game.price()
    }
}
