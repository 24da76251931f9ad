use crate::Dice;
use crate::Face;
use crate::OPENING_DICE;
use crate::OPENING_SCORE;
use crate::Score;

/// what a player holds between two decisions:
/// the dice it owns and the score it has banked.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct State {
    pub dice: Dice,
    pub score: Score,
}

impl State {
    pub fn new(dice: Dice, score: Score) -> Self {
        Self { dice, score }
    }

    /// every game starts here
    pub fn opening() -> Self {
        Self::new(OPENING_DICE, OPENING_SCORE)
    }

    /// pay for one more die. caller checks affordability.
    pub fn buy(&mut self, price: Score) {
        debug_assert!(self.score >= price);
        self.score -= price;
        self.dice += 1;
    }

    /// give up one die for a second copy of this round's roll
    pub fn sell(&mut self, roll: Face) {
        debug_assert!(self.dice >= 2);
        self.score += roll;
        self.dice -= 1;
    }

    /// bank this round's roll
    pub fn gain(&mut self, roll: Face) {
        self.score += roll;
    }
}

impl Default for State {
    fn default() -> Self {
        Self::opening()
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d/{}", self.dice, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_state() {
        let state = State::default();
        assert!(state.dice == 1);
        assert!(state.score == 0);
    }

    #[test]
    fn buy_then_sell() {
        let mut state = State::new(1, 12);
        state.buy(5);
        assert!(state == State::new(2, 7));
        state.gain(4);
        state.sell(4);
        assert!(state == State::new(1, 15));
    }
}
