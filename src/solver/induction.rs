use super::Tables;
use super::proba;
use crate::Dice;
use crate::FACES;
use crate::Score;
use crate::Step;
use crate::Utility;
use crate::game::Game;

/// Backward induction.
///
/// Each round is two decisions: buy before the roll, sell after it.
/// Solving a step therefore takes two passes over its grid. The sell
/// pass reads only `value[step + 1]`; the buy pass reads the sell
/// pass of the same step (or `value[step + 1]` when selling is off).
/// Steps go from the horizon down to zero.
impl Tables {
    pub fn induct(&mut self, game: &Game) {
        for step in (0..game.time()).rev() {
            self.resell(game, step);
            self.purchase(game, step);
            log::debug!("step {:>4} solved", step);
        }
    }

    /// sell pass. swept one dice slot wider than the buy pass
    /// so that every post-purchase cell the buy pass reads exists.
    fn resell(&mut self, game: &Game, step: Step) {
        let Some(ref mut resale) = self.resale else {
            return;
        };
        let ref value = self.value;
        let scores = game.score_bound(step);
        let pools = game.dice_bound(step + 1);
        for score in 0..scores {
            for dice in 0..pools {
                for roll in 1..=FACES {
                    let keep = value[[step + 1, score + roll, dice]];
                    let (sold, gain) = match dice >= 2 {
                        true => match value[[step + 1, score + 2 * roll, dice - 1]] {
                            sale if sale > keep => (true, sale),
                            _ => (false, keep),
                        },
                        false => (false, keep),
                    };
                    resale.midvalue[[step, score, dice, roll]] = gain;
                    resale.sell[[step, score, dice, roll]] = sold;
                }
            }
        }
    }

    /// buy pass. a purchase must be affordable and fit under the limit,
    /// and is only taken when strictly better than standing pat.
    fn purchase(&mut self, game: &Game, step: Step) {
        let scores = game.score_bound(step);
        let pools = game.dice_bound(step);
        for score in 0..scores {
            for dice in 0..pools {
                let stand = self.roll(step, score, dice);
                let (bought, gain) = match game.affords(score) && game.capacity(dice) {
                    true => match self.roll(step, score - game.price(), dice + 1) {
                        spend if spend > stand => (true, spend),
                        _ => (false, stand),
                    },
                    false => (false, stand),
                };
                self.value[[step, score, dice]] = gain;
                self.buy[[step, score, dice]] = bought;
            }
        }
    }

    /// expected value of rolling `dice` dice while holding `score`,
    /// once this step's purchase is settled. without dice there is
    /// nothing to roll or sell, and the score carries over untouched.
    fn roll(&self, step: Step, score: Score, dice: Dice) -> Utility {
        match (dice, &self.resale) {
            (0, _) => self.value[[step + 1, score, 0]],
            (n, Some(resale)) => (1..=FACES)
                .map(|r| proba(n, r) * resale.midvalue[[step, score, n, r]])
                .sum(),
            (n, None) => (1..=FACES)
                .map(|r| proba(n, r) * self.value[[step + 1, score + r, n]])
                .sum(),
        }
    }
}
