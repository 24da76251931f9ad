use super::Tensor;
use crate::Dice;
use crate::FACES;
use crate::Face;
use crate::Score;
use crate::Step;
use crate::Utility;
use crate::game::Game;

/// Decisions taken after the roll, only present when selling is allowed.
/// The trailing axis is the roll, with index 0 unused.
#[derive(Debug, Clone, PartialEq)]
pub struct Resale {
    pub(super) midvalue: Tensor<Utility, 4>,
    pub(super) sell: Tensor<bool, 4>,
}

/// Value and policy store of one game.
///
/// - `value[step, score, dice]`: expected final score under optimal play,
///   for `step` in `0..=time`
/// - `buy[step, score, dice]`: whether to buy before rolling,
///   for `step` in `0..time`
/// - `resale`: post-roll `midvalue` and `sell`, when the rules allow it
///
/// Cells outside the reachable bounds of their step are never
/// visited by induction and stay at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Tables {
    pub(super) value: Tensor<Utility, 3>,
    pub(super) buy: Tensor<bool, 3>,
    pub(super) resale: Option<Resale>,
}

impl Tables {
    /// allocate zeroed tables sized for the game and
    /// write the liquidation boundary at the horizon.
    pub fn new(game: &Game) -> Self {
        let time = game.time();
        let scores = game.score_bound(time);
        let dice = game.dice_bound(time);
        let cells = (time + 1) * scores * dice;
        log::debug!(
            "allocating tables {} x {} x {} ({} cells, sell {})",
            time + 1,
            scores,
            dice,
            cells,
            game.rule()
        );
        let mut value = Tensor::zeros([time + 1, scores, dice]);
        for score in 0..scores {
            for d in 0..dice {
                value[[time, score, d]] = score as Utility + game.bonus(d);
            }
        }
        Self {
            value,
            buy: Tensor::zeros([time, scores, dice]),
            resale: game.rule().then(|| Resale {
                midvalue: Tensor::zeros([time, scores, dice, FACES + 1]),
                sell: Tensor::zeros([time, scores, dice, FACES + 1]),
            }),
        }
    }

    /// allocate, then fill by backward induction
    pub fn solve(game: &Game) -> Self {
        let start = std::time::Instant::now();
        let mut tables = Self::new(game);
        tables.induct(game);
        log::info!("solved {} in {:.2?}", game, start.elapsed());
        tables
    }

    pub fn value(&self, step: Step, score: Score, dice: Dice) -> Utility {
        self.value[[step, score, dice]]
    }

    pub fn buy(&self, step: Step, score: Score, dice: Dice) -> bool {
        self.buy[[step, score, dice]]
    }

    /// always false when the rules forbid selling
    pub fn sell(&self, step: Step, score: Score, dice: Dice, roll: Face) -> bool {
        assert!((1..=FACES).contains(&roll), "roll {} out of range", roll);
        self.resale
            .as_ref()
            .map(|resale| resale.sell[[step, score, dice, roll]])
            .unwrap_or(false)
    }

    /// expected value right after rolling `roll` and deciding whether to sell
    pub fn midvalue(&self, step: Step, score: Score, dice: Dice, roll: Face) -> Option<Utility> {
        assert!((1..=FACES).contains(&roll), "roll {} out of range", roll);
        self.resale
            .as_ref()
            .map(|resale| resale.midvalue[[step, score, dice, roll]])
    }

    pub fn values(&self) -> &Tensor<Utility, 3> {
        &self.value
    }

    pub fn buys(&self) -> &Tensor<bool, 3> {
        &self.buy
    }

    pub fn sells(&self) -> Option<&Tensor<bool, 4>> {
        self.resale.as_ref().map(|resale| &resale.sell)
    }
}
