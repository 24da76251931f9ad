use super::GameError;
use crate::Dice;
use crate::FACES;
use crate::Score;
use crate::Step;
use crate::Utility;
use serde::Deserialize;
use serde::Serialize;
use std::hash::Hash;
use std::hash::Hasher;
use std::path::Path;

/// Raw rules as written in a game file.
/// Only becomes a [`Game`] once validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameFile {
    pub price: Score,
    pub time: Step,
    #[serde(default)]
    pub rule: bool,
    #[serde(default)]
    pub limit: Dice,
    #[serde(default)]
    pub liquid: Vec<Utility>,
}

/// Immutable rules of one game.
///
/// - `price`: score paid for one more die
/// - `time`: number of rounds
/// - `rule`: whether a die may be sold back after rolling
/// - `limit`: most dice a player may own (0 = unbounded)
/// - `liquid`: bonus paid at the horizon, indexed by dice count - 1
///
/// Equality and hashing are exact (bonuses compare by bit pattern)
/// so that a `Game` can key a cache of solved tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GameFile", into = "GameFile")]
pub struct Game {
    price: Score,
    time: Step,
    rule: bool,
    limit: Dice,
    liquid: Vec<Utility>,
}

impl Game {
    pub fn new(
        price: Score,
        time: Step,
        rule: bool,
        limit: Dice,
        liquid: Vec<Utility>,
    ) -> Result<Self, GameError> {
        if price == 0 {
            return Err(GameError::ZeroPrice);
        }
        if time == 0 {
            return Err(GameError::ZeroTime);
        }
        let liquid = match (limit, liquid) {
            (0, liquid) if liquid.is_empty() => liquid,
            (0, liquid) => return Err(GameError::Liquid { limit, found: liquid.len() }),
            (_, liquid) if liquid.iter().all(|b| *b == 0.) => vec![0.; limit],
            (_, liquid) if liquid.len() == limit => liquid,
            (_, liquid) => return Err(GameError::Liquid { limit, found: liquid.len() }),
        };
        Ok(Self {
            price,
            time,
            rule,
            limit,
            liquid,
        })
    }

    /// unlimited dice, no selling, no liquidation
    pub fn simple(price: Score, time: Step) -> Result<Self, GameError> {
        Self::new(price, time, false, 0, Vec::new())
    }

    /// read and validate a JSON game file
    pub fn load<P>(path: P) -> Result<Self, GameError>
    where
        P: AsRef<Path>,
    {
        let ref text = std::fs::read_to_string(path)?;
        let file = serde_json::from_str::<GameFile>(text)?;
        Self::try_from(file)
    }

    /// same rules, different liquidation bonuses
    pub fn with_liquid(&self, liquid: Vec<Utility>) -> Result<Self, GameError> {
        Self::new(self.price, self.time, self.rule, self.limit, liquid)
    }

    pub fn price(&self) -> Score {
        self.price
    }
    pub fn time(&self) -> Step {
        self.time
    }
    pub fn rule(&self) -> bool {
        self.rule
    }
    pub fn limit(&self) -> Dice {
        self.limit
    }
    pub fn liquid(&self) -> &[Utility] {
        &self.liquid
    }

    /// liquidation bonus for ending the game with `dice` dice
    pub fn bonus(&self, dice: Dice) -> Utility {
        match dice {
            0 => 0.,
            d => self.liquid.get(d - 1).copied().unwrap_or_default(),
        }
    }

    /// buying needs strictly more score than the price
    pub fn affords(&self, score: Score) -> bool {
        score > self.price
    }

    /// room for one more die under the limit
    pub fn capacity(&self, dice: Dice) -> bool {
        self.limit == 0 || dice < self.limit
    }

    /// one past the most dice a player can hold entering `step`,
    /// with one slot reserved for a purchase.
    pub fn dice_bound(&self, step: Step) -> Dice {
        match self.limit {
            0 => step + 1 + 1,
            n => n + 1,
        }
    }

    /// loose bound on the score a player can hold entering `step`.
    /// a sold die pays its roll twice, hence the doubling.
    pub fn score_bound(&self, step: Step) -> Score {
        FACES * (1 + self.rule as usize) * step + 1
    }
}

impl TryFrom<GameFile> for Game {
    type Error = GameError;
    fn try_from(file: GameFile) -> Result<Self, Self::Error> {
        Self::new(file.price, file.time, file.rule, file.limit, file.liquid)
    }
}

impl From<Game> for GameFile {
    fn from(game: Game) -> Self {
        Self {
            price: game.price,
            time: game.time,
            rule: game.rule,
            limit: game.limit,
            liquid: game.liquid,
        }
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.price == other.price
            && self.time == other.time
            && self.rule == other.rule
            && self.limit == other.limit
            && self.liquid.len() == other.liquid.len()
            && self
                .liquid
                .iter()
                .zip(other.liquid.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Game {}

impl Hash for Game {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.price.hash(state);
        self.time.hash(state);
        self.rule.hash(state);
        self.limit.hash(state);
        for bonus in self.liquid.iter() {
            bonus.to_bits().hash(state);
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "price {} time {} sell {} limit {}",
            self.price,
            self.time,
            if self.rule { "on" } else { "off" },
            self.limit,
        )
    }
}
