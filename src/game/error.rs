use crate::Dice;
use thiserror::Error;

/// Reasons a set of rules cannot become a [`super::Game`].
#[derive(Debug, Error)]
pub enum GameError {
    #[error("dice price must be positive")]
    ZeroPrice,
    #[error("time horizon must be positive")]
    ZeroTime,
    #[error("liquidation schedule has {found} bonuses but the dice limit is {limit}")]
    Liquid { limit: Dice, found: usize },
    #[error("failed to read game file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse game file: {0}")]
    Parse(#[from] serde_json::Error),
}
