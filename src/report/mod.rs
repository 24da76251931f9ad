//! Tables printed by the command line actions.

pub mod liquidation;
pub mod scores;

pub use liquidation::Liquidation;
pub use scores::Scores;
