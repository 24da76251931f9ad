//! Monte Carlo estimation of what a strategy scores.

pub mod interval;
pub mod simulator;

pub use interval::Interval;
pub use simulator::Simulator;
