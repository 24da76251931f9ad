//! Backward induction over every `(step, score, dice)` state of a game.
//!
//! [`Tables`] own the dense value and decision arrays, [`Solver`] publishes
//! them once filled, and [`Registry`] keeps one solver per distinct
//! [`crate::game::Game`] so repeated queries never solve twice.

pub mod induction;
pub mod proba;
pub mod registry;
pub mod solver;
pub mod tables;
pub mod tensor;

pub use proba::expectation;
pub use proba::proba;
pub use registry::Registry;
pub use solver::Solver;
pub use tables::Tables;
pub use tensor::Tensor;
