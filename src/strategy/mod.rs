pub mod basic;
pub mod early;
pub mod kind;
pub mod optimal;
pub mod passive;

pub use basic::Basic;
pub use early::Early;
pub use kind::Kind;
pub use optimal::Optimal;
pub use passive::Passive;

use crate::Face;
use crate::Step;
use crate::game::State;
use std::fmt::Debug;

/// Decision making during play.
///
/// Rule gates (affordability, dice limit, selling allowed, two dice
/// to sell) are enforced by whoever plays the game; a strategy only
/// says what it would like to do. Both decisions default to no.
pub trait Strategy: Debug + Send + Sync {
    /// buy one die before rolling at `step`?
    fn buy(&self, _: Step, _: &State) -> bool {
        false
    }

    /// having rolled `roll` from `state` (the roll not yet banked),
    /// sell one die for a second copy of it?
    fn sell(&self, _: Step, _: &State, _: Face) -> bool {
        false
    }
}
