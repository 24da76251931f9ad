pub mod error;
pub mod game;
pub mod state;

pub use error::GameError;
pub use game::Game;
pub use game::GameFile;
pub use state::State;
