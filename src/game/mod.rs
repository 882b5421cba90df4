pub mod piece;
pub mod board;
pub mod score;
pub mod state;

pub use state::{Game, GameState};
