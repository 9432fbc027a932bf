pub mod board;
pub mod cube;
pub mod state;

pub use board::{Board, Cell};
pub use cube::{spawn_column, Cube};
pub use state::Game;
