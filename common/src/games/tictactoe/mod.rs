mod board;
mod board_error;
mod game_state;
mod grid;
mod icon;
mod types;
mod win_detector;

pub use board::GameBoard;
pub use board_error::BoardError;
pub use game_state::{GameState, PlayArea, Score};
pub use grid::Grid;
pub use icon::board_mark_icon;
pub use types::{CellLocation, Direction, Mark, PlayResult};
