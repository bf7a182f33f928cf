mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, COLUMNS, ROWS, drop_in_column, empty_columns};
pub use bot_controller::{ai_column, score_position};
pub use game_state::ConnectFourGameState;
pub use types::{Cell, GameStatus, Outcome, Player, Position};
pub use win_detector::check_winner;
