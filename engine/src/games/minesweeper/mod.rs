mod field;
mod game_state;
mod settings;
mod types;

pub use field::{count_adjacent_mines, flood_reveal, neighbours, place_mines};
pub use game_state::MinesweeperGameState;
pub use settings::MinesweeperSettings;
pub use types::{CellView, GameStatus, Position};
