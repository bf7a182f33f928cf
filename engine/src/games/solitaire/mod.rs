mod card;
mod game_state;
mod rules;

pub use card::{Card, Color, Column, DECK_SIZE, RANKS, Suit};
pub use game_state::{FOUNDATIONS, Selection, SolitaireGameState, TABLEAU_COLUMNS};
pub use rules::{can_place_on_column, can_place_on_foundation, column_run};
