mod session_rng;

pub mod connect_four;
pub mod minesweeper;
pub mod solitaire;

pub use session_rng::SessionRng;
