use serde::{Deserialize, Serialize};

use super::board::{Board, drop_in_column};
use super::bot_controller::ai_column;
use super::types::{GameStatus, Outcome, Player, Position};
use super::win_detector::check_winner;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectFourGameState {
    pub board: Board,
    pub current_player: Player,
    pub status: GameStatus,
    pub last_move: Option<Position>,
    pub moves_made: u32,
}

impl ConnectFourGameState {
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            status: GameStatus::InProgress,
            last_move: None,
            moves_made: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Drops a disc for the player to move. `None` when the column is full or
    /// the game has already finished.
    #[must_use]
    pub fn play(&self, col: usize) -> Option<Self> {
        if self.is_over() {
            return None;
        }

        let (board, position) = self.board.with_disc(col, self.current_player)?;

        let status = match check_winner(&board) {
            Some(Outcome::Winner(player)) => GameStatus::Won(player),
            Some(Outcome::Draw) => GameStatus::Draw,
            None => GameStatus::InProgress,
        };

        let current_player = if status == GameStatus::InProgress {
            self.current_player.opponent()
        } else {
            self.current_player
        };

        Some(Self {
            board,
            current_player,
            status,
            last_move: Some(position),
            moves_made: self.moves_made + 1,
        })
    }

    pub fn bot_column(&self) -> Option<usize> {
        if self.is_over() {
            return None;
        }
        ai_column(&self.board, self.current_player)
    }

    pub fn can_play(&self, col: usize) -> bool {
        !self.is_over() && drop_in_column(&self.board, col, self.current_player).is_some()
    }
}
