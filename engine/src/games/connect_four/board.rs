use serde::{Deserialize, Serialize};

use super::types::{Cell, Player, Position};

pub const ROWS: usize = 6;
pub const COLUMNS: usize = 7;

/// Row 0 is the top of the board; discs settle towards `ROWS - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; COLUMNS]; ROWS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_rows(rows: [&str; ROWS]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(COLUMNS).enumerate() {
                board.cells[row][col] = match ch {
                    'R' => Cell::Disc(Player::Red),
                    'Y' => Cell::Disc(Player::Yellow),
                    _ => Cell::Empty,
                };
            }
        }
        board
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[[Cell; COLUMNS]; ROWS] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn disc_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    fn landing_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Like [`drop_in_column`] but also reports where the disc landed.
    pub fn with_disc(&self, col: usize, player: Player) -> Option<(Board, Position)> {
        if col >= COLUMNS {
            return None;
        }
        let row = self.landing_row(col)?;
        let mut next = *self;
        next.cells[row][col] = Cell::Disc(player);
        Some((next, Position::new(row, col)))
    }
}

pub fn drop_in_column(board: &Board, col: usize, player: Player) -> Option<Board> {
    board.with_disc(col, player).map(|(next, _)| next)
}

pub fn empty_columns(board: &Board) -> Vec<usize> {
    (0..COLUMNS)
        .filter(|&col| board.get(0, col) == Cell::Empty)
        .collect()
}
