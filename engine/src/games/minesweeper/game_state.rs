use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::field::{count_adjacent_mines, flood_reveal, place_mines};
use super::settings::MinesweeperSettings;
use super::types::{CellView, GameStatus, Position};
use crate::games::SessionRng;
use crate::validate::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinesweeperGameState {
    settings: MinesweeperSettings,
    mines: HashSet<usize>,
    mines_placed: bool,
    revealed: HashSet<usize>,
    flagged: HashSet<usize>,
    status: GameStatus,
}

impl MinesweeperGameState {
    /// Starts a game on validated settings; at least one cell must stay safe.
    pub fn new(settings: MinesweeperSettings) -> Result<Self, String> {
        settings.validate()?;
        Ok(Self::fresh(settings))
    }

    fn fresh(settings: MinesweeperSettings) -> Self {
        Self {
            settings,
            mines: HashSet::new(),
            mines_placed: false,
            revealed: HashSet::new(),
            flagged: HashSet::new(),
            status: GameStatus::Playing,
        }
    }

    #[cfg(test)]
    pub fn with_mines(settings: MinesweeperSettings, mines: &[Position]) -> Self {
        let mut state = Self::fresh(settings);
        state.mines = mines.iter().map(|p| p.to_index(settings.cols)).collect();
        state.mines_placed = true;
        state
    }

    pub fn restart(&self) -> Self {
        Self::fresh(self.settings)
    }

    pub fn settings(&self) -> &MinesweeperSettings {
        &self.settings
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mines(&self) -> &HashSet<usize> {
        &self.mines
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn revealed(&self) -> &HashSet<usize> {
        &self.revealed
    }

    pub fn flagged(&self) -> &HashSet<usize> {
        &self.flagged
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    pub fn mines_remaining(&self) -> i32 {
        self.settings.mines as i32 - self.flagged.len() as i32
    }

    pub fn adjacent_mines(&self, pos: Position) -> u8 {
        count_adjacent_mines(&self.settings, &self.mines, pos)
    }

    pub fn cell_view(&self, pos: Position) -> CellView {
        let index = pos.to_index(self.settings.cols);
        if self.revealed.contains(&index) {
            if self.mines.contains(&index) {
                CellView::Mine
            } else {
                CellView::Revealed(self.adjacent_mines(pos))
            }
        } else if self.flagged.contains(&index) {
            CellView::Flagged
        } else {
            CellView::Hidden
        }
    }

    /// Reveals a cell, placing the mines on the first reveal so that the
    /// opening cell is always safe. `None` means the action was ignored.
    #[must_use]
    pub fn reveal(&self, pos: Position, rng: &mut SessionRng) -> Option<Self> {
        if self.is_over() || !self.settings.contains(pos.row, pos.col) {
            return None;
        }

        let index = pos.to_index(self.settings.cols);
        if self.flagged.contains(&index) || self.revealed.contains(&index) {
            return None;
        }

        let mut next = self.clone();

        if !next.mines_placed {
            next.mines = place_mines(&next.settings, pos, rng);
            next.mines_placed = true;
        } else if next.mines.contains(&index) {
            next.revealed.extend(next.mines.iter().copied());
            next.flagged.retain(|i| !next.mines.contains(i));
            next.status = GameStatus::Lost;
            return Some(next);
        }

        next.revealed = flood_reveal(&next.settings, &next.mines, &next.revealed, &next.flagged, pos);

        if next.revealed.len() == next.settings.safe_cells() {
            next.status = GameStatus::Won;
        }

        Some(next)
    }

    #[must_use]
    pub fn toggle_flag(&self, pos: Position) -> Option<Self> {
        if self.is_over() || !self.settings.contains(pos.row, pos.col) {
            return None;
        }

        let index = pos.to_index(self.settings.cols);
        if self.revealed.contains(&index) {
            return None;
        }

        let mut next = self.clone();
        if !next.flagged.remove(&index) {
            next.flagged.insert(index);
        }
        Some(next)
    }
}
