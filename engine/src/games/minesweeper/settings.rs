use serde::{Deserialize, Serialize};

use crate::validate::Validate;

pub const MIN_SIDE: usize = 2;
pub const MAX_SIDE: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinesweeperSettings {
    pub rows: usize,
    pub cols: usize,
    pub mines: usize,
}

impl MinesweeperSettings {
    pub fn new(rows: usize, cols: usize, mines: usize) -> Self {
        Self { rows, cols, mines }
    }

    pub fn total_cells(&self) -> usize {
        self.rows * self.cols
    }

    pub fn safe_cells(&self) -> usize {
        self.total_cells().saturating_sub(self.mines)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

impl Default for MinesweeperSettings {
    fn default() -> Self {
        Self::new(9, 9, 10)
    }
}

impl Validate for MinesweeperSettings {
    fn validate(&self) -> Result<(), String> {
        if self.rows < MIN_SIDE || self.rows > MAX_SIDE {
            return Err(format!("Rows must be between {} and {}", MIN_SIDE, MAX_SIDE));
        }
        if self.cols < MIN_SIDE || self.cols > MAX_SIDE {
            return Err(format!("Columns must be between {} and {}", MIN_SIDE, MAX_SIDE));
        }
        if self.mines == 0 {
            return Err("Mine count must be at least 1".to_string());
        }
        if self.mines >= self.total_cells() {
            return Err(format!(
                "Mine count ({}) must leave at least one safe cell on a {}x{} grid",
                self.mines, self.rows, self.cols
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nine_by_nine_with_ten_mines() {
        let settings = MinesweeperSettings::default();

        assert_eq!((settings.rows, settings.cols, settings.mines), (9, 9, 10));
        assert_eq!(settings.safe_cells(), 71);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_too_many_mines() {
        assert!(MinesweeperSettings::new(3, 3, 9).validate().is_err());
        assert!(MinesweeperSettings::new(3, 3, 8).validate().is_ok());
    }

    #[test]
    fn test_safe_cells_saturates_when_mines_exceed_cells() {
        assert_eq!(MinesweeperSettings::new(2, 2, 5).safe_cells(), 0);
    }

    #[test]
    fn test_validate_rejects_bad_dimensions() {
        assert!(MinesweeperSettings::new(1, 9, 1).validate().is_err());
        assert!(MinesweeperSettings::new(9, 31, 1).validate().is_err());
        assert!(MinesweeperSettings::new(9, 9, 0).validate().is_err());
    }
}
