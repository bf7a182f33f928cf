use std::collections::{HashSet, VecDeque};

use super::settings::MinesweeperSettings;
use super::types::Position;
use crate::games::SessionRng;

pub fn neighbours(settings: &MinesweeperSettings, pos: Position) -> Vec<Position> {
    let mut result = Vec::with_capacity(8);
    for d_row in -1isize..=1 {
        for d_col in -1isize..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            let row = pos.row as isize + d_row;
            let col = pos.col as isize + d_col;
            if row < 0 || col < 0 {
                continue;
            }
            if settings.contains(row as usize, col as usize) {
                result.push(Position::new(row as usize, col as usize));
            }
        }
    }
    result
}

/// Rejection-samples distinct mine indices, never choosing `exclude`.
pub fn place_mines(
    settings: &MinesweeperSettings,
    exclude: Position,
    rng: &mut SessionRng,
) -> HashSet<usize> {
    let total = settings.total_cells();
    let excluded = exclude.to_index(settings.cols);
    let target = settings.mines.min(total.saturating_sub(1));

    let mut mines = HashSet::with_capacity(target);
    while mines.len() < target {
        let index = rng.random_range(0..total);
        if index != excluded {
            mines.insert(index);
        }
    }
    mines
}

pub fn count_adjacent_mines(
    settings: &MinesweeperSettings,
    mines: &HashSet<usize>,
    pos: Position,
) -> u8 {
    neighbours(settings, pos)
        .into_iter()
        .filter(|n| mines.contains(&n.to_index(settings.cols)))
        .count() as u8
}

/// Breadth-first reveal from `start`. Zero cells expand into their neighbours,
/// numbered cells are revealed but stop the flood. Flagged cells are skipped.
pub fn flood_reveal(
    settings: &MinesweeperSettings,
    mines: &HashSet<usize>,
    revealed: &HashSet<usize>,
    flagged: &HashSet<usize>,
    start: Position,
) -> HashSet<usize> {
    let cols = settings.cols;
    let mut revealed = revealed.clone();
    let mut queue = VecDeque::from([start]);

    while let Some(pos) = queue.pop_front() {
        if !revealed.insert(pos.to_index(cols)) {
            continue;
        }
        if count_adjacent_mines(settings, mines, pos) != 0 {
            continue;
        }

        for next in neighbours(settings, pos) {
            let index = next.to_index(cols);
            if !revealed.contains(&index) && !flagged.contains(&index) && !mines.contains(&index) {
                queue.push_back(next);
            }
        }
    }

    revealed
}
