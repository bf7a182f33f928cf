use super::board::{Board, COLUMNS, ROWS};
use super::types::{Outcome, Player};

const WIN_LENGTH: usize = 4;

// Forward-only directions: every line is found from its first cell.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

pub fn check_winner(board: &Board) -> Option<Outcome> {
    for row in 0..ROWS {
        for col in 0..COLUMNS {
            let Some(player) = board.get(row, col).player() else {
                continue;
            };

            for (d_row, d_col) in DIRECTIONS {
                if run_length(board, row, col, d_row, d_col, player) >= WIN_LENGTH {
                    return Some(Outcome::Winner(player));
                }
            }
        }
    }

    if board.is_full() {
        return Some(Outcome::Draw);
    }

    None
}

fn run_length(
    board: &Board,
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
    player: Player,
) -> usize {
    let mut count = 0;
    let mut r = row as isize;
    let mut c = col as isize;

    while r >= 0 && r < ROWS as isize && c >= 0 && c < COLUMNS as isize {
        if board.get(r as usize, c as usize).player() != Some(player) {
            break;
        }
        count += 1;
        r += d_row;
        c += d_col;
    }

    count
}
