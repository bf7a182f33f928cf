use super::board::{Board, COLUMNS, ROWS, drop_in_column, empty_columns};
use super::types::{Outcome, Player};
use super::win_detector::check_winner;

const WINDOW: usize = 4;
const FOUR_SCORE: i32 = 1000;
const THREE_SCORE: i32 = 10;
const TWO_SCORE: i32 = 4;
const OPPONENT_THREE_PENALTY: i32 = -8;
const DECISIVE_SCORE: i32 = 9999;

fn score_window(cells: [Option<Player>; WINDOW], player: Player) -> i32 {
    let own = cells.iter().filter(|&&c| c == Some(player)).count();
    let opponent = cells
        .iter()
        .filter(|&&c| c == Some(player.opponent()))
        .count();
    let empty = WINDOW - own - opponent;

    match (own, opponent, empty) {
        (4, _, _) => FOUR_SCORE,
        (3, _, 1) => THREE_SCORE,
        (2, _, 2) => TWO_SCORE,
        (_, 3, 1) => OPPONENT_THREE_PENALTY,
        _ => 0,
    }
}

fn window_at(board: &Board, row: usize, col: usize, d_row: isize, d_col: isize) -> [Option<Player>; WINDOW] {
    let mut cells = [None; WINDOW];
    for (i, cell) in cells.iter_mut().enumerate() {
        let r = (row as isize + d_row * i as isize) as usize;
        let c = (col as isize + d_col * i as isize) as usize;
        *cell = board.get(r, c).player();
    }
    cells
}

/// Sums window scores over every horizontal, vertical and diagonal run of four cells.
pub fn score_position(board: &Board, player: Player) -> i32 {
    let mut score = 0;

    for row in 0..ROWS {
        for col in 0..=COLUMNS - WINDOW {
            score += score_window(window_at(board, row, col, 0, 1), player);
        }
    }

    for row in 0..=ROWS - WINDOW {
        for col in 0..COLUMNS {
            score += score_window(window_at(board, row, col, 1, 0), player);
        }
    }

    for row in 0..=ROWS - WINDOW {
        for col in 0..=COLUMNS - WINDOW {
            score += score_window(window_at(board, row, col, 1, 1), player);
        }
    }

    for row in 0..=ROWS - WINDOW {
        for col in WINDOW - 1..COLUMNS {
            score += score_window(window_at(board, row, col, 1, -1), player);
        }
    }

    score
}

fn best_reply_score(board: &Board, opponent: Player) -> i32 {
    let mut best = 0;
    let mut first = true;

    for col in empty_columns(board) {
        let Some(reply) = drop_in_column(board, col, opponent) else {
            continue;
        };
        let score = if check_winner(&reply) == Some(Outcome::Winner(opponent)) {
            DECISIVE_SCORE
        } else {
            score_position(&reply, opponent)
        };
        if first || score > best {
            best = score;
            first = false;
        }
    }

    best
}

fn evaluate_column(board: &Board, col: usize, ai: Player) -> Option<i32> {
    let after = drop_in_column(board, col, ai)?;

    if check_winner(&after) == Some(Outcome::Winner(ai)) {
        return Some(DECISIVE_SCORE);
    }

    let base = score_position(&after, ai);
    let reply = best_reply_score(&after, ai.opponent());
    if reply == DECISIVE_SCORE {
        return Some(-DECISIVE_SCORE);
    }

    Some(base - reply / 2)
}

/// One-ply lookahead: score each drop, then discount the opponent's best answer.
/// Ties keep the lowest column.
pub fn ai_column(board: &Board, ai: Player) -> Option<usize> {
    let mut best_column = None;
    let mut best_score = i32::MIN;

    for col in empty_columns(board) {
        let Some(score) = evaluate_column(board, col, ai) else {
            continue;
        };
        if best_column.is_none() || score > best_score {
            best_score = score;
            best_column = Some(col);
        }
    }

    best_column
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_scores_zero() {
        assert_eq!(score_position(&Board::new(), Player::Red), 0);
    }

    #[test]
    fn test_score_window_values() {
        let r = Some(Player::Red);
        let y = Some(Player::Yellow);

        assert_eq!(score_window([r, r, r, r], Player::Red), FOUR_SCORE);
        assert_eq!(score_window([r, r, None, r], Player::Red), THREE_SCORE);
        assert_eq!(score_window([None, r, None, r], Player::Red), TWO_SCORE);
        assert_eq!(score_window([y, y, y, None], Player::Red), OPPONENT_THREE_PENALTY);
        assert_eq!(score_window([r, r, r, y], Player::Red), 0);
        assert_eq!(score_window([r, y, None, None], Player::Red), 0);
        assert_eq!(score_window([r, None, None, None], Player::Red), 0);
    }

    #[test]
    fn test_score_single_bottom_pair() {
        // three horizontal windows hold both discs
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "..RR...",
        ]);

        assert_eq!(score_position(&board, Player::Red), 3 * TWO_SCORE);
    }

    #[test]
    fn test_ai_takes_immediate_win() {
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            "......Y",
            "R.....Y",
            "RR....Y",
        ]);

        assert_eq!(ai_column(&board, Player::Yellow), Some(6));
    }

    #[test]
    fn test_ai_blocks_opponent_win() {
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "RRR.YY.",
        ]);

        assert_eq!(ai_column(&board, Player::Yellow), Some(3));
    }

    #[test]
    fn test_ai_on_full_board_has_no_move() {
        let board = Board::from_rows([
            "RRYYRRY",
            "YYRRYYR",
            "RRYYRRY",
            "YYRRYYR",
            "RRYYRRY",
            "YYRRYYR",
        ]);

        assert_eq!(ai_column(&board, Player::Red), None);
    }

    #[test]
    fn test_ai_plays_only_open_column() {
        let board = Board::from_rows([
            "RRY.RRY",
            "YYRRYYR",
            "RRYYRRY",
            "YYRRYYR",
            "RRYYRRY",
            "YYRRYYR",
        ]);

        assert_eq!(ai_column(&board, Player::Yellow), Some(3));
    }

    #[test]
    fn test_ai_does_not_mutate_board() {
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            "...Y...",
            "..RR...",
        ]);
        let before = board;
        let first = ai_column(&board, Player::Yellow);
        let second = ai_column(&board, Player::Yellow);

        assert_eq!(board, before);
        assert_eq!(first, second);
    }
}
