use arcade_engine::games::connect_four::COLUMNS;
use arcade_engine::games::minesweeper::Position;
use arcade_engine::games::solitaire::{FOUNDATIONS, TABLEAU_COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectFourCommand {
    Drop(usize),
    New,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinesweeperCommand {
    Reveal(Position),
    Flag(Position),
    New,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolitaireCommand {
    Draw,
    SelectWaste,
    Select { column: usize, card: Option<usize> },
    ToFoundation(usize),
    ToColumn(usize),
    ClearSelection,
    New,
    Quit,
}

/// Parses a 1-based number and returns it 0-based, checking the upper bound.
fn parse_index(token: Option<&str>, what: &str, max: usize) -> Result<usize, String> {
    let token = token.ok_or_else(|| format!("Missing {}", what))?;
    let value: usize = token
        .parse()
        .map_err(|_| format!("Invalid {}: {}", what, token))?;
    if value == 0 || value > max {
        return Err(format!("{} must be between 1 and {}", capitalize(what), max));
    }
    Ok(value - 1)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn expect_end<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<(), String> {
    match tokens.next() {
        Some(extra) => Err(format!("Unexpected argument: {}", extra)),
        None => Ok(()),
    }
}

pub fn parse_connect_four(line: &str) -> Result<ConnectFourCommand, String> {
    let mut tokens = line.split_whitespace();
    let command = match tokens.next() {
        Some("n") => ConnectFourCommand::New,
        Some("q") => ConnectFourCommand::Quit,
        Some(token) => ConnectFourCommand::Drop(parse_index(Some(token), "column", COLUMNS)?),
        None => return Err("Empty command".to_string()),
    };
    expect_end(tokens)?;
    Ok(command)
}

pub fn parse_minesweeper(line: &str, rows: usize, cols: usize) -> Result<MinesweeperCommand, String> {
    let mut tokens = line.split_whitespace();
    let command = match tokens.next() {
        Some("n") => MinesweeperCommand::New,
        Some("q") => MinesweeperCommand::Quit,
        Some(action @ ("r" | "f")) => {
            let row = parse_index(tokens.next(), "row", rows)?;
            let col = parse_index(tokens.next(), "column", cols)?;
            let pos = Position::new(row, col);
            if action == "r" {
                MinesweeperCommand::Reveal(pos)
            } else {
                MinesweeperCommand::Flag(pos)
            }
        }
        Some(other) => return Err(format!("Unknown command: {}", other)),
        None => return Err("Empty command".to_string()),
    };
    expect_end(tokens)?;
    Ok(command)
}

pub fn parse_solitaire(line: &str) -> Result<SolitaireCommand, String> {
    let mut tokens = line.split_whitespace();
    let command = match tokens.next() {
        Some("d") => SolitaireCommand::Draw,
        Some("w") => SolitaireCommand::SelectWaste,
        Some("s") => {
            let column = parse_index(tokens.next(), "column", TABLEAU_COLUMNS)?;
            let card = match tokens.next() {
                Some(token) => Some(parse_index(Some(token), "card", usize::MAX)?),
                None => None,
            };
            SolitaireCommand::Select { column, card }
        }
        Some("f") => SolitaireCommand::ToFoundation(parse_index(tokens.next(), "foundation", FOUNDATIONS)?),
        Some("t") => SolitaireCommand::ToColumn(parse_index(tokens.next(), "column", TABLEAU_COLUMNS)?),
        Some("x") => SolitaireCommand::ClearSelection,
        Some("n") => SolitaireCommand::New,
        Some("q") => SolitaireCommand::Quit,
        Some(other) => return Err(format!("Unknown command: {}", other)),
        None => return Err("Empty command".to_string()),
    };
    expect_end(tokens)?;
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_four_columns_are_one_based() {
        assert_eq!(parse_connect_four("1"), Ok(ConnectFourCommand::Drop(0)));
        assert_eq!(parse_connect_four(" 7 "), Ok(ConnectFourCommand::Drop(6)));
        assert!(parse_connect_four("0").is_err());
        assert!(parse_connect_four("8").is_err());
        assert!(parse_connect_four("abc").is_err());
        assert!(parse_connect_four("").is_err());
    }

    #[test]
    fn test_connect_four_keywords() {
        assert_eq!(parse_connect_four("n"), Ok(ConnectFourCommand::New));
        assert_eq!(parse_connect_four("q"), Ok(ConnectFourCommand::Quit));
        assert!(parse_connect_four("q now").is_err());
    }

    #[test]
    fn test_minesweeper_reveal_and_flag() {
        assert_eq!(
            parse_minesweeper("r 1 9", 9, 9),
            Ok(MinesweeperCommand::Reveal(Position::new(0, 8)))
        );
        assert_eq!(
            parse_minesweeper("f 3 2", 9, 9),
            Ok(MinesweeperCommand::Flag(Position::new(2, 1)))
        );
        assert!(parse_minesweeper("r 10 1", 9, 9).is_err());
        assert!(parse_minesweeper("r 1", 9, 9).is_err());
        assert!(parse_minesweeper("x 1 1", 9, 9).is_err());
    }

    #[test]
    fn test_solitaire_commands() {
        assert_eq!(parse_solitaire("d"), Ok(SolitaireCommand::Draw));
        assert_eq!(parse_solitaire("w"), Ok(SolitaireCommand::SelectWaste));
        assert_eq!(
            parse_solitaire("s 3"),
            Ok(SolitaireCommand::Select { column: 2, card: None })
        );
        assert_eq!(
            parse_solitaire("s 7 4"),
            Ok(SolitaireCommand::Select { column: 6, card: Some(3) })
        );
        assert_eq!(parse_solitaire("f 4"), Ok(SolitaireCommand::ToFoundation(3)));
        assert_eq!(parse_solitaire("t 1"), Ok(SolitaireCommand::ToColumn(0)));
        assert!(parse_solitaire("f 5").is_err());
        assert!(parse_solitaire("t 8").is_err());
        assert!(parse_solitaire("s").is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            parse_connect_four("9").unwrap_err(),
            "Column must be between 1 and 7"
        );
        assert_eq!(parse_solitaire("t").unwrap_err(), "Missing column");
    }
}
