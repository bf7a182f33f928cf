use arcade_engine::games::connect_four::{self, Cell, ConnectFourGameState};
use arcade_engine::games::minesweeper::{self, CellView, MinesweeperGameState};
use arcade_engine::games::solitaire::{Card, Column, Selection, SolitaireGameState};

fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_connect_four(state: &ConnectFourGameState) -> String {
    let header: Vec<String> = (1..=connect_four::COLUMNS).map(|c| c.to_string()).collect();
    let mut lines = vec![format!(" {}", header.join(" "))];

    for row in state.board.rows() {
        let cells: Vec<&str> = row
            .iter()
            .map(|cell| match cell {
                Cell::Empty => ".",
                Cell::Disc(connect_four::Player::Red) => "R",
                Cell::Disc(connect_four::Player::Yellow) => "Y",
            })
            .collect();
        lines.push(format!(" {}", cells.join(" ")));
    }

    lines.push(match state.status {
        connect_four::GameStatus::InProgress => format!("{} to move", state.current_player.name()),
        connect_four::GameStatus::Won(player) => format!("{} wins", player.name()),
        connect_four::GameStatus::Draw => "Draw".to_string(),
    });
    join_lines(lines)
}

pub fn render_minesweeper(state: &MinesweeperGameState) -> String {
    let settings = state.settings();
    let header: String = (1..=settings.cols).map(|col| format!("{:>3}", col)).collect();
    let mut lines = vec![format!("    {}", header)];

    for row in 0..settings.rows {
        let cells: String = (0..settings.cols)
            .map(|col| {
                let symbol = match state.cell_view(minesweeper::Position::new(row, col)) {
                    CellView::Hidden => "#".to_string(),
                    CellView::Flagged => "F".to_string(),
                    CellView::Mine => "*".to_string(),
                    CellView::Revealed(0) => ".".to_string(),
                    CellView::Revealed(n) => n.to_string(),
                };
                format!("{:>3}", symbol)
            })
            .collect();
        lines.push(format!("{:>3} {}", row + 1, cells));
    }

    lines.push(match state.status() {
        minesweeper::GameStatus::Playing => format!("Mines left: {}", state.mines_remaining()),
        minesweeper::GameStatus::Won => "You win!".to_string(),
        minesweeper::GameStatus::Lost => "Boom! You hit a mine.".to_string(),
    });
    join_lines(lines)
}

fn card_or_blank(card: Option<&Card>) -> String {
    card.map(|c| c.label()).unwrap_or_else(|| "--".to_string())
}

fn column_line(number: usize, column: &Column, selected_from: Option<usize>) -> String {
    let mut line = format!("{}:", number);
    for (index, card) in column.cards().iter().enumerate() {
        if index < column.hidden() {
            line.push_str(" ##");
        } else if selected_from.is_some_and(|start| index >= start) {
            line.push_str(&format!(" {}*", card.label()));
        } else {
            line.push_str(&format!(" {}", card.label()));
        }
    }
    line
}

pub fn render_solitaire(state: &SolitaireGameState) -> String {
    let selection = state.selection();

    let waste_marker = if selection == Some(Selection::Waste) { "*" } else { "" };
    let foundations: String = state
        .foundations()
        .iter()
        .map(|pile| format!(" [{}]", card_or_blank(pile.last())))
        .collect();
    let mut lines = vec![format!(
        "Stock: {:<3} Waste: {}{}   Foundations:{}",
        state.stock().len(),
        card_or_blank(state.waste().last()),
        waste_marker,
        foundations
    )];

    for (i, column) in state.columns().iter().enumerate() {
        let selected_from = match selection {
            Some(Selection::Column { column: c, start }) if c == i => Some(start),
            _ => None,
        };
        lines.push(column_line(i + 1, column, selected_from));
    }

    lines.push(if state.is_won() {
        format!("All foundations complete, you win in {} moves!", state.moves_made())
    } else {
        format!("Moves: {}", state.moves_made())
    });
    join_lines(lines)
}
