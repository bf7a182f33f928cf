use std::io::{BufRead, Write};

use arcade_engine::games::SessionRng;
use arcade_engine::games::solitaire::SolitaireGameState;
use arcade_engine::log;

use super::{prompt_line, write_text};
use crate::commands::{SolitaireCommand, parse_solitaire};
use crate::render::render_solitaire;

const PROMPT: &str =
    "d = draw, w = waste, s <col> [card] = select, f <n> = to foundation, t <col> = to column, x = clear, n = new, q = quit> ";

fn apply(state: &SolitaireGameState, command: SolitaireCommand, rng: &mut SessionRng) -> Option<SolitaireGameState> {
    match command {
        SolitaireCommand::Draw => state.draw_card(),
        SolitaireCommand::SelectWaste => state.select_waste(),
        SolitaireCommand::Select { column, card: None } => state.select_column(column),
        SolitaireCommand::Select { column, card: Some(index) } => state.select_card(column, index),
        SolitaireCommand::ToFoundation(foundation) => state.move_to_foundation(foundation),
        SolitaireCommand::ToColumn(target) => state.move_to_column(target),
        SolitaireCommand::ClearSelection => Some(state.clear_selection()),
        SolitaireCommand::New => {
            log!("Solitaire redealt");
            Some(SolitaireGameState::deal(rng))
        }
        SolitaireCommand::Quit => None,
    }
}

pub fn run_solitaire<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    rng: &mut SessionRng,
) -> Result<(), String> {
    let mut state = SolitaireGameState::deal(rng);
    log!("Solitaire dealt");

    loop {
        write_text(output, &render_solitaire(&state))?;

        let Some(line) = prompt_line(&mut input, output, PROMPT)? else {
            break;
        };

        let command = match parse_solitaire(&line) {
            Ok(SolitaireCommand::Quit) => break,
            Ok(command) => command,
            Err(message) => {
                write_text(output, &format!("{}\n", message))?;
                continue;
            }
        };

        match apply(&state, command, rng) {
            Some(next) => {
                if !state.is_won() && next.is_won() {
                    log!("Solitaire won in {} moves", next.moves_made());
                }
                state = next;
            }
            None => write_text(output, "That move is not allowed\n")?,
        }
    }

    Ok(())
}
