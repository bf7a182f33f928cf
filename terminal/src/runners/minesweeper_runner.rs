use std::io::{BufRead, Write};

use arcade_engine::games::SessionRng;
use arcade_engine::games::minesweeper::{GameStatus, MinesweeperGameState, MinesweeperSettings};
use arcade_engine::{debug_log, log};

use super::{prompt_line, write_text};
use crate::commands::{MinesweeperCommand, parse_minesweeper};
use crate::render::render_minesweeper;

const PROMPT: &str = "r <row> <col> = reveal, f <row> <col> = flag, n = new game, q = quit> ";

pub fn run_minesweeper<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    settings: MinesweeperSettings,
    rng: &mut SessionRng,
) -> Result<(), String> {
    let mut state = MinesweeperGameState::new(settings)?;
    log!(
        "Minesweeper started on a {}x{} grid with {} mines",
        settings.rows, settings.cols, settings.mines
    );

    loop {
        write_text(output, &render_minesweeper(&state))?;

        let Some(line) = prompt_line(&mut input, output, PROMPT)? else {
            break;
        };

        let command = match parse_minesweeper(&line, settings.rows, settings.cols) {
            Ok(command) => command,
            Err(message) => {
                write_text(output, &format!("{}\n", message))?;
                continue;
            }
        };

        let next = match command {
            MinesweeperCommand::Quit => break,
            MinesweeperCommand::New => {
                log!("Minesweeper restarted");
                Some(state.restart())
            }
            MinesweeperCommand::Reveal(pos) => state.reveal(pos, rng),
            MinesweeperCommand::Flag(pos) => state.toggle_flag(pos),
        };

        match next {
            Some(next) => {
                if !state.mines_placed() && next.mines_placed() {
                    debug_log!("Mines placed with session seed {}", rng.seed());
                }
                if !state.is_over() && next.is_over() {
                    match next.status() {
                        GameStatus::Won => log!("Minesweeper won"),
                        GameStatus::Lost => log!("Minesweeper lost"),
                        GameStatus::Playing => {}
                    }
                }
                state = next;
            }
            None => write_text(output, "Nothing to do there\n")?,
        }
    }

    Ok(())
}
