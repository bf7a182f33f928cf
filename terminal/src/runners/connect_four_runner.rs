use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use arcade_engine::games::connect_four::{ConnectFourGameState, GameStatus, Player};
use arcade_engine::{debug_log, log};

use super::{prompt_line, write_text};
use crate::commands::{ConnectFourCommand, parse_connect_four};
use crate::config::ConnectFourPreferences;
use crate::render::render_connect_four;

const PROMPT: &str = "Column (1-7), n = new game, q = quit> ";

fn log_outcome(state: &ConnectFourGameState, human: Player) {
    match state.status {
        GameStatus::Won(player) if player == human => log!("Connect Four won by the human ({})", player.name()),
        GameStatus::Won(player) => log!("Connect Four won by the computer ({})", player.name()),
        GameStatus::Draw => log!("Connect Four ended in a draw after {} moves", state.moves_made),
        GameStatus::InProgress => {}
    }
}

pub fn run_connect_four<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    preferences: &ConnectFourPreferences,
) -> Result<(), String> {
    let human = preferences.human;
    let delay = Duration::from_millis(preferences.ai_delay_ms);
    let mut state = ConnectFourGameState::new(Player::Red);
    log!("Connect Four started, human plays {}", human.name());

    loop {
        if !state.is_over() && state.current_player != human {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            if let Some(next) = state.bot_column().and_then(|col| {
                debug_log!("Computer drops into column {}", col + 1);
                state.play(col)
            }) {
                state = next;
                log_outcome(&state, human);
            }
        }

        write_text(output, &render_connect_four(&state))?;

        let Some(line) = prompt_line(&mut input, output, PROMPT)? else {
            break;
        };

        match parse_connect_four(&line) {
            Ok(ConnectFourCommand::Quit) => break,
            Ok(ConnectFourCommand::New) => {
                state = ConnectFourGameState::new(Player::Red);
                log!("Connect Four restarted");
            }
            Ok(ConnectFourCommand::Drop(_)) if state.is_over() => {
                write_text(output, "Game over, press n for a new game\n")?;
            }
            Ok(ConnectFourCommand::Drop(col)) => match state.play(col) {
                Some(next) => {
                    state = next;
                    log_outcome(&state, human);
                }
                None => write_text(output, &format!("Column {} is full\n", col + 1))?,
            },
            Err(message) => write_text(output, &format!("{}\n", message))?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str, human: Player) -> String {
        let preferences = ConnectFourPreferences {
            human,
            ai_delay_ms: 0,
        };
        let mut output = Vec::new();
        run_connect_four(script.as_bytes(), &mut output, &preferences).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_human_move_is_answered_by_computer() {
        let output = run("4\nq\n", Player::Red);

        assert!(output.contains("red to move"));
        // after the human and the computer have each moved it is red's turn again
        let last_board = output.rsplit(" 1 2 3 4 5 6 7").next().unwrap();
        assert_eq!(last_board.matches('R').count(), 1);
        assert_eq!(last_board.matches('Y').count(), 1);
    }

    #[test]
    fn test_computer_opens_when_human_plays_yellow() {
        let output = run("q\n", Player::Yellow);

        assert!(output.contains("yellow to move"));
    }

    #[test]
    fn test_invalid_input_is_reported() {
        let output = run("9\nhello\n", Player::Red);

        assert!(output.contains("Column must be between 1 and 7"));
        assert!(output.contains("Invalid column: hello"));
    }

    #[test]
    fn test_end_of_input_stops_the_loop() {
        let output = run("", Player::Red);

        assert!(output.ends_with(PROMPT));
    }
}
