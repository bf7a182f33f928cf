mod connect_four_runner;
mod minesweeper_runner;
mod solitaire_runner;

use std::io::{BufRead, Write};

pub use connect_four_runner::run_connect_four;
pub use minesweeper_runner::run_minesweeper;
pub use solitaire_runner::run_solitaire;

pub(crate) fn write_text<W: Write>(output: &mut W, text: &str) -> Result<(), String> {
    output
        .write_all(text.as_bytes())
        .and_then(|_| output.flush())
        .map_err(|e| format!("Failed to write output: {}", e))
}

/// Prints the prompt and reads one line. `None` at end of input.
pub(crate) fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, String> {
    write_text(output, prompt)?;
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {}", e))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
