//! Line-oriented prompting
//!
//! Prompts are generic over the reader and writer so the interactive menu
//! can be driven from tests as well as from a terminal.

use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Print `prompt` and read one line
///
/// Returns `None` at end of input. Only the line ending is stripped, so
/// spaces typed around a value are kept.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompt with the current value shown, returns None if user keeps it
pub fn read_with_default<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    current: &str,
) -> io::Result<Option<String>> {
    let line = read_line(input, output, &format!("{} ({}): ", prompt, current))?;
    Ok(line.filter(|value| !value.is_empty()))
}

/// Prompt for confirmation
///
/// Returns true if user confirms, false otherwise.
/// In non-interactive mode (no TTY), returns false.
pub fn confirm(prompt: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        return Ok(false);
    }

    let stdin = io::stdin();
    let answer = read_line(
        &mut stdin.lock(),
        &mut io::stdout(),
        &format!("{} [y/N] ", prompt),
    )?;

    let answer = answer.unwrap_or_default().trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
