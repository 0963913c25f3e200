//! Line-based terminal input

use crate::error::Result;
use std::io::{self, BufRead, Write};

/// Get user input with a prompt
///
/// Returns `None` once the input is exhausted.
pub(crate) fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// True for the words that end an interactive session
pub(crate) fn is_quit(input: &str) -> bool {
    matches!(input, "quit" | "q" | "exit")
}
