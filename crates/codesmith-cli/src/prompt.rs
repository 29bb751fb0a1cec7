//! Interactive stdin prompts for the `run` family of commands.

use std::io::{self, Write};

/// Prints `prompt` without a newline and reads one trimmed line from stdin.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
