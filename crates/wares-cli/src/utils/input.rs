//! Interactive prompt helpers for reading user input.

use std::io::{self, Write};

use crate::error::CliError;

/// Prompt for a line of input and return it trimmed.
///
/// End of input (for example a closed pipe) is an error rather than an
/// empty answer, so callers in a prompt loop terminate.
pub fn prompt_string(prompt: &str) -> Result<String, CliError> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(read_failure)?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input).map_err(read_failure)?;
    if bytes == 0 {
        return Err(CliError::Io("unexpected end of input".to_string()));
    }
    Ok(input.trim().to_string())
}

/// Ask a yes/no question, defaulting to no.
pub fn prompt_confirmation(prompt: &str) -> Result<bool, CliError> {
    loop {
        let answer = prompt_string(&format!("{prompt} [y/N]"))?;
        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "" | "n" | "no" => return Ok(false),
            _ => eprintln!("Please answer 'y' or 'n'."),
        }
    }
}

/// Prompt for a non-negative number, re-asking until the input parses.
pub fn prompt_float(prompt: &str) -> Result<f64, CliError> {
    loop {
        let raw = prompt_string(prompt)?;
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => return Ok(value),
            Ok(_) => eprintln!("Please enter a non-negative number."),
            Err(_) => eprintln!("'{raw}' is not a number."),
        }
    }
}

fn read_failure(err: io::Error) -> CliError {
    CliError::Io(format!("failed to read user input: {err}"))
}
