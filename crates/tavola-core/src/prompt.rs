//! Interactive console prompts
//!
//! Input comes from an explicitly passed reader rather than a process-wide
//! stdin handle, so the prompt logic runs against any `BufRead` in tests.
//! Prompts themselves go to stdout; a failed prompt aborts the whole edit
//! before anything touches the file.

use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors from interactive prompts
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("invalid selection")]
    InvalidSelection,

    #[error("value must be 0-{0}")]
    OutOfRange(u8),

    #[error("reading input: {0}")]
    Io(#[from] io::Error),
}

fn read_trimmed(input: &mut impl BufRead) -> io::Result<String> {
    let mut text = String::new();
    input.read_line(&mut text)?;
    Ok(text.trim().to_string())
}

/// Prompt for a 1-based menu choice out of `count` options.
///
/// Returns the zero-based index. Non-numeric input or a value outside
/// `[1, count]` is an error, never a retry.
pub fn choose(input: &mut impl BufRead, count: usize) -> Result<usize, PromptError> {
    print!("\nSelect [1-{}]: ", count);
    io::stdout().flush()?;

    let text = read_trimmed(input)?;
    let choice: usize = text.parse().map_err(|_| PromptError::InvalidSelection)?;
    if choice < 1 || choice > count {
        return Err(PromptError::InvalidSelection);
    }

    Ok(choice - 1)
}

/// Prompt for a value in `[0, max]`, showing the current value.
///
/// Empty input keeps `current`. Non-numeric or out-of-range input is an
/// error, never a retry.
pub fn prompt_value(
    input: &mut impl BufRead,
    label: &str,
    current: u8,
    max: u8,
) -> Result<u8, PromptError> {
    print!("{} [{}]: ", label, current);
    io::stdout().flush()?;

    let text = read_trimmed(input)?;
    if text.is_empty() {
        return Ok(current);
    }

    let value: u8 = text.parse().map_err(|_| PromptError::OutOfRange(max))?;
    if value > max {
        return Err(PromptError::OutOfRange(max));
    }

    Ok(value)
}
