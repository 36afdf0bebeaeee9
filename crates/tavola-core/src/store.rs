//! Whole-file line store for the restaurant list
//!
//! The list is always loaded fully into memory, mutated there, and written
//! back in one pass. There is no locking; concurrent writers race and the
//! last one wins.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Default list file, relative to the current directory
pub const DEFAULT_FILE: &str = "restaurants.txt";

/// Read the list file into lines.
///
/// Fails if the file cannot be read or holds fewer than two lines
/// (a header with no entries is not a usable list).
pub fn read_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let lines: Vec<String> = content.lines().map(String::from).collect();
    if lines.len() < 2 {
        bail!("file has no restaurant entries");
    }

    Ok(lines)
}

/// Overwrite the list file from an in-memory line list.
///
/// Every line gets a trailing newline. Callers only reach this after the
/// full line list is built, so a failed run never leaves a partial write
/// from a half-finished edit.
pub fn write_list(path: &Path, lines: &[String]) -> Result<()> {
    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
