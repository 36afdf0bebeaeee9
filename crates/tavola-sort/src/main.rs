//! tavola-sort - Re-sort the restaurant list alphabetically
//!
//! Strips each entry's numbering, sorts case-insensitively by the full
//! entry text, renumbers from 1, and rewrites the file in place.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use tavola_core::entry::split_number_prefix;
use tavola_core::store;

#[derive(Parser)]
#[command(name = "tavola-sort")]
#[command(about = "Re-sort the restaurant list alphabetically and renumber it")]
#[command(version)]
#[command(after_help = "\
EXAMPLES:
    tavola-sort                  Sort restaurants.txt in the current directory
    tavola-sort places.txt       Sort a specific list file

NOTES:
    The first line is kept as the header. Blank lines are dropped and
    surviving entries are renumbered from 1. The file is rewritten in
    place; no backup is kept.")]
struct Cli {
    /// Restaurant list file to sort
    #[arg(default_value = store::DEFAULT_FILE)]
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let count = run(&cli.file)?;
    println!("Sorted {} entries in {}", count, cli.file.display());

    Ok(())
}

fn run(file: &Path) -> Result<usize> {
    let lines = store::read_list(file)?;
    let sorted = sort_lines(&lines);
    store::write_list(file, &sorted)?;
    Ok(sorted.len() - 1)
}

/// Build the output line list: trimmed header, then entries sorted
/// case-insensitively and renumbered from 1.
///
/// The sort is stable, so entries whose text differs only by case keep
/// their original relative order.
fn sort_lines(lines: &[String]) -> Vec<String> {
    let header = lines[0].trim_end_matches([' ', '\t']);

    let mut entries: Vec<&str> = Vec::with_capacity(lines.len() - 1);
    for line in &lines[1..] {
        let stripped = line.trim_end_matches([' ', '\t']);
        if stripped.is_empty() {
            continue;
        }
        // Drop any previous numbering so re-sorting never stacks prefixes
        let text = match split_number_prefix(stripped) {
            Some((_, rest)) => rest,
            None => stripped,
        };
        entries.push(text);
    }

    entries.sort_by_cached_key(|e| e.to_lowercase());

    let mut out = Vec::with_capacity(entries.len() + 1);
    out.push(header.to_string());
    for (i, entry) in entries.iter().enumerate() {
        out.push(format!("{}. {}", i + 1, entry));
    }

    out
}
