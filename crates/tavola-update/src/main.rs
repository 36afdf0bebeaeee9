//! tavola-update - Update a restaurant's rating and cost
//!
//! Finds an entry by case-insensitive substring match on name or cuisine,
//! prompts for new rating and cost values, and rewrites the file in place.
//! Nothing is written until every prompt has succeeded.

use anyhow::{bail, Result};
use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;

use tavola_core::entry::{cost_label, rating_label, Entry, MAX_COST, MAX_RATING};
use tavola_core::prompt;
use tavola_core::store;

#[derive(Parser)]
#[command(name = "tavola-update")]
#[command(about = "Update a restaurant's rating and cost")]
#[command(version)]
#[command(after_help = "\
EXAMPLES:
    tavola-update sushi          Find \"sushi\" in restaurants.txt and edit it
    tavola-update thai places.txt

VALUES:
    Rating: 0 = haven't been, 1 = ⭐, 2 = ⭐⭐, 3 = ⭐⭐⭐
    Cost:   0 = unknown, 1 = 💲 (10-30€), 2 = 💲💲 (30-60€), 3 = 💲💲💲 (60€+)

    An empty answer at a prompt keeps the current value.")]
struct Cli {
    /// Name or cuisine substring to search for
    query: String,

    /// Restaurant list file
    #[arg(default_value = store::DEFAULT_FILE)]
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    run(&cli, &mut stdin.lock())
}

fn run(cli: &Cli, input: &mut impl BufRead) -> Result<()> {
    let mut lines = store::read_list(&cli.file)?;

    let matches = find_matches(&lines, &cli.query);
    if matches.is_empty() {
        bail!("no restaurants matching \"{}\"", cli.query);
    }

    let mut selected = select(input, matches)?;
    let name = selected.name().to_string();

    println!(
        "\n{}  (Rating: {}, Cost: {})\n",
        name,
        rating_label(selected.rating()),
        cost_label(selected.cost())
    );

    let rating = prompt::prompt_value(
        input,
        "Rating (0=haven't been, 1=⭐, 2=⭐⭐, 3=⭐⭐⭐)",
        selected.rating(),
        MAX_RATING,
    )?;
    let cost = prompt::prompt_value(
        input,
        "Cost (0=unknown, 1=💲 10-30€, 2=💲💲 30-60€, 3=💲💲💲 60€+)",
        selected.cost(),
        MAX_COST,
    )?;

    selected.set_rating(rating);
    selected.set_cost(cost);
    lines[selected.line_index] = selected.to_line();

    store::write_list(&cli.file, &lines)?;

    println!(
        "\nUpdated {}  (Rating: {}, Cost: {})",
        name,
        rating_label(rating),
        cost_label(cost)
    );

    Ok(())
}

/// Collect entries whose name or cuisine contains the query
fn find_matches(lines: &[String], query: &str) -> Vec<Entry> {
    Entry::parse_all(lines)
        .into_iter()
        .filter(|e| e.matches(query))
        .collect()
}

/// Pick the entry to edit; a single match skips the prompt entirely
fn select(input: &mut impl BufRead, mut matches: Vec<Entry>) -> Result<Entry> {
    if matches.len() == 1 {
        return Ok(matches.remove(0));
    }

    println!("\nMatching restaurants:");
    for (i, m) in matches.iter().enumerate() {
        println!(
            "  {}. {} ({}) - Rating: {}, Cost: {}",
            i + 1,
            m.name(),
            m.cuisine(),
            rating_label(m.rating()),
            cost_label(m.cost())
        );
    }

    let index = prompt::choose(input, matches.len())?;
    Ok(matches.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn list_file(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("restaurants.txt");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    fn cli(query: &str, file: &PathBuf) -> Cli {
        Cli {
            query: query.to_string(),
            file: file.clone(),
        }
    }

    #[test]
    fn test_find_matches_name_and_cuisine() {
        let lines = lines(&[
            "Header",
            "1. Le Petit # x # French # 1 # 2",
            "2. Sakura # x # Japanese # 2 # 3",
            "3. Trattoria # x # Italian # 0 # 0",
        ]);

        assert_eq!(find_matches(&lines, "petit").len(), 1);
        assert_eq!(find_matches(&lines, "ITA").len(), 1);
        assert_eq!(find_matches(&lines, "a").len(), 2);
        assert!(find_matches(&lines, "sushi").is_empty());
    }

    #[test]
    fn test_find_matches_skips_malformed_lines() {
        let lines = lines(&[
            "Header",
            "not numbered # x # French # 1 # 2",
            "1. Short # x # French # 1",
            "2. Le Petit # x # French # 1 # 2",
        ]);

        let matches = find_matches(&lines, "french");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name(), "Le Petit");
        assert_eq!(matches[0].line_index, 3);
    }

    #[test]
    fn test_update_single_match_skips_selection() {
        let (_dir, path) = list_file("My Restaurants\n1. Le Petit # something # French # 1 # 2\n");

        // Rating 3, cost left at the default
        run(&cli("petit", &path), &mut Cursor::new("3\n\n")).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "My Restaurants\n1. Le Petit # something # French # 3 # 2\n"
        );
    }

    #[test]
    fn test_update_selects_among_multiple_matches() {
        let (_dir, path) = list_file(
            "Header\n1. Alpha # x # Thai # 0 # 0\n2. Beta # x # Thai # 0 # 0\n",
        );

        // Choice 2, rating 1, cost 3
        run(&cli("thai", &path), &mut Cursor::new("2\n1\n3\n")).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Header\n1. Alpha # x # Thai # 0 # 0\n2. Beta # x # Thai # 1 # 3\n"
        );
    }

    #[test]
    fn test_no_match_leaves_file_untouched() {
        let content = "Header\n1. Alpha # x # Thai # 0 # 0\n";
        let (_dir, path) = list_file(content);

        let err = run(&cli("sushi", &path), &mut Cursor::new("")).unwrap_err();
        assert!(err.to_string().contains("no restaurants matching"));
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_invalid_selection_leaves_file_untouched() {
        let content = "Header\n1. Alpha # x # Thai # 0 # 0\n2. Beta # x # Thai # 0 # 0\n";
        let (_dir, path) = list_file(content);

        assert!(run(&cli("thai", &path), &mut Cursor::new("9\n")).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_invalid_rating_leaves_file_untouched() {
        let content = "Header\n1. Alpha # x # Thai # 0 # 0\n";
        let (_dir, path) = list_file(content);

        assert!(run(&cli("alpha", &path), &mut Cursor::new("5\n")).is_err());
        assert!(run(&cli("alpha", &path), &mut Cursor::new("abc\n")).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_invalid_cost_leaves_file_untouched() {
        let content = "Header\n1. Alpha # x # Thai # 0 # 0\n";
        let (_dir, path) = list_file(content);

        // Rating accepted, cost rejected
        assert!(run(&cli("alpha", &path), &mut Cursor::new("2\n7\n")).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_empty_answers_keep_both_values() {
        let content = "Header\n1. Alpha # x # Thai # 2 # 1\n";
        let (_dir, path) = list_file(content);

        run(&cli("alpha", &path), &mut Cursor::new("\n\n")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_update_preserves_other_lines_and_numbering() {
        let (_dir, path) = list_file(
            "Header\n1. Alpha # x # Thai # 0 # 0\n\n10.  Gap # x # Laotian # 0 # 0\n",
        );

        run(&cli("gap", &path), &mut Cursor::new("2\n2\n")).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Header\n1. Alpha # x # Thai # 0 # 0\n\n10.  Gap # x # Laotian # 2 # 2\n"
        );
    }
}
