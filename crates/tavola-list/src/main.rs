//! tavola-list - Display and filter the restaurant list
//!
//! Read-only companion to tavola-sort and tavola-update: prints the list
//! as an aligned table or as JSON, optionally narrowed by a name/cuisine
//! query or a cuisine filter.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use tavola_core::entry::{cost_label, rating_label, Entry};
use tavola_core::store;

#[derive(Parser)]
#[command(name = "tavola-list")]
#[command(about = "Display and filter the restaurant list")]
#[command(version)]
#[command(after_help = "\
EXAMPLES:
    tavola-list                      Show the whole list
    tavola-list pizza                Entries matching \"pizza\" by name or cuisine
    tavola-list --cuisine thai       Entries whose cuisine contains \"thai\"
    tavola-list --json               Full list as a JSON array
    tavola-list --file places.txt    Use a different list file")]
struct Cli {
    /// Optional name/cuisine substring to filter by
    query: Option<String>,

    /// Restaurant list file
    #[arg(long, default_value = store::DEFAULT_FILE)]
    file: PathBuf,

    /// Only show entries whose cuisine contains this substring
    #[arg(long)]
    cuisine: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lines = store::read_list(&cli.file)?;
    let entries = filter_entries(&lines, cli.query.as_deref(), cli.cuisine.as_deref());

    if cli.json {
        let records: Vec<_> = entries.iter().map(|e| e.record()).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No matching restaurants.");
        return Ok(());
    }

    println!(
        "{:<5} {:<30} {:<18} {:<8} {:<8}",
        "NUM", "NAME", "CUISINE", "RATING", "COST"
    );
    println!("{}", "-".repeat(72));

    for entry in &entries {
        println!(
            "{:<5} {:<30} {:<18} {:<8} {:<8}",
            entry.record().number,
            truncate(entry.name(), 30),
            truncate(entry.cuisine(), 18),
            rating_label(entry.rating()),
            cost_label(entry.cost())
        );
    }

    Ok(())
}

/// Parse all entries and apply the optional query and cuisine filters
fn filter_entries(lines: &[String], query: Option<&str>, cuisine: Option<&str>) -> Vec<Entry> {
    Entry::parse_all(lines)
        .into_iter()
        .filter(|e| query.map_or(true, |q| e.matches(q)))
        .filter(|e| {
            cuisine.map_or(true, |c| {
                e.cuisine().to_lowercase().contains(&c.to_lowercase())
            })
        })
        .collect()
}

/// Shorten a cell to `max` characters, marking the cut with "..."
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<String> {
        [
            "My Restaurants",
            "1. Le Petit # x # French # 1 # 2",
            "2. Sakura # x # Japanese # 2 # 3",
            "3. Trattoria # x # Italian # 0 # 0",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        assert_eq!(filter_entries(&lines(), None, None).len(), 3);
    }

    #[test]
    fn test_query_matches_name_or_cuisine() {
        let by_name = filter_entries(&lines(), Some("sakura"), None);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name(), "Sakura");

        let by_cuisine = filter_entries(&lines(), Some("ITA"), None);
        assert_eq!(by_cuisine.len(), 1);
        assert_eq!(by_cuisine[0].name(), "Trattoria");
    }

    #[test]
    fn test_cuisine_filter_ignores_name() {
        // "trattoria" is a name, not a cuisine
        assert!(filter_entries(&lines(), None, Some("trattoria")).is_empty());
        assert_eq!(filter_entries(&lines(), None, Some("japan")).len(), 1);
    }

    #[test]
    fn test_filters_combine() {
        let both = filter_entries(&lines(), Some("a"), Some("italian"));
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].name(), "Trattoria");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 11), "exactly ten");
        assert_eq!(truncate("a rather long restaurant name", 10), "a rathe...");
    }
}
