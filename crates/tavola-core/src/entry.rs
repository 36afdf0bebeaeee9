//! Restaurant entry parsing and formatting
//!
//! An entry line looks like:
//!
//! ```text
//! 12. Chez Panisse # https://example.com # Californian # 3 # 2
//! ```
//!
//! Splitting the text after the number prefix on `" #"` keeps each field's
//! leading space, so rejoining uses `" #"` (no trailing space). Both halves
//! of that asymmetry live here and nowhere else.

use serde::Serialize;

/// Number of `" # "`-separated fields in a valid entry
pub const FIELD_COUNT: usize = 5;

pub const IDX_NAME: usize = 0;
pub const IDX_WEBSITE: usize = 1;
pub const IDX_CUISINE: usize = 2;
pub const IDX_RATING: usize = 3;
pub const IDX_COST: usize = 4;

pub const MAX_RATING: u8 = 3;
pub const MAX_COST: u8 = 3;

/// Display labels for the stored 0-3 rating value
pub const RATING_LABELS: [&str; 4] = ["-", "⭐", "⭐⭐", "⭐⭐⭐"];
/// Display labels for the stored 0-3 cost value
pub const COST_LABELS: [&str; 4] = ["-", "💲", "💲💲", "💲💲💲"];

/// Label for a rating value; out-of-range values display as "-"
pub fn rating_label(value: u8) -> &'static str {
    RATING_LABELS.get(value as usize).copied().unwrap_or("-")
}

/// Label for a cost value; out-of-range values display as "-"
pub fn cost_label(value: u8) -> &'static str {
    COST_LABELS.get(value as usize).copied().unwrap_or("-")
}

/// Split a leading `"N. "` numbering prefix off a line.
///
/// The prefix is a run of ASCII digits, a literal dot, then a run of
/// spaces/tabs. Returns the prefix (verbatim, including its whitespace)
/// and the remainder, or `None` if the line does not start with one.
pub fn split_number_prefix(line: &str) -> Option<(&str, &str)> {
    let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let rest = &line[digits..];
    if !rest.starts_with('.') {
        return None;
    }

    let spaces = rest[1..]
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();
    if spaces == 0 {
        return None;
    }

    let split = digits + 1 + spaces;
    Some((&line[..split], &line[split..]))
}

/// One restaurant line, parsed but otherwise kept verbatim.
///
/// `number` holds the original prefix byte-for-byte so a rewritten entry
/// lands back in the file with its numbering and spacing untouched.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Index of this entry's line in the full file line list
    pub line_index: usize,
    /// Numbering prefix, e.g. `"12. "`
    pub number: String,
    /// The five raw fields; fields after the first keep their leading space
    pub fields: Vec<String>,
}

impl Entry {
    /// Parse a file line into an entry.
    ///
    /// Returns `None` for lines that are blank after right-trimming, carry
    /// no numbering prefix, or do not split into exactly five fields. Such
    /// lines are skipped by callers, never treated as errors.
    pub fn parse(line_index: usize, line: &str) -> Option<Entry> {
        let stripped = line.trim_end_matches([' ', '\t']);
        if stripped.is_empty() {
            return None;
        }

        let (number, rest) = split_number_prefix(stripped)?;

        let fields: Vec<String> = rest.splitn(FIELD_COUNT, " #").map(String::from).collect();
        if fields.len() != FIELD_COUNT {
            return None;
        }

        Some(Entry {
            line_index,
            number: number.to_string(),
            fields,
        })
    }

    /// Parse every entry line in a file line list, skipping the header
    /// and any line that does not parse.
    pub fn parse_all(lines: &[String]) -> Vec<Entry> {
        lines
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(i, line)| Entry::parse(i, line))
            .collect()
    }

    pub fn name(&self) -> &str {
        self.fields[IDX_NAME].trim()
    }

    pub fn website(&self) -> &str {
        self.fields[IDX_WEBSITE].trim()
    }

    pub fn cuisine(&self) -> &str {
        self.fields[IDX_CUISINE].trim()
    }

    /// Stored rating value; unparseable fields read as 0
    pub fn rating(&self) -> u8 {
        parse_value(&self.fields[IDX_RATING])
    }

    /// Stored cost value; unparseable fields read as 0
    pub fn cost(&self) -> u8 {
        parse_value(&self.fields[IDX_COST])
    }

    /// Replace the rating field, keeping the field's leading space
    pub fn set_rating(&mut self, value: u8) {
        self.fields[IDX_RATING] = format!(" {}", value);
    }

    /// Replace the cost field, keeping the field's leading space
    pub fn set_cost(&mut self, value: u8) {
        self.fields[IDX_COST] = format!(" {}", value);
    }

    /// Does the query match this entry's name or cuisine,
    /// case-insensitively, as a substring?
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name().to_lowercase().contains(&q) || self.cuisine().to_lowercase().contains(&q)
    }

    /// Rebuild the file line for this entry.
    ///
    /// Fields already carry their leading spaces, so the join separator is
    /// `" #"`. For an unmodified entry this reproduces the parsed line
    /// byte-for-byte.
    pub fn to_line(&self) -> String {
        format!("{}{}", self.number, self.fields.join(" #"))
    }

    /// Typed view of this entry for structured output
    pub fn record(&self) -> Record {
        Record {
            number: self
                .number
                .split('.')
                .next()
                .and_then(|d| d.parse().ok())
                .unwrap_or(0),
            name: self.name().to_string(),
            website: self.website().to_string(),
            cuisine: self.cuisine().to_string(),
            rating: self.rating(),
            cost: self.cost(),
        }
    }
}

/// Restaurant entry with trimmed fields and numeric values
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub number: u32,
    pub name: String,
    pub website: String,
    pub cuisine: String,
    pub rating: u8,
    pub cost: u8,
}

fn parse_value(field: &str) -> u8 {
    field.trim().parse().unwrap_or(0)
}
