//! Tavola Core - Shared functionality for the tavola restaurant list tools
//!
//! The list lives in a flat text file: one header line, then one numbered
//! entry per line with five `" # "`-separated fields
//! (name, website, cuisine, rating, cost).

pub mod entry;
pub mod prompt;
pub mod store;

pub use entry::{Entry, Record};
pub use store::DEFAULT_FILE;
