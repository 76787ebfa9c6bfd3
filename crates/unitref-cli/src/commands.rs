// Rust guideline compliant 2026-02-06

//! Command implementations for the unitref CLI.

pub mod all;
pub mod file;
pub mod group;
pub mod resolve;
pub mod search;

/// Joins a query and an optional application into one search string.
///
/// `uref resolve test app1` searches for `test/app1`.
pub fn join_query(query: &str, application: Option<&str>) -> String {
    match application {
        Some(application) => format!("{}/{}", query, application),
        None => query.to_string(),
    }
}
