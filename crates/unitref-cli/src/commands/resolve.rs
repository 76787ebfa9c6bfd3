// Rust guideline compliant 2026-02-06

//! Implementation of the `uref resolve` command.

use crate::commands::join_query;
use crate::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use unitref_core::{Catalog, Ranker, Resolution, Resolver};

/// Resolves a query to exactly one application id.
///
/// # Errors
///
/// Returns an error if:
/// - The query matches no application id
/// - The query matches more than one application id
/// - The output cannot be written
pub fn execute<R: Ranker>(
    query: &str,
    application: Option<&str>,
    catalog: &Catalog,
    resolver: &Resolver<R>,
    formatter: &dyn OutputFormatter,
    out: &mut dyn Write,
) -> Result<String> {
    let search = join_query(query, application);
    let matches = resolver.find_matches(&search, &catalog.application_ids(), false);
    let id = Resolution::from_matches(matches).into_unique(&search)?;

    writeln!(
        out,
        "{}",
        formatter.format_resolution(&search, &Resolution::Unique(id.clone()))
    )?;
    Ok(id)
}
