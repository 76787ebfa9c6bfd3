// Rust guideline compliant 2026-02-06

//! Implementation of the `uref search` command.
//!
//! Accepts an application, an environment or a full application id and
//! prints whatever the search produced: one id, a "did you mean" list, or
//! a not-found message.

use crate::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use unitref_core::{Catalog, Ranker, Resolution, Resolver};

/// Searches application ids and prints the outcome.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn execute<R: Ranker>(
    query: &str,
    catalog: &Catalog,
    resolver: &Resolver<R>,
    formatter: &dyn OutputFormatter,
    out: &mut dyn Write,
) -> Result<Resolution> {
    let matches = resolver.search_for_applications(query, &catalog.application_ids());
    let resolution = Resolution::from_matches(matches);

    writeln!(out, "{}", formatter.format_resolution(query, &resolution))?;
    Ok(resolution)
}
