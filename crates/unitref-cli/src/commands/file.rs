// Rust guideline compliant 2026-02-06

//! Implementation of the `uref file` command.

use crate::commands::join_query;
use crate::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use unitref_core::{Catalog, Ranker, Resolution, Resolver};

/// Lists all file names, or resolves one file name including its extension.
///
/// # Arguments
///
/// * `query` - Optional file query (full or partial)
/// * `application` - Optional application appended as `query/application`
///
/// # Errors
///
/// Returns an error if:
/// - The query matches no file
/// - The query matches more than one file
/// - The output cannot be written
pub fn execute<R: Ranker>(
    query: Option<&str>,
    application: Option<&str>,
    catalog: &Catalog,
    resolver: &Resolver<R>,
    formatter: &dyn OutputFormatter,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(query) = query else {
        let mut names = catalog.names().to_vec();
        names.sort();
        writeln!(out, "{}", formatter.format_names("FILES", &names))?;
        return Ok(());
    };

    let search = join_query(query, application);
    let matches = resolver.search_for_file(&search, catalog.names());
    let file = Resolution::from_matches(matches).into_unique(&search)?;

    writeln!(
        out,
        "{}",
        formatter.format_resolution(&search, &Resolution::Unique(file))
    )?;
    Ok(())
}
