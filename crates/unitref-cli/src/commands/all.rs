// Rust guideline compliant 2026-02-06

//! Implementation of the `uref all` command.

use crate::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use unitref_core::Catalog;

/// Prints every application id in the catalog.
///
/// Grouped by environment by default, or as a flat sorted list.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn execute(
    catalog: &Catalog,
    as_list: bool,
    formatter: &dyn OutputFormatter,
    out: &mut dyn Write,
) -> Result<()> {
    let mut ids = catalog.application_ids();

    let output = if as_list {
        ids.sort();
        formatter.format_names("APPLICATIONID", &ids)
    } else {
        formatter.format_application_ids(&ids)
    };
    writeln!(out, "{}", output)?;

    Ok(())
}
