// Rust guideline compliant 2026-02-06

//! Implementation of the `uref apps` and `uref envs` commands.
//!
//! Without arguments these list every application or environment. With
//! arguments each name must match an application (or environment) exactly
//! and every deployment of it is shown.

use crate::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use unitref_core::{Catalog, FilterMode, Ranker, Resolver};

/// Lists applications or environments, or the deployments of the given names.
///
/// Names without an exact match are reported in the output and skipped.
///
/// # Errors
///
/// Returns an error if:
/// - The catalog holds no applications or environments
/// - The output cannot be written
pub fn execute<R: Ranker>(
    mode: FilterMode,
    names: &[String],
    catalog: &Catalog,
    resolver: &Resolver<R>,
    formatter: &dyn OutputFormatter,
    out: &mut dyn Write,
) -> Result<()> {
    let (header, available) = match mode {
        FilterMode::ByApplication => ("APPLICATIONS", catalog.applications()),
        FilterMode::ByEnvironment => ("ENVIRONMENTS", catalog.environments()),
    };

    if available.is_empty() {
        anyhow::bail!("No {}s available", mode);
    }

    if names.is_empty() {
        writeln!(out, "{}", formatter.format_names(header, &available))?;
        return Ok(());
    }

    let ids = catalog.application_ids();
    let mut selected = Vec::new();
    for name in names {
        let matches = resolver.find_exact_group_matches(mode, name, &ids);
        if matches.is_empty() {
            writeln!(
                out,
                "{}",
                formatter.format_error(&format!("No matches for {}", name))
            )?;
        }
        selected.extend(matches);
    }

    writeln!(out, "{}", formatter.format_application_ids(&selected))?;
    Ok(())
}
