// Rust guideline compliant 2026-02-06

//! Candidate list loading for the unitref CLI.
//!
//! The candidate list is read from the `--catalog` path, the configured
//! catalog, or `<config dir>/catalog.json`, in that order. `-` reads stdin.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use unitref_core::{Catalog, Config};

/// Catalog argument that selects standard input.
pub const STDIN_MARKER: &str = "-";

/// Default catalog file name inside the config directory.
pub const DEFAULT_CATALOG_FILE: &str = "catalog.json";

/// Picks the candidate list path.
///
/// Relative configured paths are taken relative to `config_dir`.
pub fn catalog_path(flag: Option<&str>, config: &Config, config_dir: &Path) -> PathBuf {
    if let Some(path) = flag {
        return PathBuf::from(path);
    }

    match &config.catalog {
        Some(path) => config_dir.join(path),
        None => config_dir.join(DEFAULT_CATALOG_FILE),
    }
}

/// Loads the candidate list and applies the configured ignored names.
///
/// # Errors
///
/// Returns an error if:
/// - The catalog file does not exist or cannot be read
/// - The catalog content is a malformed JSON array
pub fn load_catalog(flag: Option<&str>, config: &Config, config_dir: &Path) -> Result<Catalog> {
    let path = catalog_path(flag, config, config_dir);

    let text = if path.as_os_str() == STDIN_MARKER {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read candidate list from stdin")?;
        text
    } else {
        if !path.exists() {
            anyhow::bail!(
                "No candidate list at {}. Pass --catalog or set 'catalog' in config.toml.",
                path.display()
            );
        }
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read candidate list {}", path.display()))?
    };

    let catalog = Catalog::parse(&text)?.with_ignored(config.ignored_names.clone());
    log::debug!("Loaded {} candidates from {}", catalog.len(), path.display());
    Ok(catalog)
}
