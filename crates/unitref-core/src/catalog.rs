// Rust guideline compliant 2026-02-06

//! The candidate list: every configuration file name known to the caller.
//!
//! File names take two shapes: `application.json` for an application's
//! shared defaults and `environment/application.json` for one deployment.
//! Ignored names (by default `about`) hold shared metadata and are never
//! treated as an application or an environment.

use crate::identifier::{split_segments, strip_extension, IdentifierIndex};
use crate::Result;
use std::collections::BTreeSet;

/// Default names that are never applications or environments.
pub const DEFAULT_IGNORED_NAMES: &[&str] = &["about"];

/// Ordered list of candidate file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<String>,
    ignored: Vec<String>,
}

impl Catalog {
    /// Creates a catalog ignoring the default names.
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            ignored: DEFAULT_IGNORED_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replaces the ignored names.
    #[must_use]
    pub fn with_ignored(mut self, ignored: Vec<String>) -> Self {
        self.ignored = ignored;
        self
    }

    /// Parses a candidate list.
    ///
    /// Accepts a JSON array of strings, or one name per line where blank
    /// lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the text looks like a JSON array but is not a
    /// valid array of strings.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim_start();
        if trimmed.starts_with('[') {
            let names: Vec<String> = serde_json::from_str(trimmed)?;
            return Ok(Self::new(names));
        }

        let names = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Ok(Self::new(names))
    }

    /// File names in their original order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// File names without extensions, in original order.
    pub fn without_extension(&self) -> Vec<String> {
        IdentifierIndex::new(&self.names)
            .without_extension()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Two-segment names without extensions, excluding ignored names.
    pub fn application_ids(&self) -> Vec<String> {
        self.names
            .iter()
            .map(|name| strip_extension(name))
            .filter(|name| {
                split_segments(name).is_some_and(|(environment, application)| {
                    !self.is_ignored(environment) && !self.is_ignored(application)
                })
            })
            .map(str::to_string)
            .collect()
    }

    /// Distinct applications across all application ids, sorted.
    pub fn applications(&self) -> Vec<String> {
        self.distinct_segments(|_, application| application)
    }

    /// Distinct environments across all application ids, sorted.
    pub fn environments(&self) -> Vec<String> {
        self.distinct_segments(|environment, _| environment)
    }

    /// Number of file names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the catalog holds no file names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn is_ignored(&self, segment: &str) -> bool {
        self.ignored.iter().any(|ignored| ignored == segment)
    }

    fn distinct_segments<F>(&self, pick: F) -> Vec<String>
    where
        F: for<'a> Fn(&'a str, &'a str) -> &'a str,
    {
        let ids = self.application_ids();
        let unique: BTreeSet<&str> = ids
            .iter()
            .filter_map(|id| split_segments(id))
            .map(|(environment, application)| pick(environment, application))
            .collect();
        unique.into_iter().map(str::to_string).collect()
    }
}
