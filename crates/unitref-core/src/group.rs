// Rust guideline compliant 2026-02-06

//! Grouping of two-segment identifiers by environment or application.

use crate::identifier::{split_segments, strip_extension};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Selects which identifier segment is the grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    /// Key is the application (second segment), value the environment.
    ByApplication,
    /// Key is the environment (first segment), value the application.
    ByEnvironment,
}

impl FilterMode {
    /// Orders an `(environment, application)` pair as `(key, value)`.
    pub fn key_value<'a>(self, environment: &'a str, application: &'a str) -> (&'a str, &'a str) {
        match self {
            FilterMode::ByApplication => (application, environment),
            FilterMode::ByEnvironment => (environment, application),
        }
    }

    /// Recombines a key and one of its values into an identifier.
    pub fn join(self, key: &str, value: &str) -> String {
        match self {
            FilterMode::ByApplication => format!("{}/{}", value, key),
            FilterMode::ByEnvironment => format!("{}/{}", key, value),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::ByApplication => write!(f, "application"),
            FilterMode::ByEnvironment => write!(f, "environment"),
        }
    }
}

/// Mapping from grouping key to the distinct values seen with it.
///
/// Keys and values iterate in lexicographic order.
#[derive(Debug, Clone)]
pub struct GroupIndex {
    mode: FilterMode,
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl GroupIndex {
    /// Groups identifiers by the key `mode` selects.
    ///
    /// Extensions are stripped first. Identifiers that do not split into
    /// exactly two segments are skipped.
    ///
    /// # Arguments
    ///
    /// * `mode` - Which segment becomes the key
    /// * `identifiers` - Raw names, extensions allowed
    ///
    /// # Returns
    ///
    /// Keys in lexicographic order, each with its sorted set of values.
    pub fn build<S: AsRef<str>>(mode: FilterMode, identifiers: &[S]) -> Self {
        let mut groups: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for identifier in identifiers {
            let name = strip_extension(identifier.as_ref());
            let Some((environment, application)) = split_segments(name) else {
                log::trace!("Skipping {} while grouping: not a two-segment identifier", name);
                continue;
            };

            let (key, value) = mode.key_value(environment, application);
            groups
                .entry(key.to_string())
                .or_default()
                .insert(value.to_string());
        }

        Self { mode, groups }
    }

    /// The mode this index was built with.
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Distinct keys in lexicographic order.
    pub fn keys(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    /// Values recorded for `key`, if any.
    pub fn values(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(key)
    }

    /// Identifiers for every value of `key`, sorted.
    pub fn identifiers_for(&self, key: &str) -> Vec<String> {
        let mut identifiers: Vec<String> = self
            .values(key)
            .into_iter()
            .flatten()
            .map(|value| self.mode.join(key, value))
            .collect();
        identifiers.sort();
        identifiers
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no identifier could be grouped.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
