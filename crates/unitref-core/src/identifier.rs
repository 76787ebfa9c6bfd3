// Rust guideline compliant 2026-02-06

//! Identifier helpers and the extension-stripping index.
//!
//! Identifiers have the form `environment/application[.extension]`. The
//! index keeps the caller's order and maps every stripped name back to the
//! original entry it came from.

use std::collections::HashMap;

/// Segment separator inside an identifier.
pub const SEPARATOR: char = '/';

/// Removes the final `.`-delimited suffix of the last path segment.
///
/// Dots inside earlier segments are never treated as an extension.
///
/// # Examples
///
/// ```
/// use unitref_core::identifier::strip_extension;
///
/// assert_eq!(strip_extension("test/app1.json"), "test/app1");
/// assert_eq!(strip_extension("a.b.json"), "a.b");
/// assert_eq!(strip_extension("v1.2/app"), "v1.2/app");
/// ```
pub fn strip_extension(name: &str) -> &str {
    let segment_start = name.rfind(SEPARATOR).map_or(0, |idx| idx + 1);
    match name[segment_start..].rfind('.') {
        Some(dot) => &name[..segment_start + dot],
        None => name,
    }
}

/// Splits an identifier into its two segments.
///
/// Returns `None` unless the name splits into exactly two parts on `/`.
/// Empty segments are kept, as in `"/app"`.
pub fn split_segments(name: &str) -> Option<(&str, &str)> {
    let mut parts = name.split(SEPARATOR);
    let first = parts.next()?;
    let second = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second))
}

/// Ordered view over raw identifiers with a reverse lookup from stripped names.
#[derive(Debug, Clone, Default)]
pub struct IdentifierIndex {
    originals: Vec<String>,
    stripped: Vec<String>,
    lookup: HashMap<String, usize>,
}

impl IdentifierIndex {
    /// Builds the index, preserving input order.
    ///
    /// When two entries strip to the same name the first one wins the
    /// reverse lookup.
    ///
    /// # Arguments
    ///
    /// * `identifiers` - Raw names, extensions included
    ///
    /// # Returns
    ///
    /// An index holding every entry, including malformed ones.
    pub fn new<S: AsRef<str>>(identifiers: &[S]) -> Self {
        let mut index = Self {
            originals: Vec::with_capacity(identifiers.len()),
            stripped: Vec::with_capacity(identifiers.len()),
            lookup: HashMap::with_capacity(identifiers.len()),
        };

        for (position, identifier) in identifiers.iter().enumerate() {
            let original = identifier.as_ref();
            let stripped = strip_extension(original);
            index.lookup.entry(stripped.to_string()).or_insert(position);
            index.originals.push(original.to_string());
            index.stripped.push(stripped.to_string());
        }

        index
    }

    /// Extension-stripped names in input order.
    pub fn without_extension(&self) -> Vec<&str> {
        self.stripped.iter().map(String::as_str).collect()
    }

    /// Finds the original entry for a stripped name.
    ///
    /// # Arguments
    ///
    /// * `stripped` - A name as returned by [`IdentifierIndex::without_extension`]
    ///
    /// # Returns
    ///
    /// The first original entry that strips to `stripped`, or `None`.
    pub fn find(&self, stripped: &str) -> Option<&str> {
        self.lookup
            .get(stripped)
            .map(|&position| self.originals[position].as_str())
    }

    /// Number of indexed identifiers.
    pub fn len(&self) -> usize {
        self.originals.len()
    }

    /// Returns true if the index holds no identifiers.
    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }
}
