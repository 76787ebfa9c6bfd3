// Rust guideline compliant 2026-02-06

//! Classification of resolver output.

use crate::{Error, Result};

/// Outcome of a resolution, derived from the matched identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing matched.
    NotFound,
    /// Exactly one identifier matched.
    Unique(String),
    /// Several identifiers matched; the query must be refined.
    Ambiguous(Vec<String>),
}

impl Resolution {
    /// Classifies a list of matches.
    pub fn from_matches(mut matches: Vec<String>) -> Self {
        match matches.len() {
            0 => Resolution::NotFound,
            1 => Resolution::Unique(matches.remove(0)),
            _ => Resolution::Ambiguous(matches),
        }
    }

    /// Stable lowercase name of the outcome.
    pub fn outcome(&self) -> &'static str {
        match self {
            Resolution::NotFound => "not_found",
            Resolution::Unique(_) => "unique",
            Resolution::Ambiguous(_) => "ambiguous",
        }
    }

    /// Returns true for a unique match.
    pub fn is_unique(&self) -> bool {
        matches!(self, Resolution::Unique(_))
    }

    /// The matched identifiers, in order.
    pub fn matches(&self) -> Vec<&str> {
        match self {
            Resolution::NotFound => Vec::new(),
            Resolution::Unique(id) => vec![id.as_str()],
            Resolution::Ambiguous(ids) => ids.iter().map(String::as_str).collect(),
        }
    }

    /// Demands a unique match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatch`] when nothing matched and
    /// [`Error::Ambiguous`] when several identifiers matched.
    pub fn into_unique(self, query: &str) -> Result<String> {
        match self {
            Resolution::Unique(id) => Ok(id),
            Resolution::NotFound => Err(Error::NoMatch(query.to_string())),
            Resolution::Ambiguous(ids) => Err(Error::Ambiguous(query.to_string(), ids)),
        }
    }
}

impl From<Vec<String>> for Resolution {
    fn from(matches: Vec<String>) -> Self {
        Self::from_matches(matches)
    }
}
