// Rust guideline compliant 2026-02-06

//! Fuzzy ranking of candidates against a query.
//!
//! A candidate matches when the query's characters appear in it in order.
//! Matching candidates are scored by edit distance to the query, where 0
//! means the two are identical, and returned best first.

use std::borrow::Cow;

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// A ranked candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The candidate string as it was given to the ranker.
    pub target: String,
    /// Edit distance to the query; 0 is a perfect match.
    pub distance: usize,
}

impl Match {
    /// Returns true for a perfect match.
    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }
}

/// Scores and orders candidates against a query.
///
/// Implementations must exclude candidates that do not match at all and
/// return the rest sorted by ascending distance with a deterministic order
/// among ties.
pub trait Ranker {
    /// Ranks `candidates` against `query`, best first.
    fn rank(&self, query: &str, candidates: &[&str]) -> Vec<Match>;
}

impl<R: Ranker + ?Sized> Ranker for &R {
    fn rank(&self, query: &str, candidates: &[&str]) -> Vec<Match> {
        (**self).rank(query, candidates)
    }
}

impl<R: Ranker + ?Sized> Ranker for Box<R> {
    fn rank(&self, query: &str, candidates: &[&str]) -> Vec<Match> {
        (**self).rank(query, candidates)
    }
}

/// Default ranker: subsequence filter plus Levenshtein distance.
///
/// Ties keep the candidates' input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsequenceRanker {
    case_sensitive: bool,
}

impl Default for SubsequenceRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl SubsequenceRanker {
    /// Creates a case-sensitive ranker.
    pub fn new() -> Self {
        Self {
            case_sensitive: true,
        }
    }

    /// Sets whether matching and distance respect letter case.
    #[must_use]
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Case-insensitive mode lowercases both sides once, so the subsequence
    /// test and the distance see the same text.
    fn fold<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(text.to_lowercase())
        }
    }
}

impl Ranker for SubsequenceRanker {
    fn rank(&self, query: &str, candidates: &[&str]) -> Vec<Match> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let folded_query = self.fold(query);
        let atom = Atom::new(
            &folded_query,
            CaseMatching::Respect,
            Normalization::Never,
            AtomKind::Fuzzy,
            false,
        );
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();

        let mut matches: Vec<Match> = candidates
            .iter()
            .filter_map(|candidate| {
                let folded = self.fold(candidate);
                let hit = folded_query.is_empty()
                    || atom
                        .score(Utf32Str::new(&folded, &mut buf), &mut matcher)
                        .is_some();
                hit.then(|| Match {
                    target: (*candidate).to_string(),
                    distance: strsim::levenshtein(&folded_query, &folded),
                })
            })
            .collect();

        // Stable: equal distances stay in input order.
        matches.sort_by_key(|m| m.distance);
        matches
    }
}
