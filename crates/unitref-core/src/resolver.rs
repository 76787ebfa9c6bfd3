// Rust guideline compliant 2026-02-06

//! Resolution of user-typed queries into configuration unit identifiers.
//!
//! Every operation returns an ordered list of identifiers:
//! - empty: nothing matched
//! - one element: the query resolved unambiguously
//! - several elements: the query is ambiguous and must be refined
//!
//! Nothing is cached between calls; indexes are rebuilt from the given
//! candidate list each time.

use crate::group::{FilterMode, GroupIndex};
use crate::identifier::{strip_extension, IdentifierIndex, SEPARATOR};
use crate::ranker::{Ranker, SubsequenceRanker};

/// Resolves queries against candidate identifiers using a pluggable ranker.
#[derive(Debug, Clone, Default)]
pub struct Resolver<R = SubsequenceRanker> {
    ranker: R,
}

impl Resolver {
    /// Creates a resolver with the default case-sensitive ranker.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Ranker> Resolver<R> {
    /// Creates a resolver around a custom ranker.
    pub fn with_ranker(ranker: R) -> Self {
        Self { ranker }
    }

    /// The ranker in use.
    pub fn ranker(&self) -> &R {
        &self.ranker
    }

    /// Fuzzy-matches `query` against the extension-stripped identifiers.
    ///
    /// A perfect match, or a single surviving candidate, resolves to exactly
    /// that candidate. Otherwise every ranked candidate is returned, best
    /// first. With `with_suffix` each result is restored to the original
    /// name including its extension.
    ///
    /// # Arguments
    ///
    /// * `query` - Full or partial identifier; its extension is ignored
    /// * `identifiers` - Candidate names, extensions allowed
    /// * `with_suffix` - Restore the original extension on each result
    ///
    /// # Returns
    ///
    /// Empty when nothing matches, one element when resolved, otherwise
    /// every ranked candidate best first.
    pub fn find_matches<S: AsRef<str>>(
        &self,
        query: &str,
        identifiers: &[S],
        with_suffix: bool,
    ) -> Vec<String> {
        let query = strip_extension(query);
        let index = IdentifierIndex::new(identifiers);
        let candidates = index.without_extension();
        let matches = self.ranker.rank(query, &candidates);

        let restore = |target: &str| -> String {
            if with_suffix {
                index.find(target).unwrap_or(target).to_string()
            } else {
                target.to_string()
            }
        };

        let Some(best) = matches.first() else {
            log::debug!("No candidates match {}", query);
            return Vec::new();
        };

        if best.is_exact() || matches.len() == 1 {
            log::debug!(
                "Resolved {} to {} (distance {})",
                query,
                best.target,
                best.distance
            );
            return vec![restore(&best.target)];
        }

        log::debug!("{} is ambiguous: {} candidates", query, matches.len());
        matches.iter().map(|m| restore(&m.target)).collect()
    }

    /// Finds every identifier whose grouping key equals `query` exactly.
    ///
    /// Near misses are never returned: if the best ranked key is not a
    /// perfect match the result is empty. Identifiers without exactly two
    /// segments never take part.
    ///
    /// # Arguments
    ///
    /// * `mode` - Group by application or by environment
    /// * `query` - Application or environment name
    /// * `identifiers` - Candidate names, extensions allowed
    ///
    /// # Returns
    ///
    /// Sorted `environment/application` ids of the matched group, or an
    /// empty list.
    pub fn find_exact_group_matches<S: AsRef<str>>(
        &self,
        mode: FilterMode,
        query: &str,
        identifiers: &[S],
    ) -> Vec<String> {
        let query = strip_extension(query);
        let groups = GroupIndex::build(mode, identifiers);
        let keys = groups.keys();
        let matches = self.ranker.rank(query, &keys);

        match matches.first() {
            Some(best) if best.is_exact() => {
                let found = groups.identifiers_for(&best.target);
                log::debug!(
                    "{} matched {} {} with {} identifiers",
                    query,
                    mode,
                    best.target,
                    found.len()
                );
                found
            }
            _ => {
                log::debug!("No exact {} match for {}", mode, query);
                Vec::new()
            }
        }
    }

    /// Resolves a query that may be an application, an environment or a
    /// full identifier.
    ///
    /// A bare name is tried as an application first, then as an
    /// environment. Anything else, or a bare name with no exact group,
    /// falls back to [`Resolver::find_matches`] without extensions.
    ///
    /// # Arguments
    ///
    /// * `query` - Application, environment or full identifier
    /// * `identifiers` - Candidate names, extensions allowed
    ///
    /// # Returns
    ///
    /// Extension-free identifiers; see [`Resolver::find_matches`] for how
    /// the length is read.
    pub fn search_for_applications<S: AsRef<str>>(
        &self,
        query: &str,
        identifiers: &[S],
    ) -> Vec<String> {
        if !query.contains(SEPARATOR) {
            for mode in [FilterMode::ByApplication, FilterMode::ByEnvironment] {
                let found = self.find_exact_group_matches(mode, query, identifiers);
                if !found.is_empty() {
                    return found;
                }
            }
        }

        self.find_matches(query, identifiers, false)
    }

    /// Resolves a query to full file names, extensions included.
    pub fn search_for_file<S: AsRef<str>>(&self, query: &str, identifiers: &[S]) -> Vec<String> {
        self.find_matches(query, identifiers, true)
    }
}

/// [`Resolver::find_matches`] with the default ranker.
pub fn find_matches<S: AsRef<str>>(query: &str, identifiers: &[S], with_suffix: bool) -> Vec<String> {
    Resolver::new().find_matches(query, identifiers, with_suffix)
}

/// [`Resolver::find_exact_group_matches`] with the default ranker.
pub fn find_exact_group_matches<S: AsRef<str>>(
    mode: FilterMode,
    query: &str,
    identifiers: &[S],
) -> Vec<String> {
    Resolver::new().find_exact_group_matches(mode, query, identifiers)
}

/// [`Resolver::search_for_applications`] with the default ranker.
pub fn search_for_applications<S: AsRef<str>>(query: &str, identifiers: &[S]) -> Vec<String> {
    Resolver::new().search_for_applications(query, identifiers)
}

/// [`Resolver::search_for_file`] with the default ranker.
pub fn search_for_file<S: AsRef<str>>(query: &str, identifiers: &[S]) -> Vec<String> {
    Resolver::new().search_for_file(query, identifiers)
}
