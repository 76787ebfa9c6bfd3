// Rust guideline compliant 2026-02-06

//! Unitref Core Library
//!
//! This crate resolves short, possibly ambiguous user input into
//! `environment/application[.extension]` identifiers:
//! - Identifier index (extension stripping, reverse lookup)
//! - Fuzzy ranking behind the pluggable [`Ranker`] trait
//! - Exact grouping by application or environment
//! - The resolver and its application search fallback chain
//! - Candidate catalog, configuration and error types

pub mod catalog;
pub mod config;
pub mod error;
pub mod group;
pub mod identifier;
pub mod ranker;
pub mod resolution;
pub mod resolver;

pub use catalog::Catalog;
pub use config::{Config, OutputFormat, CONFIG_DIR};
pub use error::{Error, Result};
pub use group::{FilterMode, GroupIndex};
pub use identifier::{strip_extension, IdentifierIndex};
pub use ranker::{Match, Ranker, SubsequenceRanker};
pub use resolution::Resolution;
pub use resolver::{
    find_exact_group_matches, find_matches, search_for_applications, search_for_file, Resolver,
};
