// Rust guideline compliant 2026-02-06

//! Unitref CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod output;
pub mod source;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter};
pub use source::load_catalog;
pub use terminal::should_use_color;
