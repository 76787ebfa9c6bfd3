// Rust guideline compliant 2026-02-06

//! Output formatting module for the unitref CLI.
//!
//! This module renders name listings, application id tables and
//! resolution outcomes in various output formats (JSON, table, plain text).

use crate::terminal::paint;
use serde::Serialize;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};
use termcolor::Color;
use unitref_core::{FilterMode, GroupIndex, OutputFormat, Resolution};

/// Output formatter trait.
///
/// Defines the interface for formatting resolver data in different output formats.
pub trait OutputFormatter {
    /// Formats a single-column listing under `header`.
    fn format_names(&self, header: &str, names: &[String]) -> String;

    /// Formats `environment/application` identifiers.
    fn format_application_ids(&self, ids: &[String]) -> String;

    /// Formats the outcome of resolving `query`.
    fn format_resolution(&self, query: &str, resolution: &Resolution) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

#[derive(Serialize)]
struct ResolutionReport<'a> {
    query: &'a str,
    outcome: &'a str,
    matches: Vec<&'a str>,
}

/// Groups identifiers into `(environment, applications)` rows.
fn environment_rows(ids: &[String]) -> Vec<(String, Vec<String>)> {
    let groups = GroupIndex::build(FilterMode::ByEnvironment, ids);
    groups
        .keys()
        .into_iter()
        .map(|environment| {
            let applications: Vec<String> = groups
                .values(environment)
                .map(|values| values.iter().cloned().collect())
                .unwrap_or_default();
            (environment.to_string(), applications)
        })
        .collect()
}

/// JSON output formatter.
///
/// Formats results as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_names(&self, header: &str, names: &[String]) -> String {
        let mut output = serde_json::Map::new();
        output.insert(header.to_lowercase(), json!(names));
        output.insert("total".to_string(), json!(names.len()));
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize names" }).to_string())
    }

    fn format_application_ids(&self, ids: &[String]) -> String {
        let output = json!({
            "application_ids": ids,
            "total": ids.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize application ids" }).to_string())
    }

    fn format_resolution(&self, query: &str, resolution: &Resolution) -> String {
        let report = ResolutionReport {
            query,
            outcome: resolution.outcome(),
            matches: resolution.matches(),
        };
        serde_json::to_string_pretty(&report)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize resolution" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats results as human-readable tables with colors and alignment.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn highlight(&self, text: &str, color: Color) -> String {
        if self.use_color {
            paint(text, color, true)
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_names(&self, header: &str, names: &[String]) -> String {
        if names.is_empty() {
            return format!("No {} found.", header.to_lowercase());
        }

        let mut builder = Builder::default();
        builder.push_record(vec![header]);
        for name in names {
            builder.push_record(vec![name.as_str()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_application_ids(&self, ids: &[String]) -> String {
        if ids.is_empty() {
            return "No application ids found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ENVIRONMENT", "APPLICATIONS"]);
        for (environment, applications) in environment_rows(ids) {
            builder.push_record(vec![environment, applications.join(", ")]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_resolution(&self, query: &str, resolution: &Resolution) -> String {
        match resolution {
            Resolution::Unique(id) => self.highlight(id, Color::Green),
            Resolution::NotFound => self.format_error(&format!("No matches for {}", query)),
            Resolution::Ambiguous(ids) => {
                let mut output = format!(
                    "{} matched {} candidates. Did you mean one of:\n",
                    query,
                    ids.len()
                );
                for id in ids {
                    output.push_str(&format!("  {}\n", self.highlight(id, Color::Yellow)));
                }
                output
            }
        }
    }

    fn format_error(&self, error: &str) -> String {
        format!("{}{}", self.highlight("Error: ", Color::Red), error)
    }
}

/// Plain text output formatter.
///
/// Formats results as simple plain text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_names(&self, _header: &str, names: &[String]) -> String {
        names.join("\n")
    }

    fn format_application_ids(&self, ids: &[String]) -> String {
        ids.join("\n")
    }

    fn format_resolution(&self, query: &str, resolution: &Resolution) -> String {
        match resolution {
            Resolution::NotFound => format!("No matches for {}", query),
            _ => resolution.matches().join("\n"),
        }
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
