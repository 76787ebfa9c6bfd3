// Rust guideline compliant 2026-02-06

//! Configuration management for unitref.

use crate::catalog::DEFAULT_IGNORED_NAMES;
use crate::identifier::SEPARATOR;
use crate::ranker::SubsequenceRanker;
use crate::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration directory, relative to the working directory.
pub const CONFIG_DIR: &str = ".unitref";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for unitref behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Candidate list file used when none is given on the command line.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Whether fuzzy matching respects letter case.
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,

    /// Names that are never applications or environments.
    #[serde(default = "default_ignored_names")]
    pub ignored_names: Vec<String>,
}

fn default_case_sensitive() -> bool {
    true
}

fn default_ignored_names() -> Vec<String> {
    DEFAULT_IGNORED_NAMES.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            output_format: OutputFormat::default(),
            case_sensitive: default_case_sensitive(),
            ignored_names: default_ignored_names(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/config.toml`
    /// 3. Environment variables with `UNITREF_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content).map_err(|e| {
                crate::Error::InvalidConfig(format!("Invalid config file: {}", e))
            })?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `UNITREF_CATALOG` - Path to the candidate list file
    /// - `UNITREF_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `UNITREF_CASE_SENSITIVE` - Case-sensitive matching (true/false)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("UNITREF_CATALOG") {
            if !val.is_empty() {
                self.catalog = Some(PathBuf::from(val));
            }
        }

        if let Ok(val) = std::env::var("UNITREF_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::InvalidConfig(
                        "UNITREF_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("UNITREF_CASE_SENSITIVE") {
            self.case_sensitive = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "UNITREF_CASE_SENSITIVE must be true or false".to_string(),
                )
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if an ignored name is empty or contains `/`.
    fn validate(&self) -> Result<()> {
        for name in &self.ignored_names {
            if name.is_empty() {
                return Err(crate::Error::InvalidConfig(
                    "ignored_names must not contain empty names".to_string(),
                ));
            }
            if name.contains(SEPARATOR) {
                return Err(crate::Error::InvalidConfig(format!(
                    "ignored name '{}' must not contain '{}'",
                    name, SEPARATOR
                )));
            }
        }

        Ok(())
    }

    /// Ranker configured for this setup.
    pub fn ranker(&self) -> SubsequenceRanker {
        SubsequenceRanker::new().case_sensitive(self.case_sensitive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Environment variables are process-global.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("UNITREF_CATALOG");
        std::env::remove_var("UNITREF_OUTPUT_FORMAT");
        std::env::remove_var("UNITREF_CASE_SENSITIVE");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.catalog.is_none());
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.case_sensitive);
        assert_eq!(config.ignored_names, vec!["about"]);
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert!(config.case_sensitive);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
catalog = "files.json"
output_format = "json"
case_sensitive = false
ignored_names = ["about", "shared"]
"#;
        std::fs::write(temp_dir.path().join("config.toml"), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("files.json")));
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(!config.case_sensitive);
        assert_eq!(config.ignored_names, vec!["about", "shared"]);
    }

    #[test]
    fn test_config_validation_rejects_separator() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            r#"ignored_names = ["test/about"]"#,
        )
        .unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_validation_rejects_empty_name() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), r#"ignored_names = [""]"#).unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_invalid_toml() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "case_sensitive = [").unwrap();

        let err = Config::load(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_config_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "case_sensitive = true").unwrap();

        std::env::set_var("UNITREF_CATALOG", "/tmp/files.txt");
        std::env::set_var("UNITREF_OUTPUT_FORMAT", "plain");
        std::env::set_var("UNITREF_CASE_SENSITIVE", "false");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("/tmp/files.txt")));
        assert_eq!(config.output_format, OutputFormat::Plain);
        assert!(!config.case_sensitive);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_values() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("UNITREF_OUTPUT_FORMAT", "invalid");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();

        std::env::set_var("UNITREF_CASE_SENSITIVE", "maybe");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();
    }

    #[test]
    fn test_config_ranker_follows_case_setting() {
        let config = Config {
            case_sensitive: false,
            ..Config::default()
        };
        assert_eq!(config.ranker(), SubsequenceRanker::new().case_sensitive(false));
    }
}
