// Rust guideline compliant 2026-02-06

//! Unit tests for error types and messages.
//!
//! These tests validate error formatting and context preservation.

use unitref_core::Error;

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = Error::Io(io_err);
    let msg = error.to_string();
    assert!(
        msg.contains("IO error"),
        "IO error should contain 'IO error' prefix"
    );
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let error = Error::Json(json_err);
    assert!(error.to_string().contains("JSON error"));
}

#[test]
fn test_invalid_config_error_formatting() {
    let error = Error::InvalidConfig("UNITREF_CASE_SENSITIVE must be true or false".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid configuration: UNITREF_CASE_SENSITIVE must be true or false"
    );
}

#[test]
fn test_no_match_error_formatting() {
    let error = Error::NoMatch("nomatch".to_string());
    assert_eq!(error.to_string(), "No matches for nomatch");
}

#[test]
fn test_ambiguous_error_lists_candidates() {
    let candidates = vec!["test/app1".to_string(), "test/app2".to_string()];
    let error = Error::Ambiguous("app".to_string(), candidates.clone());
    let msg = error.to_string();
    assert!(msg.contains("app"), "Should include the query");
    for candidate in &candidates {
        assert!(msg.contains(candidate), "Should list all candidates");
    }
    assert!(!msg.contains('\n'), "Error message should be single line");
}

#[test]
fn test_error_debug_formatting() {
    let error = Error::NoMatch("test/app9".to_string());
    let debug_msg = format!("{:?}", error);
    assert!(debug_msg.contains("NoMatch"));
    assert!(debug_msg.contains("test/app9"));
}

#[test]
fn test_catalog_parse_error_is_json_error() {
    let error = unitref_core::Catalog::parse("[\"test/app1.json\",")
        .expect_err("Truncated array should fail");
    assert!(matches!(error, Error::Json(_)));
}
