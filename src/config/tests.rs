// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use chrono::{DateTime, TimeZone, Utc};

use crate::ast::Table;

const CONFIG: &str = r#"
# Service settings
title = "Test App"

[owner]
name = "Tom Preston-Werner"
dob = 1979-05-27T07:32:00Z

[server]
host = "localhost"
port = 8080
ratio = 0.75
debug = true
shout = "TRUE"
mode = "Rounded"
big = -40000
tags = [ "auth", "logging" ]
"#;

fn config() -> TomlConfig {
    TomlConfig::from_str(CONFIG).expect("Failed to parse config")
}

#[test]
fn test_config_from_string() {
    let config = config();

    let title: String = config.get_as("title").expect("Failed to get title");
    assert_eq!(title, "Test App");

    let port: u16 = config.get_as("server.port").expect("Failed to get port");
    assert_eq!(port, 8080);

    let ratio: f64 = config.get_as("server.ratio").expect("Failed to get ratio");
    assert_eq!(ratio, 0.75);

    let port_as_float: f64 = config.get_as("server.port").expect("Failed to widen port");
    assert_eq!(port_as_float, 8080.0);

    let debug: bool = config.get_as("server.debug").expect("Failed to get debug");
    assert!(debug);

    let tags: Vec<String> = config.get_as("server.tags").expect("Failed to get tags");
    assert_eq!(tags, vec!["auth", "logging"]);

    let dob: DateTime<Utc> = config.get_as("owner.dob").expect("Failed to get dob");
    assert_eq!(dob, Utc.with_ymd_and_hms(1979, 5, 27, 7, 32, 0).unwrap());

    let server: Table = config.get_as("server").expect("Failed to get server table");
    assert_eq!(server.get("host"), Some(&Value::String("localhost".into())));
}

#[test]
fn test_get_returns_raw_value() {
    let config = config();
    assert_eq!(config.get("server.tags.1"), Ok(&Value::String("logging".into())));
    assert_eq!(config.get("server.port"), Ok(&Value::Integer(8080)));
}

#[test]
fn test_path_not_found_points_at_closest_line() {
    let config = config();
    let err = config.get("server.port.extra").unwrap_err();
    println!("{}", err);
    match err {
        TomlError::PathNotFound { path, line, hint, code } => {
            assert_eq!(path, "server.port.extra");
            assert_eq!(line, 11);
            assert!(hint.unwrap().contains("port = 8080"));
            assert_eq!(code, Some(304));
        }
        other => panic!("Expected PathNotFound, got {:?}", other),
    }
}

#[test]
fn test_path_not_found_on_empty_config() {
    let config = TomlConfig::new();
    let err = config.get("this.path.does.not.exist").unwrap_err();
    assert!(matches!(err, TomlError::PathNotFound { line: 0, .. }));
}

#[test]
fn test_type_errors_carry_path_and_line() {
    let config = config();

    let err = config.get_as::<i64>("server.host").unwrap_err();
    match err {
        TomlError::TypeError { path, hint, code, .. } => {
            assert_eq!(path, "server.host");
            assert!(hint.unwrap().contains("line 10"));
            assert_eq!(code, Some(402));
        }
        other => panic!("Expected TypeError, got {:?}", other),
    }

    let err = config.get_as::<u16>("server.big").unwrap_err();
    assert_eq!(err.code(), Some(403));

    let err = config.get_as::<bool>("server.shout").unwrap_err();
    assert_eq!(err.code(), Some(404));
}

#[test]
fn test_optional_and_default_access() {
    let config = config();

    assert_eq!(config.get_optional::<String>("server.host"), Ok(Some("localhost".to_string())));
    assert_eq!(config.get_optional::<String>("server.missing"), Ok(None));
    assert!(config.get_optional::<i64>("server.host").is_err());

    assert_eq!(config.get_or("server.timeout", 30i64), 30);
    assert_eq!(config.get_or("server.port", 1i64), 8080);
}

#[test]
fn test_keys_and_has() {
    let config = config();

    assert_eq!(config.get_keys("").unwrap(), vec!["title", "owner", "server"]);
    assert_eq!(config.get_keys("owner").unwrap(), vec!["name", "dob"]);
    assert_eq!(config.get_keys("server.port").unwrap_err().code(), Some(306));

    assert!(config.has("server.tags.0"));
    assert!(!config.has("server.tags.2"));
    assert!(!config.has("server.nonexistent"));
}

#[test]
fn test_string_enum_validation() {
    let config = config();

    let mode = config.get_string_enum("server.mode", &["plain", "rounded", "thick"]);
    assert_eq!(mode, Ok("Rounded".to_string()));

    let invalid = config.get_string_enum("server.mode", &["good", "better"]);
    assert!(matches!(invalid, Err(TomlError::ValidationError { code: Some(451), .. })));
}

#[test]
fn test_get_validated() {
    let config = config();

    let port: Result<i64, _> = config.get_validated("server.port", |p| (1..=65535).contains(p), "1-65535");
    assert_eq!(port, Ok(8080));

    let ratio: Result<f64, _> = config.get_validated("server.ratio", |r| *r > 1.0, "greater than 1.0");
    assert!(matches!(ratio, Err(TomlError::ValidationError { code: Some(450), .. })));
}

#[test]
fn test_reparse_replaces_document() {
    let mut config = config();
    let doc = config.parse("fresh = 1\n").expect("Failed to reparse");
    assert_eq!(doc.get("fresh"), Ok(&Value::Integer(1)));
    assert!(!config.has("title"));
    assert_eq!(config.raw_content(), "fresh = 1\n");
}

#[test]
fn test_failed_parse_keeps_previous_document() {
    let mut config = config();
    let err = config.parse("ports = [ 1, 2\n").unwrap_err();
    assert!(matches!(err, TomlError::UnterminatedArray { line: 1, .. }));
    assert!(config.has("server.port"));
}
