//! Tests for command-line parsing.

use clap::Parser;
use schema_gap::config::{CompetitorSource, Opt};
use schema_gap::{Config, LogFormat, LogLevel};
use std::path::PathBuf;

#[test]
fn test_minimal_invocation() {
    let opt = Opt::try_parse_from([
        "schema_gap",
        "--reference",
        "mine.html",
        "--competitor",
        "theirs.html",
    ])
    .expect("should parse");
    let config = Config::from(opt);

    assert_eq!(config.reference, PathBuf::from("mine.html"));
    assert_eq!(
        config.competitors,
        vec![CompetitorSource {
            label: None,
            path: PathBuf::from("theirs.html"),
        }]
    );
    assert!(config.output.is_none());
    assert!(matches!(config.log_level, LogLevel::Info));
    assert!(matches!(config.log_format, LogFormat::Plain));
    assert!(!config.print_inventory);
}

#[test]
fn test_labelled_competitors_keep_order() {
    let opt = Opt::try_parse_from([
        "schema_gap",
        "--reference",
        "mine.html",
        "--competitor",
        "Acme=acme.html",
        "--competitor",
        "other.html",
        "--competitor",
        "Beta Corp=beta.html",
        "--output",
        "gaps.csv",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--print-inventory",
    ])
    .expect("should parse");
    let config = Config::from(opt);

    let labels: Vec<Option<&str>> = config
        .competitors
        .iter()
        .map(|c| c.label.as_deref())
        .collect();
    assert_eq!(labels, vec![Some("Acme"), None, Some("Beta Corp")]);
    assert_eq!(config.output, Some(PathBuf::from("gaps.csv")));
    assert!(matches!(config.log_level, LogLevel::Debug));
    assert!(matches!(config.log_format, LogFormat::Json));
    assert!(config.print_inventory);
}

#[test]
fn test_competitor_is_required() {
    let result = Opt::try_parse_from(["schema_gap", "--reference", "mine.html"]);
    assert!(result.is_err());
}

#[test]
fn test_label_without_path_is_rejected() {
    let result = Opt::try_parse_from([
        "schema_gap",
        "--reference",
        "mine.html",
        "--competitor",
        "Acme=",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let result = Opt::try_parse_from([
        "schema_gap",
        "--reference",
        "mine.html",
        "--competitor",
        "a.html",
        "--log-level",
        "loud",
    ]);
    assert!(result.is_err());
}
