use std::fs;

use clap::Parser;
use pagegen::builder::factory::{Flavour, Strategy};
use pagegen::cli::config::{
    AppConfig, Cli, Commands, DEFAULT_PREFIX, build_generation_config, load_config,
};
use pagegen::error::GenError;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_generate_minimal() {
    let cli = Cli::parse_from(["pagegen", "generate"]);
    match cli.command {
        Commands::Generate {
            templates,
            out,
            flavour,
            strategy,
            prefix,
            packages,
        } => {
            assert!(templates.is_none());
            assert!(out.is_none());
            assert!(flavour.is_none());
            assert!(strategy.is_none());
            assert!(prefix.is_none());
            assert!(packages.is_none());
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn cli_parse_generate_all_args() {
    let cli = Cli::parse_from([
        "pagegen",
        "generate",
        "--templates",
        "page-specs",
        "-o",
        "src/generated",
        "--flavour",
        "selenium",
        "--strategy",
        "page-factory",
        "--prefix",
        "PAGE_",
        "--packages",
        "com.example.pages",
    ]);
    match cli.command {
        Commands::Generate {
            templates,
            out,
            flavour,
            strategy,
            prefix,
            packages,
        } => {
            assert_eq!(templates.as_deref(), Some("page-specs"));
            assert_eq!(out.as_deref(), Some("src/generated"));
            assert_eq!(flavour.as_deref(), Some("selenium"));
            assert_eq!(strategy.as_deref(), Some("page-factory"));
            assert_eq!(prefix.as_deref(), Some("PAGE_"));
            assert_eq!(packages.as_deref(), Some("com.example.pages"));
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn cli_parse_check() {
    let cli = Cli::parse_from(["pagegen", "check", "--templates", "page-specs"]);
    match cli.command {
        Commands::Check { templates, prefix } => {
            assert_eq!(templates.as_deref(), Some("page-specs"));
            assert!(prefix.is_none());
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_parse_global_verbose() {
    let cli = Cli::parse_from(["pagegen", "-v", "generate"]);
    assert_eq!(cli.verbose, 1);

    let cli2 = Cli::parse_from(["pagegen", "-vv", "check"]);
    assert_eq!(cli2.verbose, 2);
}

#[test]
fn cli_parse_global_config_path() {
    let cli = Cli::parse_from(["pagegen", "--config", "custom.yaml", "generate"]);
    assert_eq!(cli.config.as_deref(), Some("custom.yaml"));
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn config_default_values() {
    let config = AppConfig::default();
    assert_eq!(config.generate.templates, "templates");
    assert_eq!(config.generate.out, "generated");
    assert_eq!(config.generate.flavour, "selenium");
    assert_eq!(config.generate.strategy, "page-factory");
    assert_eq!(config.generate.prefix, DEFAULT_PREFIX);
    assert_eq!(config.generate.packages, "");
}

#[test]
fn config_partial_yaml_fills_defaults() {
    let yaml = r#"
generate:
  templates: "page-specs"
  packages: "com.example"
"#;
    let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.generate.templates, "page-specs");
    assert_eq!(config.generate.packages, "com.example");
    // Untouched fields get defaults
    assert_eq!(config.generate.out, "generated");
    assert_eq!(config.generate.flavour, "selenium");
    assert_eq!(config.generate.prefix, "POGE_");
}

#[test]
fn config_load_explicit_file() {
    let dir = std::env::temp_dir().join("pagegen_cli_config_explicit");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("pagegen.yaml");
    fs::write(&path, "generate:\n  prefix: \"PAGE_\"\n").unwrap();

    let config = load_config(path.to_str()).expect("load explicit config");
    assert_eq!(config.generate.prefix, "PAGE_");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn config_load_explicit_missing_file_is_an_error() {
    let err = load_config(Some("nonexistent_pagegen_config.yaml")).unwrap_err();
    assert!(matches!(err, GenError::Configuration(_)), "got {:?}", err);
}

#[test]
fn config_load_malformed_file_is_an_error() {
    let dir = std::env::temp_dir().join("pagegen_cli_config_malformed");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("pagegen.yaml");
    fs::write(&path, "generate: [not, a, mapping]").unwrap();

    let err = load_config(path.to_str()).unwrap_err();
    assert!(matches!(err, GenError::Configuration(_)), "got {:?}", err);

    fs::remove_dir_all(&dir).ok();
}

/// Default config resolution scans the working directory, so this test
/// drives all three cases (none, one, ambiguous) from a scratch cwd.
#[test]
fn config_resolution_in_working_directory() {
    let dir = std::env::temp_dir().join("pagegen_cli_config_cwd");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(&dir).unwrap();

    // No config file: defaults
    let config = load_config(None).expect("defaults without a config file");
    assert_eq!(config.generate.prefix, DEFAULT_PREFIX);

    // One config file: loaded
    fs::write(dir.join("pagegen.yaml"), "generate:\n  prefix: \"ONE_\"\n").unwrap();
    let config = load_config(None).expect("single config file");
    assert_eq!(config.generate.prefix, "ONE_");

    // Two config files: ambiguous, fatal before any discovery
    fs::write(dir.join("pagegen.yml"), "generate:\n  prefix: \"TWO_\"\n").unwrap();
    let err = load_config(None).unwrap_err();
    match &err {
        GenError::Configuration(msg) => {
            assert!(msg.contains("more than one"), "message was: {}", msg);
        }
        other => panic!("Expected Configuration error, got {:?}", other),
    }

    std::env::set_current_dir(original).unwrap();
    fs::remove_dir_all(&dir).ok();
}

// ============================================================================
// GenerationConfig Tests
// ============================================================================

#[test]
fn build_generation_config_resolves_tokens() {
    let config = build_generation_config("selenium", "page-factory", "POGE_", "com.example")
        .expect("known tokens");
    assert_eq!(config.flavour, Flavour::Selenium);
    assert_eq!(config.strategy, Strategy::PageFactory);
    assert_eq!(config.prefix, "POGE_");
    assert_eq!(config.packages, "com.example");
}

#[test]
fn build_generation_config_rejects_unknown_flavour() {
    let err = build_generation_config("cypress", "page-factory", "POGE_", "").unwrap_err();
    match &err {
        GenError::Configuration(msg) => assert!(msg.contains("cypress"), "message was: {}", msg),
        other => panic!("Expected Configuration error, got {:?}", other),
    }
}

#[test]
fn build_generation_config_rejects_unknown_strategy() {
    let err = build_generation_config("selenium", "inline", "POGE_", "").unwrap_err();
    assert!(matches!(err, GenError::Configuration(_)), "got {:?}", err);
}

#[test]
fn build_generation_config_accepts_declared_but_unregistered_strategy() {
    // by-locator is a known token; rejecting the pair is the factory's
    // job, not configuration's.
    let config = build_generation_config("selenium", "by-locator", "POGE_", "").unwrap();
    assert_eq!(config.strategy, Strategy::ByLocator);
}
