// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Promptwise configuration system.

use std::io::Write;
use std::path::Path;

use promptwise_config::diagnostic::ConfigError;
use promptwise_config::model::OutputFormat;
use promptwise_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};
use promptwise_core::Language;

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_promptwise_config() {
    let toml = r#"
[app]
name = "prompt-lab"
log_level = "debug"

[routing]
force_provider = "openrouter"
force_model = "claude-3.5-sonnet"
disabled_providers = ["gemini"]
fallback_provider = "deepseek"
fallback_model = "deepseek-chat"

[language]
detect = false
default = "ar"

[output]
format = "json"
color = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.app.name, "prompt-lab");
    assert_eq!(config.app.log_level, "debug");
    assert_eq!(config.routing.force_provider.as_deref(), Some("openrouter"));
    assert_eq!(config.routing.force_model.as_deref(), Some("claude-3.5-sonnet"));
    assert_eq!(config.routing.disabled_providers, vec!["gemini"]);
    assert_eq!(config.routing.fallback_provider, "deepseek");
    assert_eq!(config.routing.fallback_model, "deepseek-chat");
    assert!(!config.language.detect);
    assert_eq!(config.language.default, Language::Arabic);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(!config.output.color);
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.app.name, "promptwise");
    assert_eq!(config.app.log_level, "info");
    assert!(config.routing.force_provider.is_none());
    assert!(config.routing.force_model.is_none());
    assert!(config.routing.disabled_providers.is_empty());
    assert_eq!(config.routing.fallback_provider, "openai");
    assert_eq!(config.routing.fallback_model, "gpt-4o-mini");
    assert!(config.language.detect);
    assert_eq!(config.language.default, Language::French);
    assert_eq!(config.output.format, OutputFormat::Plain);
    assert!(config.output.color);
}

/// `PROMPTWISE_*` environment variables override values from the config file.
#[test]
fn env_var_overrides_config_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "promptwise.toml",
            r#"
[routing]
fallback_model = "from-toml"
"#,
        )?;
        jail.set_env("PROMPTWISE_ROUTING_FALLBACK_MODEL", "from-env");

        let config = load_and_validate_path(Path::new("promptwise.toml"))
            .expect("file plus env override should be valid");
        assert_eq!(config.routing.fallback_model, "from-env");
        Ok(())
    });
}

/// Unknown key in [routing] produces an UnknownKey diagnostic with a suggestion.
#[test]
fn unknown_routing_key_suggests_correction() {
    let toml = r#"
[routing]
force_modle = "gpt-4o"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "force_modle"
                && suggestion.as_deref() == Some("force_model")
                && valid_keys.contains("fallback_provider")
        })
    });
    assert!(found, "expected UnknownKey for force_modle, got: {errors:?}");
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[supabase]
url = "https://example.invalid"
"#;

    let err = load_config_from_str(toml).expect_err("unknown section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("supabase"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// An unknown enum value produces an InvalidValue diagnostic.
#[test]
fn unknown_output_format_is_invalid_value() {
    let toml = r#"
[output]
format = "jsno"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown format");
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::InvalidValue { value, suggestion, .. }
            if value == "jsno" && suggestion.as_deref() == Some("json"))
    });
    assert!(found, "expected InvalidValue for jsno, got: {errors:?}");
}

/// Invalid type (string where bool expected) produces an InvalidType diagnostic.
#[test]
fn invalid_type_is_reported() {
    let toml = r#"
[language]
detect = "sometimes"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject invalid type");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("detect"))),
        "expected InvalidType for language.detect, got: {errors:?}"
    );
}

/// Semantic validation runs after a successful parse.
#[test]
fn validation_errors_surface_from_str_loader() {
    let toml = r#"
[routing]
force_provider = "openai"
"#;

    let errors = load_and_validate_str(toml).expect_err("half a forced route is invalid");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { message } if message.contains("force_model")
    )));
}

/// Config files given explicitly are loaded and validated.
#[test]
fn explicit_config_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
[app]
log_level = "warn"

[routing]
disabled_providers = ["deepseek"]
"#
    )
    .expect("write temp config");

    let config = load_and_validate_path(file.path()).expect("file config should be valid");
    assert_eq!(config.app.log_level, "warn");
    assert_eq!(config.routing.disabled_providers, vec!["deepseek"]);
}

/// A config file named explicitly must exist.
#[test]
fn missing_explicit_config_file_is_an_error() {
    let errors = load_and_validate_path(Path::new("/nonexistent/typo.toml"))
        .expect_err("a missing --config file must not fall back to defaults");
    assert!(
        matches!(
            errors.as_slice(),
            [ConfigError::FileNotFound { path }] if path == "/nonexistent/typo.toml"
        ),
        "expected FileNotFound, got: {errors:?}"
    );
}

/// A directory is not a config file either.
#[test]
fn directory_as_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let errors = load_and_validate_path(dir.path()).expect_err("directory is not a file");
    assert!(matches!(errors.as_slice(), [ConfigError::FileNotFound { .. }]));
}
