// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Turns figment errors and validation failures into miette diagnostics.
//! Unknown keys get a span into the offending file; unknown keys and values
//! get a "did you mean" suggestion by Jaro-Winkler similarity.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
/// Catches typos like `log_levle` -> `log_level` or `opnai` -> `openai`.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with rich diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(promptwise::config::unknown_key),
        help("{}", format_suggestion_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        /// The unrecognized key name.
        key: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
        /// List of valid keys for the section.
        valid_keys: String,
        /// Source span for the offending key.
        #[label("this key is not recognized")]
        span: Option<SourceSpan>,
        /// The source file content for context display.
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A configuration value has the wrong type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(promptwise::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        /// The key with the wrong type.
        key: String,
        /// Description of the type mismatch.
        detail: String,
        /// What type was expected.
        expected: String,
    },

    /// A value is not one of the accepted variants (e.g. `output.format`).
    #[error("invalid value `{value}` for key `{key}`")]
    #[diagnostic(
        code(promptwise::config::invalid_value),
        help("{}", format_suggestion_help(suggestion.as_deref(), valid_values))
    )]
    InvalidValue {
        /// Dotted path of the key.
        key: String,
        /// The rejected value.
        value: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
        /// Accepted values.
        valid_values: String,
    },

    /// A validation error for a config value.
    #[error("validation error: {message}")]
    #[diagnostic(code(promptwise::config::validation))]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// A config file given explicitly does not exist.
    #[error("configuration file `{path}` not found")]
    #[diagnostic(
        code(promptwise::config::file_not_found),
        help("check the path passed with --config")
    )]
    FileNotFound {
        /// The path as given.
        path: String,
    },

    /// Catch-all for other configuration errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(promptwise::config::other))]
    Other(String),
}

fn format_suggestion_help(suggestion: Option<&str>, valid: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid values: {valid}"),
        None => format!("valid values: {valid}"),
    }
}

/// A TOML file that took part in loading, kept so errors can point into it.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path the file was read from.
    pub path: PathBuf,
    /// Raw file contents.
    pub content: String,
}

impl ConfigSource {
    /// Read a config file, returning `None` when it does not exist or is unreadable.
    pub fn read(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        Some(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    fn is_file(&self, other: &Path) -> bool {
        self.path == other
            || matches!(
                (self.path.canonicalize(), other.canonicalize()),
                (Ok(a), Ok(b)) if a == b
            )
    }
}

/// Convert a `figment::Error` into a list of `ConfigError` diagnostics.
///
/// A figment error may carry several errors; each becomes one diagnostic.
pub fn figment_to_config_errors(err: figment::Error, sources: &[ConfigSource]) -> Vec<ConfigError> {
    err.into_iter().map(|error| convert(&error, sources)).collect()
}

fn convert(error: &figment::Error, sources: &[ConfigSource]) -> ConfigError {
    use figment::error::Kind;

    let key = error.path.join(".");
    match &error.kind {
        Kind::UnknownField(field, expected) => {
            let (span, src) = locate_key(error, field, sources).unzip();
            ConfigError::UnknownKey {
                key: field.clone(),
                suggestion: suggest_key(field, expected),
                valid_keys: expected.join(", "),
                span,
                src,
            }
        }
        Kind::UnknownVariant(value, expected) => ConfigError::InvalidValue {
            key,
            value: value.clone(),
            suggestion: suggest_key(value, expected),
            valid_values: expected.join(", "),
        },
        Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
            key,
            detail: format!("found {actual}, expected {expected}"),
            expected: expected.to_string(),
        },
        _ => ConfigError::Other(error.to_string()),
    }
}

/// Point at an unknown key inside the file figment read it from.
fn locate_key(
    error: &figment::Error,
    field: &str,
    sources: &[ConfigSource],
) -> Option<(SourceSpan, NamedSource<String>)> {
    let origin = match error.metadata.as_ref()?.source.as_ref()? {
        figment::Source::File(path) => path,
        _ => return None,
    };
    let source = sources.iter().find(|s| s.is_file(origin))?;
    let section = error.path.first().map(String::as_str);
    let offset = find_key_offset(&source.content, section, field)?;
    Some((
        SourceSpan::new(offset.into(), field.len()),
        NamedSource::new(source.path.display().to_string(), source.content.clone()),
    ))
}

/// Byte offset of `key` inside the TOML table `section` (`None` for top-level keys).
///
/// Works line by line, so `\r\n` line endings keep offsets exact.
pub fn find_key_offset(content: &str, section: Option<&str>, key: &str) -> Option<usize> {
    let mut current = None;
    let mut line_start = 0;
    for line in content.split_inclusive('\n') {
        let offset = line_start;
        line_start += line.len();

        let text = line.trim_end_matches(['\r', '\n']);
        let trimmed = text.trim_start();
        if let Some(header) = trimmed.strip_prefix('[') {
            current = header.split_once(']').map(|(name, _)| name.trim());
            continue;
        }
        if current == section
            && let Some(rest) = trimmed.strip_prefix(key)
            && rest.trim_start().starts_with('=')
        {
            return Some(offset + text.len() - trimmed.len());
        }
    }
    None
}

/// Closest candidate by Jaro-Winkler similarity, if any clears the threshold.
pub fn suggest_key(unknown: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|candidate| (strsim::jaro_winkler(unknown, candidate), *candidate))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, candidate)| candidate.to_string())
}

/// Print each error to stderr as a miette report.
pub fn render_errors(errors: Vec<ConfigError>) {
    for error in errors {
        eprintln!("{:?}", miette::Report::new(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_log_level_for_typo() {
        let valid = &["name", "log_level"];
        assert_eq!(suggest_key("log_levle", valid), Some("log_level".to_string()));
    }

    #[test]
    fn suggest_provider_name() {
        let valid = &["openai", "deepseek", "openrouter", "gemini"];
        assert_eq!(suggest_key("opnai", valid), Some("openai".to_string()));
        assert_eq!(suggest_key("deepsek", valid), Some("deepseek".to_string()));
    }

    #[test]
    fn no_suggestion_for_distant_typo() {
        let valid = &["name", "log_level"];
        assert_eq!(suggest_key("zzzzzz", valid), None);
    }

    #[test]
    fn find_key_offset_in_section() {
        let content = "[app]\nname = \"x\"\n\n[routing]\nforce_modle = \"gpt-4o\"\n";
        let o = find_key_offset(content, Some("routing"), "force_modle").unwrap();
        assert_eq!(&content[o..o + 11], "force_modle");
    }

    #[test]
    fn find_key_offset_with_crlf_line_endings() {
        let content = "[app]\r\nname = \"x\"\r\n\r\n[routing]\r\n  force_modle = \"gpt-4o\"\r\n";
        let o = find_key_offset(content, Some("routing"), "force_modle").unwrap();
        assert_eq!(&content[o..o + 11], "force_modle");
    }

    #[test]
    fn find_key_offset_ignores_other_sections_and_prefixes() {
        let content = "[app]\nname = \"x\"\n[output]\nname_x = 1\nname=2\n";
        let o = find_key_offset(content, Some("output"), "name").unwrap();
        assert_eq!(&content[o..o + 6], "name=2");
    }

    #[test]
    fn find_key_offset_top_level() {
        let content = "colour = true\n[app]\ncolour = false\n";
        assert_eq!(find_key_offset(content, None, "colour"), Some(0));
    }

    #[test]
    fn find_key_offset_missing_section() {
        let content = "[app]\nname = \"x\"\n";
        assert_eq!(find_key_offset(content, Some("routing"), "name"), None);
    }

    #[test]
    fn missing_field_is_reported_as_other() {
        use figment::error::Kind;

        let err = figment::Error::from(Kind::MissingField("fallback_model".into()));
        let errors = figment_to_config_errors(err, &[]);
        assert!(matches!(
            errors.as_slice(),
            [ConfigError::Other(message)] if message.contains("fallback_model")
        ));
    }

    #[test]
    fn suggestion_help_formatting() {
        assert_eq!(
            format_suggestion_help(Some("json"), "plain, json"),
            "did you mean `json`? Valid values: plain, json"
        );
        assert_eq!(format_suggestion_help(None, "plain, json"), "valid values: plain, json");
    }
}
