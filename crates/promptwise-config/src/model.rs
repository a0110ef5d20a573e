// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Promptwise.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use promptwise_core::Language;
use serde::{Deserialize, Serialize};

/// Top-level Promptwise configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PromptwiseConfig {
    /// Application identity and logging.
    #[serde(default)]
    pub app: AppConfig,

    /// Provider routing overrides and fallbacks.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Language detection settings.
    #[serde(default)]
    pub language: LanguageConfig,

    /// CLI output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Display name used in CLI output.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "promptwise".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Provider routing configuration.
///
/// The classifier's suggestion is used unless a route is forced globally.
/// Suggestions that land on a disabled provider are replaced by the
/// fallback route.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Force every prompt to this provider. Must be set together with `force_model`.
    #[serde(default)]
    pub force_provider: Option<String>,

    /// Force every prompt to this model. Must be set together with `force_provider`.
    /// Example: "gpt-4o"
    #[serde(default)]
    pub force_model: Option<String>,

    /// Providers that must never be suggested (e.g. no API key configured).
    #[serde(default)]
    pub disabled_providers: Vec<String>,

    /// Provider used when the suggested provider is disabled.
    #[serde(default = "default_fallback_provider")]
    pub fallback_provider: String,

    /// Model used when the suggested provider is disabled.
    #[serde(default = "default_fallback_model")]
    pub fallback_model: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            force_provider: None,
            force_model: None,
            disabled_providers: Vec::new(),
            fallback_provider: default_fallback_provider(),
            fallback_model: default_fallback_model(),
        }
    }
}

fn default_fallback_provider() -> String {
    "openai".to_string()
}

fn default_fallback_model() -> String {
    "gpt-4o-mini".to_string()
}

/// Language detection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageConfig {
    /// Detect and report the prompt language.
    #[serde(default = "default_detect")]
    pub detect: bool,

    /// Language assumed when detection is inconclusive.
    #[serde(default = "default_language")]
    pub default: Language,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            detect: default_detect(),
            default: default_language(),
        }
    }
}

fn default_detect() -> bool {
    true
}

fn default_language() -> Language {
    Language::French
}

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// CLI output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format when neither `--json` nor `--plain` is passed.
    #[serde(default)]
    pub format: OutputFormat,

    /// Colorize plain output on terminals.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}
