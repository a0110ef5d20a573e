// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as provider names, paired override keys and a usable fallback route.

use std::collections::HashSet;

use promptwise_core::Provider;
use strum::IntoEnumIterator;

use crate::diagnostic::{suggest_key, ConfigError};
use crate::model::PromptwiseConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &PromptwiseConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.app.log_level.trim().to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::InvalidValue {
            key: "app.log_level".to_string(),
            value: config.app.log_level.clone(),
            suggestion: suggest_key(&level, LOG_LEVELS),
            valid_values: LOG_LEVELS.join(", "),
        });
    }

    let routing = &config.routing;

    // Forced route needs both halves
    match (&routing.force_provider, &routing.force_model) {
        (Some(provider), Some(model)) => {
            check_provider("routing.force_provider", provider, &mut errors);
            if model.trim().is_empty() {
                errors.push(ConfigError::Validation {
                    message: "routing.force_model must not be empty".to_string(),
                });
            }
        }
        (Some(_), None) => errors.push(ConfigError::Validation {
            message: "routing.force_provider is set but routing.force_model is not".to_string(),
        }),
        (None, Some(_)) => errors.push(ConfigError::Validation {
            message: "routing.force_model is set but routing.force_provider is not".to_string(),
        }),
        (None, None) => {}
    }

    let mut disabled = HashSet::new();
    for name in &routing.disabled_providers {
        if let Some(provider) = check_provider("routing.disabled_providers", name, &mut errors) {
            disabled.insert(provider);
        }
    }

    if let Some(fallback) =
        check_provider("routing.fallback_provider", &routing.fallback_provider, &mut errors)
        && disabled.contains(&fallback)
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "routing.fallback_provider `{fallback}` is listed in routing.disabled_providers"
            ),
        });
    }

    if routing.fallback_model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "routing.fallback_model must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parse a provider name, recording an `InvalidValue` error with a suggestion on failure.
fn check_provider(key: &str, name: &str, errors: &mut Vec<ConfigError>) -> Option<Provider> {
    match Provider::parse(name) {
        Ok(provider) => Some(provider),
        Err(_) => {
            let names: Vec<String> = Provider::iter().map(|p| p.to_string()).collect();
            let candidates: Vec<&str> = names.iter().map(String::as_str).collect();
            errors.push(ConfigError::InvalidValue {
                key: key.to_string(),
                value: name.to_string(),
                suggestion: suggest_key(&name.trim().to_lowercase(), &candidates),
                valid_values: candidates.join(", "),
            });
            None
        }
    }
}
