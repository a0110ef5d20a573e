// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./promptwise.toml` > `~/.config/promptwise/promptwise.toml` >
//! `/etc/promptwise/promptwise.toml` with environment variable overrides via `PROMPTWISE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::PromptwiseConfig;

/// Local config file name, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "promptwise.toml";

/// System-wide config file path.
pub const SYSTEM_CONFIG_FILE: &str = "/etc/promptwise/promptwise.toml";

/// User config file path under the XDG config directory, if one exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("promptwise").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/promptwise/promptwise.toml` (system-wide)
/// 3. `~/.config/promptwise/promptwise.toml` (user XDG config)
/// 4. `./promptwise.toml` (local directory)
/// 5. `PROMPTWISE_*` environment variables
pub fn load_config() -> Result<PromptwiseConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<PromptwiseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PromptwiseConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
///
/// Unlike the hierarchy files, this file must exist.
pub fn load_config_from_path(path: &Path) -> Result<PromptwiseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PromptwiseConfig::default()))
        .merge(Toml::file_exact(path))
        .merge(env_provider())
        .extract()
}

/// Hierarchy config files in merge order (system, user, local).
pub fn config_files() -> Vec<PathBuf> {
    let mut files = vec![PathBuf::from(SYSTEM_CONFIG_FILE)];
    files.extend(user_config_path());
    files.push(PathBuf::from(LOCAL_CONFIG_FILE));
    files
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    let defaults = Figment::from(Serialized::defaults(PromptwiseConfig::default()));
    config_files()
        .into_iter()
        .fold(defaults, |figment, path| figment.merge(Toml::file(path)))
        .merge(env_provider())
}

/// Config sections addressable from `PROMPTWISE_<SECTION>_<KEY>` variables.
const ENV_SECTIONS: &[&str] = &["app", "routing", "language", "output"];

/// Create the environment variable provider.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `PROMPTWISE_ROUTING_FORCE_MODEL` must map to
/// `routing.force_model`, not `routing.force.model`.
fn env_provider() -> Env {
    Env::prefixed("PROMPTWISE_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a prefix-stripped env var name to a dotted config path.
///
/// Figment hands the name over in its original case, so it is lowercased here.
fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    ENV_SECTIONS
        .iter()
        .find_map(|section| {
            key.strip_prefix(section)
                .and_then(|rest| rest.strip_prefix('_'))
                .map(|rest| format!("{section}.{rest}"))
        })
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_map_to_sections() {
        assert_eq!(map_env_key("app_log_level"), "app.log_level");
        assert_eq!(map_env_key("routing_force_model"), "routing.force_model");
        assert_eq!(map_env_key("routing_disabled_providers"), "routing.disabled_providers");
        assert_eq!(map_env_key("language_default"), "language.default");
        assert_eq!(map_env_key("output_format"), "output.format");
    }

    #[test]
    fn env_keys_are_lowercased() {
        assert_eq!(map_env_key("ROUTING_FALLBACK_MODEL"), "routing.fallback_model");
        assert_eq!(map_env_key("App_Log_Level"), "app.log_level");
    }

    #[test]
    fn unknown_env_section_is_left_alone() {
        assert_eq!(map_env_key("TELEMETRY_URL"), "telemetry_url");
    }

    #[test]
    fn config_files_end_with_local_file() {
        let files = config_files();
        assert_eq!(files.first(), Some(&PathBuf::from(SYSTEM_CONFIG_FILE)));
        assert_eq!(files.last(), Some(&PathBuf::from(LOCAL_CONFIG_FILE)));
    }

    #[test]
    fn missing_exact_file_is_an_error() {
        assert!(load_config_from_path(Path::new("/nonexistent/typo.toml")).is_err());
    }

    #[test]
    fn user_config_path_ends_with_file_name() {
        if let Some(path) = user_config_path() {
            assert!(path.ends_with("promptwise/promptwise.toml"));
        }
    }
}
