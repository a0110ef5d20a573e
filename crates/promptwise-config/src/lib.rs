// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Promptwise configuration: layered TOML files and `PROMPTWISE_*` variables,
//! checked into a [`PromptwiseConfig`] or a list of [`ConfigError`] diagnostics.
//!
//! ```no_run
//! let config = match promptwise_config::load_and_validate() {
//!     Ok(config) => config,
//!     Err(errors) => {
//!         promptwise_config::render_errors(errors);
//!         std::process::exit(1);
//!     }
//! };
//! println!("routing fallback: {}", config.routing.fallback_model);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

use tracing::debug;

pub use diagnostic::{render_errors, ConfigError, ConfigSource};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::PromptwiseConfig;

/// Load configuration from the XDG hierarchy and env vars, then validate it.
pub fn load_and_validate() -> Result<PromptwiseConfig, Vec<ConfigError>> {
    checked(loader::load_config(), || {
        loader::config_files()
            .iter()
            .filter_map(|path| ConfigSource::read(path))
            .collect()
    })
}

/// Load configuration from an explicit file (plus env overrides) and validate it.
///
/// The file must exist; a missing file is reported rather than skipped.
pub fn load_and_validate_path(path: &Path) -> Result<PromptwiseConfig, Vec<ConfigError>> {
    if !path.is_file() {
        return Err(vec![ConfigError::FileNotFound {
            path: path.display().to_string(),
        }]);
    }
    debug!(path = %path.display(), "loading configuration file");
    checked(loader::load_config_from_path(path), || {
        ConfigSource::read(path).into_iter().collect()
    })
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<PromptwiseConfig, Vec<ConfigError>> {
    checked(loader::load_config_from_str(toml_content), Vec::new)
}

/// Turn a figment result into diagnostics, reading sources only on failure,
/// then run semantic validation.
fn checked(
    loaded: Result<PromptwiseConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<ConfigSource>,
) -> Result<PromptwiseConfig, Vec<ConfigError>> {
    let config = loaded.map_err(|err| diagnostic::figment_to_config_errors(err, &sources()))?;
    validation::validate_config(&config)?;
    Ok(config)
}
