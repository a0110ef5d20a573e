// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Promptwise workspace.

use thiserror::Error;

/// The primary error type for fallible Promptwise operations.
///
/// Classification itself never fails; these cover the layers around it
/// (configuration, input reading, output rendering).
#[derive(Debug, Error)]
pub enum PromptwiseError {
    /// Configuration errors (invalid TOML, unknown keys, failed validation).
    #[error("configuration error: {0}")]
    Config(String),

    /// A provider name did not match any known provider.
    #[error("unknown provider `{name}` (expected one of: openai, deepseek, openrouter, gemini)")]
    UnknownProvider { name: String },

    /// Reading prompt input failed.
    #[error("i/o error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Rendering output as JSON or TOML failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PromptwiseError {
    fn from(err: serde_json::Error) -> Self {
        PromptwiseError::Serialization(err.to_string())
    }
}
