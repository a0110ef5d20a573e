// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the classifier, the router and the CLI.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::PromptwiseError;

/// External AI completion service a prompt can be routed to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    DeepSeek,
    OpenRouter,
    Gemini,
}

impl Provider {
    /// Parse a provider name (case-insensitive, surrounding whitespace ignored).
    pub fn parse(name: &str) -> Result<Self, PromptwiseError> {
        Provider::from_str(name.trim()).map_err(|_| PromptwiseError::UnknownProvider {
            name: name.to_string(),
        })
    }
}

/// Complexity bucket derived from the accumulated heuristic score.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ComplexityType {
    /// Score up to 3.
    Simple,
    /// Score 4 to 6.
    Medium,
    /// Score 7 to 9.
    Complex,
    /// Score above 9.
    Creative,
}

/// Languages supported by the product UI and the language detector.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    #[strum(serialize = "fr")]
    #[serde(rename = "fr")]
    French,
    #[strum(serialize = "ar")]
    #[serde(rename = "ar")]
    Arabic,
    #[strum(serialize = "en")]
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }

    /// Whether the language is written right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Arabic)
    }
}
