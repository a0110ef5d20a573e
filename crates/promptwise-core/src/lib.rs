// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Promptwise.
//!
//! Provides the error type and the small set of enums (providers, complexity
//! buckets, languages) shared across the workspace.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PromptwiseError;
pub use types::{ComplexityType, Language, Provider};
