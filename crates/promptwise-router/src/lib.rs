// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt complexity classification and provider routing for Promptwise.
//!
//! This crate provides:
//! - [`ComplexityClassifier`]: heuristic keyword scoring (zero-cost, zero-latency)
//! - [`rules`]: the priority-ordered provider/model routing table
//! - [`detect_language`]: French/Arabic/English language detection
//! - [`PromptRouter`]: config-aware routing with forced routes and fallbacks
//!
//! Callers use the suggested provider and model to pick a cost-appropriate
//! backend before issuing the real generation request.

pub mod classifier;
pub mod keywords;
pub mod language;
pub mod router;
pub mod rules;

pub use classifier::{
    bucket, classify, ComplexityClassifier, ComplexityResult, ContentSignals, PromptInput,
    ScoreCard,
};
pub use language::{detect_language, LanguageDetection};
pub use router::{PromptRouter, RoutingDecision};
pub use rules::{Condition, Route, RoutingRule};
