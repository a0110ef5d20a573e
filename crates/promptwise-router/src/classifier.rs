// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic prompt complexity classification.
//!
//! Scores a prompt's description, objective and domain with fixed keyword
//! tables, buckets the score into a [`ComplexityType`] and picks a provider
//! and model from the routing table. No model call, no I/O, no state.

use promptwise_core::{ComplexityType, Provider};
use serde::Serialize;
use tracing::trace;

use crate::keywords::{
    distinct_hits, ANALYTICAL_KEYWORDS, ANALYTICAL_WEIGHT, COMPLEX_INDICATORS, COMPLEX_WEIGHT,
    CREATIVE_DOMAINS, CREATIVE_KEYWORDS, CREATIVE_WEIGHT, DOMAIN_WEIGHT, TECHNICAL_DOMAINS,
    TECHNICAL_KEYWORDS, TECHNICAL_WEIGHT,
};
use crate::rules;

/// Highest score still bucketed as simple.
pub const SIMPLE_MAX_SCORE: u32 = 3;
/// Highest score still bucketed as medium.
pub const MEDIUM_MAX_SCORE: u32 = 6;
/// Highest score still bucketed as complex. Anything above is creative.
pub const COMPLEX_MAX_SCORE: u32 = 9;

/// Text fields of a prompt request. Missing fields behave as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptInput {
    pub description: String,
    pub objective: Option<String>,
    pub domain: Option<String>,
}

impl PromptInput {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_objective(mut self, objective: impl Into<String>) -> Self {
        self.objective = Some(objective.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

/// Content categories detected in a prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSignals {
    pub is_creative: bool,
    pub is_technical: bool,
    pub is_analytical: bool,
    pub is_complex: bool,
}

/// Outcome of the scoring step, before bucketing and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    pub score: u32,
    pub word_count: usize,
    pub signals: ContentSignals,
}

/// Classification of a prompt with the suggested provider and model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityResult {
    pub score: u32,
    #[serde(rename = "type")]
    pub complexity_type: ComplexityType,
    pub suggested_provider: Provider,
    pub suggested_model: String,
    pub reasoning: String,
    pub signals: ContentSignals,
}

/// Heuristic prompt classifier with zero cost and zero latency.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexityClassifier;

impl ComplexityClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a prompt and suggest a provider and model for it.
    pub fn classify(&self, input: &PromptInput) -> ComplexityResult {
        let card = self.score(input);
        let complexity_type = bucket(card.score);
        let route = rules::select(complexity_type, &card.signals);

        trace!(
            score = card.score,
            words = card.word_count,
            tier = %complexity_type,
            model = route.model,
            "classified prompt"
        );

        ComplexityResult {
            score: card.score,
            complexity_type,
            suggested_provider: route.provider,
            suggested_model: route.model.to_string(),
            reasoning: route.reasoning.to_string(),
            signals: card.signals,
        }
    }

    /// Compute the heuristic score and content signals for a prompt.
    pub fn score(&self, input: &PromptInput) -> ScoreCard {
        let combined = format!(
            "{} {} {}",
            input.description,
            input.objective.as_deref().unwrap_or_default(),
            input.domain.as_deref().unwrap_or_default()
        )
        .to_lowercase();

        let mut signals = ContentSignals::default();

        // Signal 1: length
        let word_count = combined.split_whitespace().count();
        let mut score = Self::length_score(word_count);

        // Signal 2: keyword tables
        let creative = distinct_hits(&combined, CREATIVE_KEYWORDS);
        let technical = distinct_hits(&combined, TECHNICAL_KEYWORDS);
        let analytical = distinct_hits(&combined, ANALYTICAL_KEYWORDS);
        let complex = distinct_hits(&combined, COMPLEX_INDICATORS);

        score += creative * CREATIVE_WEIGHT
            + technical * TECHNICAL_WEIGHT
            + analytical * ANALYTICAL_WEIGHT
            + complex * COMPLEX_WEIGHT;

        signals.is_creative = creative > 0;
        signals.is_technical = technical > 0;
        signals.is_analytical = analytical > 0;
        signals.is_complex = complex > 0;

        // Signal 3: domain category
        if let Some(domain) = input.domain.as_deref() {
            let domain = domain.trim().to_lowercase();
            if CREATIVE_DOMAINS.contains(&domain.as_str()) {
                score += DOMAIN_WEIGHT;
                signals.is_creative = true;
            }
            if TECHNICAL_DOMAINS.contains(&domain.as_str()) {
                score += DOMAIN_WEIGHT;
                signals.is_technical = true;
            }
        }

        ScoreCard {
            score,
            word_count,
            signals,
        }
    }

    fn length_score(word_count: usize) -> u32 {
        match word_count {
            0..20 => 1,
            20..50 => 2,
            _ => 3,
        }
    }
}

/// Map a score to its complexity bucket.
pub fn bucket(score: u32) -> ComplexityType {
    if score <= SIMPLE_MAX_SCORE {
        ComplexityType::Simple
    } else if score <= MEDIUM_MAX_SCORE {
        ComplexityType::Medium
    } else if score <= COMPLEX_MAX_SCORE {
        ComplexityType::Complex
    } else {
        ComplexityType::Creative
    }
}

/// Classify a prompt from its raw fields.
///
/// Convenience wrapper over [`ComplexityClassifier::classify`].
pub fn classify(
    description: &str,
    objective: Option<&str>,
    domain: Option<&str>,
) -> ComplexityResult {
    let input = PromptInput {
        description: description.to_string(),
        objective: objective.map(str::to_string),
        domain: domain.map(str::to_string),
    };
    ComplexityClassifier::new().classify(&input)
}
