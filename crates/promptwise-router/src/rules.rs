// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Priority-ordered provider routing table.
//!
//! Each complexity bucket owns a contiguous run of rules. Within a bucket the
//! first rule whose condition holds wins, and every bucket ends with an
//! [`Condition::Always`] row so selection is total.

use promptwise_core::{ComplexityType, Provider};
use serde::Serialize;

use crate::classifier::ContentSignals;

/// Provider, model and user-facing explanation for one routing outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub provider: Provider,
    pub model: &'static str,
    pub reasoning: &'static str,
}

/// Predicate over the content signals of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Always,
    Creative,
    Technical,
    TechnicalAndAnalytical,
}

impl Condition {
    pub fn holds(self, signals: &ContentSignals) -> bool {
        match self {
            Condition::Always => true,
            Condition::Creative => signals.is_creative,
            Condition::Technical => signals.is_technical,
            Condition::TechnicalAndAnalytical => signals.is_technical && signals.is_analytical,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Always => write!(f, "always"),
            Condition::Creative => write!(f, "creative"),
            Condition::Technical => write!(f, "technical"),
            Condition::TechnicalAndAnalytical => write!(f, "technical + analytical"),
        }
    }
}

/// One row of the routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoutingRule {
    pub tier: ComplexityType,
    pub when: Condition,
    pub route: Route,
}

const DEEPSEEK_CHAT: Route = Route {
    provider: Provider::DeepSeek,
    model: "deepseek-chat",
    reasoning: "Simple request: DeepSeek Chat answers quickly at the lowest cost.",
};

const QWEN_72B: Route = Route {
    provider: Provider::OpenRouter,
    model: "qwen-2.5-72b-instruct",
    reasoning: "Moderate technical request: Qwen 2.5 72B handles code and technical detail well.",
};

const GPT_4O_MINI: Route = Route {
    provider: Provider::OpenAi,
    model: "gpt-4o-mini",
    reasoning: "Moderate general request: GPT-4o mini balances quality and cost.",
};

const CLAUDE_SONNET: Route = Route {
    provider: Provider::OpenRouter,
    model: "claude-3.5-sonnet",
    reasoning: "Creative request: Claude 3.5 Sonnet excels at nuanced writing and storytelling.",
};

const DEEPSEEK_R1: Route = Route {
    provider: Provider::OpenRouter,
    model: "deepseek-r1",
    reasoning: "Demanding technical request: DeepSeek R1 is strong at step-by-step reasoning.",
};

const GPT_4O: Route = Route {
    provider: Provider::OpenAi,
    model: "gpt-4o",
    reasoning: "Complex general request: GPT-4o offers strong all-round reasoning.",
};

const GEMINI_PRO: Route = Route {
    provider: Provider::OpenRouter,
    model: "gemini-pro-1.5",
    reasoning: "Very large request: Gemini Pro 1.5 handles long, multi-faceted context.",
};

static RULES: &[RoutingRule] = &[
    RoutingRule {
        tier: ComplexityType::Simple,
        when: Condition::Always,
        route: DEEPSEEK_CHAT,
    },
    RoutingRule {
        tier: ComplexityType::Medium,
        when: Condition::Technical,
        route: QWEN_72B,
    },
    RoutingRule {
        tier: ComplexityType::Medium,
        when: Condition::Always,
        route: GPT_4O_MINI,
    },
    RoutingRule {
        tier: ComplexityType::Complex,
        when: Condition::Creative,
        route: CLAUDE_SONNET,
    },
    RoutingRule {
        tier: ComplexityType::Complex,
        when: Condition::Technical,
        route: DEEPSEEK_R1,
    },
    RoutingRule {
        tier: ComplexityType::Complex,
        when: Condition::Always,
        route: GPT_4O,
    },
    RoutingRule {
        tier: ComplexityType::Creative,
        when: Condition::Creative,
        route: CLAUDE_SONNET,
    },
    RoutingRule {
        tier: ComplexityType::Creative,
        when: Condition::TechnicalAndAnalytical,
        route: DEEPSEEK_R1,
    },
    RoutingRule {
        tier: ComplexityType::Creative,
        when: Condition::Always,
        route: GEMINI_PRO,
    },
];

/// The full routing table in evaluation order.
pub fn rules() -> &'static [RoutingRule] {
    RULES
}

/// Select the route for a bucket given the prompt's content signals.
pub fn select(tier: ComplexityType, signals: &ContentSignals) -> &'static Route {
    RULES
        .iter()
        .filter(|rule| rule.tier == tier)
        .find(|rule| rule.when.holds(signals))
        .map(|rule| &rule.route)
        // Every tier ends with an `Always` row.
        .unwrap_or(&DEEPSEEK_CHAT)
}
