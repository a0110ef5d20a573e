// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests for the complexity classifier.

use proptest::prelude::*;
use promptwise_core::ComplexityType;
use promptwise_router::keywords::{
    ANALYTICAL_KEYWORDS, COMPLEX_INDICATORS, CREATIVE_DOMAINS, CREATIVE_KEYWORDS,
    TECHNICAL_DOMAINS, TECHNICAL_KEYWORDS,
};
use promptwise_router::{bucket, classify, ComplexityClassifier, PromptInput};

fn any_keyword() -> impl Strategy<Value = &'static str> {
    let all: Vec<&'static str> = CREATIVE_KEYWORDS
        .iter()
        .chain(TECHNICAL_KEYWORDS)
        .chain(ANALYTICAL_KEYWORDS)
        .chain(COMPLEX_INDICATORS)
        .copied()
        .collect();
    prop::sample::select(all)
}

fn any_domain() -> impl Strategy<Value = Option<String>> {
    let mut domains: Vec<String> = CREATIVE_DOMAINS
        .iter()
        .chain(TECHNICAL_DOMAINS)
        .map(|d| d.to_string())
        .collect();
    domains.push("cuisine".to_string());
    prop::option::of(prop::sample::select(domains))
}

proptest! {
    #[test]
    fn score_is_at_least_one(
        description in ".{0,200}",
        objective in prop::option::of(".{0,80}"),
        domain in any_domain(),
    ) {
        let result = classify(&description, objective.as_deref(), domain.as_deref());
        prop_assert!(result.score >= 1);
    }

    #[test]
    fn type_matches_threshold_table(
        description in "[a-zà-ÿ ]{0,300}",
        domain in any_domain(),
    ) {
        let result = classify(&description, None, domain.as_deref());
        let expected = match result.score {
            0..=3 => ComplexityType::Simple,
            4..=6 => ComplexityType::Medium,
            7..=9 => ComplexityType::Complex,
            _ => ComplexityType::Creative,
        };
        prop_assert_eq!(result.complexity_type, expected);
        prop_assert_eq!(bucket(result.score), expected);
    }

    #[test]
    fn classification_is_deterministic(
        description in ".{0,200}",
        objective in prop::option::of(".{0,80}"),
        domain in any_domain(),
    ) {
        let first = classify(&description, objective.as_deref(), domain.as_deref());
        let second = classify(&description, objective.as_deref(), domain.as_deref());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn adding_a_keyword_never_lowers_the_score(
        words in prop::collection::vec("[a-z]{1,8}", 0..15),
        keyword in any_keyword(),
    ) {
        // Short base text so the extra word cannot move the length tier down.
        let base = words.join(" ");
        let extended = format!("{base} {keyword}");
        let classifier = ComplexityClassifier::new();
        let before = classifier.score(&PromptInput::new(base));
        let after = classifier.score(&PromptInput::new(extended));
        prop_assert!(after.score >= before.score);
    }

    #[test]
    fn signals_only_ever_gain_from_a_domain(
        description in "[a-z ]{0,100}",
        domain in any_domain(),
    ) {
        let classifier = ComplexityClassifier::new();
        let plain = classifier.score(&PromptInput::new(description.clone()));
        let mut input = PromptInput::new(description);
        input.domain = domain;
        let with_domain = classifier.score(&input);
        prop_assert!(with_domain.score >= plain.score);
        prop_assert!(with_domain.signals.is_creative || !plain.signals.is_creative);
        prop_assert!(with_domain.signals.is_technical || !plain.signals.is_technical);
    }
}
