// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider routing with forced routes, disabled providers and language reporting.
//!
//! Orchestrates provider selection: global force > classify > disabled-provider fallback.

use std::collections::HashSet;

use promptwise_config::model::{LanguageConfig, RoutingConfig};
use promptwise_core::{Language, PromptwiseError, Provider};
use serde::Serialize;
use tracing::{debug, info};

use crate::classifier::{ComplexityClassifier, ComplexityResult, PromptInput};
use crate::language::{detect_language, LanguageDetection};

/// Routing decision with both the classifier's suggestion and the route actually used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingDecision {
    /// Classification of the prompt, including the classifier's own suggestion.
    pub result: ComplexityResult,
    /// Provider the prompt should be sent to.
    pub provider: Provider,
    /// Model the prompt should be sent to.
    pub model: String,
    /// Whether a globally forced route replaced the suggestion.
    pub forced: bool,
    /// Whether the suggested provider was disabled and the fallback route was used.
    pub fallback: bool,
    /// Detected prompt language, when detection is enabled.
    pub language: Option<LanguageDetection>,
    /// Human-readable reason for the routing decision.
    pub reason: String,
}

/// Orchestrates provider selection around the complexity classifier.
#[derive(Debug, Clone)]
pub struct PromptRouter {
    classifier: ComplexityClassifier,
    forced: Option<(Provider, String)>,
    disabled: HashSet<Provider>,
    fallback: (Provider, String),
    detect_language: bool,
    default_language: Language,
}

impl PromptRouter {
    /// Create a router from validated configuration sections.
    ///
    /// Fails if a provider name in the configuration is unknown.
    pub fn new(
        routing: &RoutingConfig,
        language: &LanguageConfig,
    ) -> Result<Self, PromptwiseError> {
        let forced = match (&routing.force_provider, &routing.force_model) {
            (Some(provider), Some(model)) => Some((Provider::parse(provider)?, model.clone())),
            (None, None) => None,
            _ => {
                return Err(PromptwiseError::Config(
                    "routing.force_provider and routing.force_model must be set together"
                        .to_string(),
                ));
            }
        };

        let disabled = routing
            .disabled_providers
            .iter()
            .map(|name| Provider::parse(name))
            .collect::<Result<HashSet<_>, _>>()?;

        let fallback = (
            Provider::parse(&routing.fallback_provider)?,
            routing.fallback_model.clone(),
        );

        Ok(Self {
            classifier: ComplexityClassifier::new(),
            forced,
            disabled,
            fallback,
            detect_language: language.detect,
            default_language: language.default,
        })
    }

    /// Route a prompt to a provider and model.
    ///
    /// Priority order:
    /// 1. Global forced route (`routing.force_provider` + `routing.force_model`)
    /// 2. Classifier suggestion
    /// 3. Fallback route when the chosen provider is disabled
    pub fn route(&self, input: &PromptInput) -> RoutingDecision {
        let result = self.classifier.classify(input);

        let language = self.detect_language.then(|| {
            let text = [
                input.description.as_str(),
                input.objective.as_deref().unwrap_or_default(),
            ]
            .join(" ");
            detect_language(&text, self.default_language)
        });

        let (mut provider, mut model, forced, mut reason) = match &self.forced {
            Some((provider, model)) => {
                debug!(provider = %provider, model = model.as_str(), "using forced route");
                (*provider, model.clone(), true, "global forced route".to_string())
            }
            None => (
                result.suggested_provider,
                result.suggested_model.clone(),
                false,
                result.reasoning.clone(),
            ),
        };

        let mut fallback = false;
        if self.disabled.contains(&provider) {
            let (fallback_provider, fallback_model) = &self.fallback;
            info!(
                disabled = %provider,
                intended_model = model.as_str(),
                fallback_provider = %fallback_provider,
                fallback_model = fallback_model.as_str(),
                "provider disabled, using fallback route"
            );
            reason = format!("{reason} (provider {provider} is disabled, using fallback route)");
            provider = *fallback_provider;
            model = fallback_model.clone();
            fallback = true;
        }

        RoutingDecision {
            result,
            provider,
            model,
            forced,
            fallback,
            language,
            reason,
        }
    }
}
