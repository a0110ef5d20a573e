// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `promptwise classify` command implementation.
//!
//! Classifies the prompt, applies the configured routing overrides and prints
//! the decision as colored text or JSON.

use promptwise_config::model::{OutputFormat, PromptwiseConfig};
use promptwise_core::PromptwiseError;
use promptwise_router::{ContentSignals, PromptInput, PromptRouter, RoutingDecision};

use crate::{read_text, OutputMode};

/// Run the `promptwise classify` command.
pub fn run_classify(
    config: &PromptwiseConfig,
    description: &[String],
    objective: Option<String>,
    domain: Option<String>,
    mode: OutputMode,
) -> Result<(), PromptwiseError> {
    let router = PromptRouter::new(&config.routing, &config.language)?;
    let input = PromptInput {
        description: read_text(description)?,
        objective,
        domain,
    };

    let decision = router.route(&input);
    tracing::debug!(
        score = decision.result.score,
        provider = %decision.provider,
        model = decision.model.as_str(),
        "routing decision"
    );

    match mode.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&decision)?),
        OutputFormat::Plain => print!("{}", render_decision(&decision, mode.color)),
    }
    Ok(())
}

fn signal_labels(signals: &ContentSignals) -> String {
    let labels: Vec<&str> = [
        (signals.is_creative, "creative"),
        (signals.is_technical, "technical"),
        (signals.is_analytical, "analytical"),
        (signals.is_complex, "complex"),
    ]
    .into_iter()
    .filter_map(|(on, label)| on.then_some(label))
    .collect();

    if labels.is_empty() {
        "none".to_string()
    } else {
        labels.join(", ")
    }
}

/// Render a routing decision as human-readable text.
pub fn render_decision(decision: &RoutingDecision, use_color: bool) -> String {
    let c = &decision.result;
    let mut route = format!("{} / {}", decision.provider, decision.model);
    let mut tier = c.complexity_type.to_string();
    if use_color {
        use colored::Colorize;
        route = route.green().bold().to_string();
        tier = tier.cyan().to_string();
    }

    let mut lines = vec![
        String::new(),
        format!("  Route:      {route}"),
        format!("  Complexity: {tier} (score {})", c.score),
        format!("  Signals:    {}", signal_labels(&c.signals)),
    ];
    if let Some(lang) = decision.language {
        lines.push(format!(
            "  Language:   {} ({:.0}%)",
            lang.language,
            lang.confidence * 100.0
        ));
    }
    if decision.forced || decision.fallback {
        lines.push(format!(
            "  Suggested:  {} / {}",
            c.suggested_provider, c.suggested_model
        ));
    }
    lines.push(format!("  Reason:     {}", decision.reason));
    lines.push(String::new());
    lines.join("\n") + "\n"
}
