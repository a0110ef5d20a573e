// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `promptwise rules` and `promptwise config` command implementations.

use promptwise_config::model::{OutputFormat, PromptwiseConfig};
use promptwise_core::PromptwiseError;
use promptwise_router::rules::{rules, RoutingRule};

use crate::OutputMode;

/// Run the `promptwise rules` command.
pub fn run_rules(mode: OutputMode) -> Result<(), PromptwiseError> {
    match mode.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rules())?),
        OutputFormat::Plain => print!("{}", render_rules(rules(), mode.color)),
    }
    Ok(())
}

/// Run the `promptwise config` command.
pub fn run_config(config: &PromptwiseConfig) -> Result<(), PromptwiseError> {
    let rendered =
        toml::to_string_pretty(config).map_err(|e| PromptwiseError::Serialization(e.to_string()))?;
    print!("{rendered}");
    Ok(())
}

fn render_rules(table: &[RoutingRule], use_color: bool) -> String {
    let header = format!("  {:<10} {:<24} {:<12} MODEL", "TIER", "WHEN", "PROVIDER");
    let rows = table.iter().map(|rule| {
        let mut tier = format!("{:<10}", rule.tier.to_string());
        if use_color {
            use colored::Colorize;
            tier = tier.cyan().to_string();
        }
        format!(
            "  {tier} {:<24} {:<12} {}",
            rule.when.to_string(),
            rule.route.provider.to_string(),
            rule.route.model
        )
    });
    std::iter::once(header)
        .chain(rows)
        .map(|line| line + "\n")
        .collect()
}
