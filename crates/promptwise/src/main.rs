// SPDX-FileCopyrightText: 2026 Promptwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Promptwise - classify AI prompts and route them to a provider and model.
//!
//! This is the binary entry point.

mod classify;
mod detect;
mod show;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use promptwise_config::model::{OutputFormat, PromptwiseConfig};
use promptwise_core::PromptwiseError;

/// Promptwise - classify AI prompts and route them to a provider and model.
#[derive(Parser, Debug)]
#[command(name = "promptwise", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output flags shared by subcommands.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Print machine-readable JSON.
    #[arg(long, conflicts_with = "plain")]
    pub json: bool,

    /// Print plain text without colors.
    #[arg(long)]
    pub plain: bool,
}

/// Resolved output settings for one command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputMode {
    pub format: OutputFormat,
    pub color: bool,
}

impl OutputMode {
    /// Flags win over configuration; colors only on a terminal.
    pub fn resolve(args: OutputArgs, config: &PromptwiseConfig, is_terminal: bool) -> Self {
        let format = if args.json {
            OutputFormat::Json
        } else if args.plain {
            OutputFormat::Plain
        } else {
            config.output.format
        };
        let color =
            format == OutputFormat::Plain && !args.plain && config.output.color && is_terminal;
        Self { format, color }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a prompt and show the suggested provider and model.
    Classify {
        /// Prompt description. Use `-` to read it from stdin.
        #[arg(required = true)]
        description: Vec<String>,

        /// What the prompt should achieve.
        #[arg(long)]
        objective: Option<String>,

        /// Domain identifier, e.g. `marketing` or `development`.
        #[arg(long)]
        domain: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Detect the language (fr, ar, en) of a text.
    Detect {
        /// Text to inspect. Use `-` to read it from stdin.
        #[arg(required = true)]
        text: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show the provider routing table.
    Rules {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show the effective configuration as TOML.
    Config,
}

fn main() {
    let cli = Cli::parse();

    let loaded = match cli.config.as_deref() {
        Some(path) => promptwise_config::load_and_validate_path(path),
        None => promptwise_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            promptwise_config::render_errors(errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);
    tracing::debug!(
        app = config.app.name.as_str(),
        path = ?cli.config,
        "configuration loaded"
    );

    if let Err(e) = run(cli.command, &config) {
        tracing::error!(error = %e, "command failed");
        eprintln!("{}: {e}", config.app.name);
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &PromptwiseConfig) -> Result<(), PromptwiseError> {
    let is_terminal = std::io::stdout().is_terminal();
    match command {
        Commands::Classify {
            description,
            objective,
            domain,
            output,
        } => {
            let mode = OutputMode::resolve(output, config, is_terminal);
            classify::run_classify(config, &description, objective, domain, mode)
        }
        Commands::Detect { text, output } => {
            let mode = OutputMode::resolve(output, config, is_terminal);
            detect::run_detect(config, &text, mode)
        }
        Commands::Rules { output } => {
            let mode = OutputMode::resolve(output, config, is_terminal);
            show::run_rules(mode)
        }
        Commands::Config => show::run_config(config),
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Filter directive applying the configured level to every workspace crate.
fn default_directive(log_level: &str) -> String {
    let level = log_level.trim().to_lowercase();
    ["promptwise", "promptwise_config", "promptwise_router"]
        .iter()
        .map(|target| format!("{target}={level}"))
        .chain(std::iter::once("warn".to_string()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Join positional words into one text, reading stdin when the only word is `-`.
pub fn read_text(words: &[String]) -> Result<String, PromptwiseError> {
    if let [only] = words
        && only == "-"
    {
        use std::io::Read;
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf.trim().to_string());
    }
    Ok(words.join(" "))
}
