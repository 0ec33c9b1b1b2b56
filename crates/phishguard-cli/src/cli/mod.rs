//! CLI for the PhishGuard phishing-URL detector.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use phishguard_core::classifier::LinearModel;
use phishguard_core::config::{self, DetectorConfig};
use std::path::{Path, PathBuf};

use commands::{run_batch, run_check, run_completions, run_features, run_man};

/// Top-level CLI for the PhishGuard detector.
#[derive(Debug, Parser)]
#[command(name = "phishguard")]
#[command(about = "PhishGuard: lexical phishing-URL detector", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify a URL and print the verdict with its feature table.
    Check {
        /// URL to classify.
        url: String,
    },

    /// Extract and print the feature table for a URL without classifying.
    Features {
        /// URL to extract features from.
        url: String,
    },

    /// Classify one URL per line from a file (blank lines and '#' comments skipped).
    Batch {
        /// Path to the URL list.
        path: PathBuf,
    },

    /// Print a shell completion script to stdout.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },

    /// Print the man page (troff) to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Check { url } => {
                let cfg = config::load_or_init()?;
                let model = load_model(&cfg)?;
                run_check(&cfg, &model, &url)
            }
            CliCommand::Features { url } => {
                let cfg = config::load_or_init()?;
                run_features(&cfg, &url)
            }
            CliCommand::Batch { path } => {
                let cfg = config::load_or_init()?;
                let model = load_model(&cfg)?;
                run_batch(&cfg, &model, &path)
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man(),
        }
    }
}

/// Loads the configured model artifact, or the built-in default weights when
/// no path is configured.
fn load_model(cfg: &DetectorConfig) -> Result<LinearModel> {
    match &cfg.model_path {
        Some(path) => load_model_from(path),
        None => {
            tracing::debug!("no model_path configured, using built-in weights");
            Ok(LinearModel::builtin())
        }
    }
}

fn load_model_from(path: &Path) -> Result<LinearModel> {
    LinearModel::from_path(path)
        .with_context(|| format!("failed to load model from {}", path.display()))
}
