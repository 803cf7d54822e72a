//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Clinical Summary - FHIR R4 patient summaries generated by a language model
#[derive(Parser, Debug)]
#[command(name = "clinical-summary")]
#[command(version, about, long_about = None)]
#[command(author = "Clinical Summary Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "clinical-summary.toml",
        env = "CLINICAL_SUMMARY_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CLINICAL_SUMMARY_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the clinical summary for a patient
    Summary(commands::summary::SummaryArgs),

    /// Show the extracted records for a patient without generating text
    Resources(commands::resources::ResourcesArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Commands {
    /// Whether the command reads the configuration file
    pub fn uses_config(&self) -> bool {
        !matches!(self, Commands::Init(_))
    }
}
