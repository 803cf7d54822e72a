//! Init command implementation
//!
//! This module implements the `init` command for generating a starter
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Starter configuration written by `init`
pub const STARTER_CONFIG: &str = r#"# Clinical Summary Configuration File
# FHIR R4 patient summaries generated by a language model

# Runtime environment (development | staging | production)
environment = "development"

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[fhir]
# Base URL of the FHIR R4 server
base_url = "http://hapi.fhir.org/baseR4"

# Request timeout in seconds
timeout_seconds = 30

# _count sent with every search (1-1000)
search_count = 100

# TLS certificate verification (cannot be disabled in production)
tls_verify = true

[llm]
# OpenAI-compatible API; requests go to {base_url}/chat/completions
base_url = "https://api.openai.com/v1"

# API key (use environment variable)
api_key = "${OPENAI_API_KEY}"

model = "gpt-4o"
temperature = 0.3

# Token limit of the final narrative
max_tokens = 2000

# Token limit of each section summary
section_max_tokens = 500

timeout_seconds = 120

[logging]
# JSON log files in local_path
local_enabled = false
local_path = "./logs"

# Log rotation (daily, hourly, never)
local_rotation = "daily"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "clinical-summary.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, STARTER_CONFIG) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your FHIR server URL", self.output);
                println!("  2. Set OPENAI_API_KEY in your environment or a .env file");
                println!("  3. Validate configuration: clinical-summary validate-config");
                println!("  4. Generate a summary: clinical-summary summary <PATIENT_ID>");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}
