//! Summary command implementation
//!
//! Runs the full pipeline for one patient and prints the result on stdout.

use super::{build_coordinator, parse_patient_id};
use clap::{Args, ValueEnum};

/// Output format of the summary command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON payload
    Json,
    /// Narrative with a short header
    Text,
}

/// Arguments for the summary command
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// FHIR Patient logical id
    pub patient_id: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl SummaryArgs {
    /// Execute the summary command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let patient_id = match parse_patient_id(&self.patient_id) {
            Ok(id) => id,
            Err(code) => return Ok(code),
        };

        tracing::info!(patient_id = %patient_id, "Starting summary command");

        let coordinator = match build_coordinator(config_path, true) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(e.exit_code());
            }
        };

        match coordinator.generate_summary(&patient_id).await {
            Ok(summary) => {
                match self.format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                    OutputFormat::Text => print!("{}", summary.to_text()),
                }
                Ok(0)
            }
            Err(e) => {
                tracing::error!(patient_id = %patient_id, error = %e, "Summary generation failed");
                eprintln!("❌ {e}");
                Ok(e.exit_code())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_patient_id_exit_code() {
        let args = SummaryArgs {
            patient_id: "bad/id".to_string(),
            format: OutputFormat::Json,
        };
        assert_eq!(args.execute("unused.toml").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_missing_config_exit_code() {
        let args = SummaryArgs {
            patient_id: "p1".to_string(),
            format: OutputFormat::Text,
        };
        assert_eq!(
            args.execute("does-not-exist-clinical-summary.toml").await.unwrap(),
            2
        );
    }
}
