//! Resources command implementation
//!
//! Prints the extracted records per resource type as JSON. No text is generated.

use super::{build_coordinator, parse_patient_id};
use clap::Args;

/// Arguments for the resources command
#[derive(Args, Debug)]
pub struct ResourcesArgs {
    /// FHIR Patient logical id
    pub patient_id: String,
}

impl ResourcesArgs {
    /// Execute the resources command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let patient_id = match parse_patient_id(&self.patient_id) {
            Ok(id) => id,
            Err(code) => return Ok(code),
        };

        let coordinator = match build_coordinator(config_path, false) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(e.exit_code());
            }
        };

        match coordinator.inspect_resources(&patient_id).await {
            Ok(inspection) => {
                println!("{}", serde_json::to_string_pretty(&inspection)?);
                Ok(0)
            }
            Err(e) => {
                tracing::error!(patient_id = %patient_id, error = %e, "Resource inspection failed");
                eprintln!("❌ {e}");
                Ok(e.exit_code())
            }
        }
    }
}
