//! CLI command implementations
//!
//! Commands return a process exit code: 0 success, 2 configuration or input
//! error, 3 patient not found, 4 upstream unreachable, 5 fatal.

pub mod init;
pub mod resources;
pub mod summary;
pub mod validate;

use crate::adapters::fhir::FhirClient;
use crate::adapters::llm::ChatCompletionClient;
use crate::config::load_config;
use crate::core::summary::SummaryCoordinator;
use crate::domain::{PatientId, Result, SummaryError};
use std::sync::Arc;

/// Load configuration and wire the HTTP clients into a coordinator.
///
/// The LLM API key is checked only when `generates_text` is set.
pub(crate) fn build_coordinator(
    config_path: &str,
    generates_text: bool,
) -> Result<SummaryCoordinator> {
    let config = load_config(config_path)?;
    if generates_text {
        config
            .llm
            .require_api_key()
            .map_err(SummaryError::Configuration)?;
    }
    let fhir = Arc::new(FhirClient::new(&config.fhir)?);
    let llm = Arc::new(ChatCompletionClient::new(&config.llm)?);

    tracing::debug!(
        fhir_server = %config.fhir.base_url,
        model = %config.llm.model,
        "Coordinator ready"
    );

    Ok(SummaryCoordinator::new(config, fhir, llm))
}

/// Parse a patient id argument, printing the problem on failure
pub(crate) fn parse_patient_id(raw: &str) -> std::result::Result<PatientId, i32> {
    PatientId::new(raw).map_err(|e| {
        eprintln!("❌ Invalid patient id: {e}");
        2
    })
}
