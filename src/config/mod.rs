//! Configuration management.
//!
//! One [`SummaryConfig`] is loaded at start-up and passed explicitly to every
//! component that needs it.
//!
//! # Overview
//!
//! Configuration is a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CLINICAL_SUMMARY_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use clinical_summary::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("clinical-summary.toml")?;
//!
//! println!("FHIR server: {}", config.fhir.base_url);
//! println!("Model: {}", config.llm.model);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`FhirConfig`] - FHIR server connection and search size
//! - [`LlmConfig`] - Chat-completion API, model and token limits
//! - [`LoggingConfig`] - Local log files
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [fhir]
//! base_url = "http://hapi.fhir.org/baseR4"
//! timeout_seconds = 30
//!
//! [llm]
//! api_key = "${OPENAI_API_KEY}"
//! model = "gpt-4o"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, parse_config};
pub use schema::{
    ApplicationConfig, Environment, FhirConfig, LlmConfig, LoggingConfig, SummaryConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
