//! External system integrations.
//!
//! - [`fhir`] - FHIR R4 server (resource reads and searches)
//! - [`llm`] - Chat-completion API (text generation)
//!
//! # Design Pattern
//!
//! Each adapter exposes a trait ([`fhir::FhirSource`], [`llm::TextGenerator`])
//! and one reqwest implementation. The summary pipeline holds them as
//! `Arc<dyn Trait>`, so tests substitute in-memory fakes.
//!
//! ```rust,no_run
//! use clinical_summary::adapters::fhir::FhirClient;
//! use clinical_summary::adapters::llm::ChatCompletionClient;
//! use clinical_summary::config::load_config;
//!
//! # fn example() -> clinical_summary::domain::Result<()> {
//! let config = load_config("clinical-summary.toml")?;
//! let fhir = FhirClient::new(&config.fhir)?;
//! let llm = ChatCompletionClient::new(&config.llm)?;
//! # Ok(())
//! # }
//! ```

pub mod fhir;
pub mod llm;
