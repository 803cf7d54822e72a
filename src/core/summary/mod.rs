//! Patient summary orchestration.
//!
//! [`SummaryCoordinator`] runs the whole pipeline for one patient:
//!
//! 1. **Fetch**: all resource types concurrently through a [`FhirSource`](crate::adapters::fhir::FhirSource)
//! 2. **Check**: a Patient record must exist
//! 3. **Extract and project**: one [`ResourceTable`](crate::core::table::ResourceTable) per type
//! 4. **Section summaries**: one generation call per section, concurrently
//! 5. **Final narrative**: one generation call over the composed sections
//!
//! # Example
//!
//! ```rust,no_run
//! use clinical_summary::adapters::fhir::FhirClient;
//! use clinical_summary::adapters::llm::ChatCompletionClient;
//! use clinical_summary::config::load_config;
//! use clinical_summary::core::summary::SummaryCoordinator;
//! use clinical_summary::domain::PatientId;
//! use std::sync::Arc;
//!
//! # async fn example() -> clinical_summary::domain::Result<()> {
//! let config = load_config("clinical-summary.toml")?;
//! let fhir = Arc::new(FhirClient::new(&config.fhir)?);
//! let llm = Arc::new(ChatCompletionClient::new(&config.llm)?);
//!
//! let coordinator = SummaryCoordinator::new(config, fhir, llm);
//! let summary = coordinator
//!     .generate_summary(&PatientId::new("example").unwrap())
//!     .await?;
//!
//! println!("{}", summary.summary);
//! # Ok(())
//! # }
//! ```

pub mod coordinator;
pub mod response;

pub use coordinator::SummaryCoordinator;
pub use response::{
    DataAvailability, PatientSummary, ResourceData, ResourceInspection, SectionSummaries,
};
