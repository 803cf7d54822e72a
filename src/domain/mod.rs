//! Domain models and types.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`PatientId`])
//! - **Closed vocabularies** ([`ResourceType`], [`Section`])
//! - **Error types** ([`SummaryError`], [`FhirError`], [`LlmError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, SummaryError>`]:
//!
//! ```rust
//! use clinical_summary::domain::{PatientId, Result, SummaryError};
//!
//! fn parse(id: &str) -> Result<PatientId> {
//!     PatientId::new(id).map_err(SummaryError::Validation)
//! }
//! # assert!(parse("abc").is_ok());
//! ```

pub mod errors;
pub mod ids;
pub mod result;
pub mod section;

// Re-export commonly used types for convenience
pub use errors::{FhirError, LlmError, SummaryError};
pub use ids::PatientId;
pub use result::Result;
pub use section::{ResourceType, Section};
