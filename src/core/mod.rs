//! Core business logic.
//!
//! # Modules
//!
//! - [`extract`] - Flattening of FHIR resources into canonical records
//! - [`table`] - Projection of records into a table and its text grid
//! - [`prompt`] - Section and final prompt assembly
//! - [`summary`] - Orchestration of fetch, prompting and generation
//!
//! Everything except [`summary`] is synchronous and free of I/O: the same raw
//! resources and extraction context always produce the same prompt text.

pub mod extract;
pub mod prompt;
pub mod summary;
pub mod table;
