// Clinical Summary - FHIR R4 patient summaries generated by a language model
// Copyright (c) 2025 Clinical Summary Contributors
// Licensed under the MIT License

//! # Clinical Summary
//!
//! Generates a clinical narrative for one patient from the FHIR R4 resources a
//! server holds about them, using an OpenAI-compatible chat-completion model.
//!
//! ## Overview
//!
//! This library provides the functionality for:
//! - **Fetching** Patient, Condition, MedicationRequest, Observation and
//!   AllergyIntolerance resources concurrently
//! - **Extracting** each resource into a fixed set of canonical columns
//! - **Projecting** records into text tables embedded in section prompts
//! - **Generating** one summary per clinical section, then a final narrative
//!
//! ## Architecture
//!
//! The crate follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Extraction, tables, prompts and orchestration
//! - [`adapters`] - External integrations (FHIR server, chat-completion API)
//! - [`domain`] - Identifiers, vocabularies and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clinical_summary::adapters::fhir::FhirClient;
//! use clinical_summary::adapters::llm::ChatCompletionClient;
//! use clinical_summary::config::load_config;
//! use clinical_summary::core::summary::SummaryCoordinator;
//! use clinical_summary::domain::PatientId;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("clinical-summary.toml")?;
//!     let fhir = Arc::new(FhirClient::new(&config.fhir)?);
//!     let llm = Arc::new(ChatCompletionClient::new(&config.llm)?);
//!
//!     let coordinator = SummaryCoordinator::new(config, fhir, llm);
//!     let summary = coordinator.generate_summary(&PatientId::new("example")?).await?;
//!
//!     println!("{}", summary.summary);
//!     Ok(())
//! }
//! ```
//!
//! ## Extraction without I/O
//!
//! Extraction, projection and prompt building are pure functions:
//!
//! ```rust
//! use clinical_summary::core::extract::ExtractContext;
//! use clinical_summary::core::prompt::build_section_prompt;
//! use clinical_summary::core::table::ResourceTable;
//! use clinical_summary::domain::{ResourceType, Section};
//! use serde_json::json;
//!
//! let allergy = json!({"code": {"text": "Peanut"}, "criticality": "high"});
//! let records = ResourceType::AllergyIntolerance
//!     .extract_all(&[allergy], &ExtractContext::default());
//! let prompt = build_section_prompt(Section::Allergies, &ResourceTable::project(records));
//!
//! assert!(prompt.prompt.contains("Peanut"));
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`], whose error type is
//! [`domain::SummaryError`]. A fetch failure for one resource type is not an
//! error: the type is reported as unavailable instead.
//!
//! ## Logging
//!
//! Structured logging uses the `tracing` crate; see [`logging::init_logging`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
