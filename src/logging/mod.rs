//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output on stderr
//! - Configurable log levels (overridable with `RUST_LOG`)
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use clinical_summary::logging::init_logging;
//! use clinical_summary::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(patient_id = "example", "Summary requested");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a resource type whose fetch failed and was replaced by an empty result
///
/// # Example
///
/// ```no_run
/// use clinical_summary::log_fetch_degraded;
/// use clinical_summary::domain::{FhirError, ResourceType};
///
/// let error = FhirError::from_status(500, "boom");
/// log_fetch_degraded!(ResourceType::Observation, &error);
/// ```
#[macro_export]
macro_rules! log_fetch_degraded {
    ($resource_type:expr, $error:expr) => {
        tracing::warn!(
            resource_type = %$resource_type,
            error = %$error,
            "Fetch failed, continuing without this resource type"
        );
    };
}

/// Log the completion of a patient summary
///
/// # Example
///
/// ```no_run
/// use clinical_summary::log_summary_complete;
/// use std::time::Duration;
///
/// log_summary_complete!("example", 5, Duration::from_millis(4200));
/// ```
#[macro_export]
macro_rules! log_summary_complete {
    ($patient_id:expr, $sections:expr, $duration:expr) => {
        tracing::info!(
            patient_id = %$patient_id,
            sections = $sections,
            duration_ms = $duration.as_millis() as u64,
            "Summary generated"
        );
    };
}
