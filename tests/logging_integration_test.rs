//! Integration tests for logging functionality
//!
//! A global subscriber can be installed once per process, so only one test
//! here calls `init_logging` successfully.

use clinical_summary::config::LoggingConfig;
use clinical_summary::domain::{FhirError, ResourceType};
use clinical_summary::logging::init_logging;
use clinical_summary::{log_fetch_degraded, log_summary_complete};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "./logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_init_logging_creates_log_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };
    assert!(!log_path.exists());

    let guard = init_logging("debug", &config).unwrap();
    assert!(log_path.is_dir());

    log_fetch_degraded!(
        ResourceType::Observation,
        FhirError::from_status(500, "boom")
    );
    log_summary_complete!("p1", 5, Duration::from_millis(1200));
    drop(guard);

    // A second install in the same process is rejected, not a panic
    assert!(init_logging("info", &LoggingConfig::default()).is_err());
}
