//! Configuration schema types
//!
//! Root [`SummaryConfig`] maps one-to-one onto the TOML file. Every section
//! validates itself; [`SummaryConfig::validate`] runs them all.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Runtime environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: Environment,

    /// FHIR server connection
    pub fhir: FhirConfig,

    /// Chat-completion API settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SummaryConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.fhir.validate(&self.environment)?;
        self.llm.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// FHIR R4 server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FhirConfig {
    /// Base URL of the FHIR server (e.g. `http://hapi.fhir.org/baseR4`)
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_fhir_timeout_seconds")]
    pub timeout_seconds: u64,

    /// `_count` sent with every search
    #[serde(default = "default_search_count")]
    pub search_count: u32,

    /// TLS certificate verification enabled
    ///
    /// **SECURITY WARNING**: only disable against development servers with
    /// self-signed certificates. Rejected in production.
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl FhirConfig {
    fn validate(&self, environment: &Environment) -> Result<(), String> {
        validate_http_url("fhir.base_url", &self.base_url)?;

        if self.timeout_seconds == 0 {
            return Err("fhir.timeout_seconds must be > 0".to_string());
        }

        if self.search_count == 0 || self.search_count > 1000 {
            return Err("fhir.search_count must be between 1 and 1000".to_string());
        }

        if *environment == Environment::Production && !self.tls_verify {
            return Err(
                "TLS certificate verification cannot be disabled in production environments. \
                Set 'tls_verify = true' or use environment = \"development\"."
                    .to_string(),
            );
        }

        Ok(())
    }
}

impl Default for FhirConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/fhir".to_string(),
            timeout_seconds: default_fhir_timeout_seconds(),
            search_count: default_search_count(),
            tls_verify: true,
        }
    }
}

/// OpenAI-compatible chat-completion API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API base URL; requests go to `{base_url}/chat/completions`
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,

    /// Bearer API key
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Output cap for the final narrative
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Output cap for each section summary
    #[serde(default = "default_section_max_tokens")]
    pub section_max_tokens: u32,

    /// Request timeout in seconds
    #[serde(default = "default_llm_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl LlmConfig {
    /// Check that a non-empty API key is configured.
    ///
    /// Not part of [`validate`](Self::validate): only text generation needs the key.
    pub fn require_api_key(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        match &self.api_key {
            Some(key) if !key.expose_secret().is_empty() => Ok(()),
            _ => Err("llm.api_key cannot be empty".to_string()),
        }
    }

    fn validate(&self) -> Result<(), String> {
        validate_http_url("llm.base_url", &self.base_url)?;

        if self.model.trim().is_empty() {
            return Err("llm.model cannot be empty".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("llm.temperature must be between 0.0 and 2.0".to_string());
        }

        if self.max_tokens == 0 || self.section_max_tokens == 0 {
            return Err("llm.max_tokens and llm.section_max_tokens must be > 0".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("llm.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_llm_base_url(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            section_max_tokens: default_section_max_tokens(),
            timeout_seconds: default_llm_timeout_seconds(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{field} cannot be empty"));
    }

    let parsed = url::Url::parse(value).map_err(|e| format!("{field} is not a valid URL: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("{field} must start with http:// or https://"));
    }
    Ok(())
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_fhir_timeout_seconds() -> u64 {
    30
}

fn default_search_count() -> u32 {
    100
}

fn default_llm_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_section_max_tokens() -> u32 {
    500
}

fn default_llm_timeout_seconds() -> u64 {
    120
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
