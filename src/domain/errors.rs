//! Domain error types
//!
//! Errors are split by the collaborator that produced them. Extraction and
//! prompt assembly never fail, so only the fetch phase, the not-found check
//! and text generation appear here. Third-party error types are converted to
//! strings at the adapter boundary.

use thiserror::Error;

/// Main error type for summary generation
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input validation errors (e.g. malformed patient id)
    #[error("Validation error: {0}")]
    Validation(String),

    /// FHIR server errors
    #[error("FHIR error: {0}")]
    Fhir(#[from] FhirError),

    /// Text generation errors
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// No Patient resource exists for the requested id
    #[error("Patient {0} not found in FHIR server")]
    PatientNotFound(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl SummaryError {
    /// Returns true when the caller asked for a patient that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, SummaryError::PatientNotFound(_))
    }

    /// Process exit code used by the CLI for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SummaryError::Configuration(_) | SummaryError::Validation(_) => 2,
            SummaryError::PatientNotFound(_) => 3,
            SummaryError::Fhir(e) if e.is_transport() => 4,
            SummaryError::Llm(LlmError::ConnectionFailed(_)) => 4,
            _ => 5,
        }
    }
}

/// FHIR server errors
///
/// Transport-class variants ([`FhirError::ConnectionFailed`], [`FhirError::Timeout`])
/// mean the request never produced an HTTP response.
#[derive(Debug, Error)]
pub enum FhirError {
    /// Failed to connect to the FHIR server
    #[error("Failed to connect to FHIR server: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

impl FhirError {
    /// Whether the failure happened below HTTP (no response was received)
    pub fn is_transport(&self) -> bool {
        matches!(self, FhirError::ConnectionFailed(_) | FhirError::Timeout(_))
    }

    /// Build a status error from an HTTP status code and response body
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status >= 500 {
            FhirError::ServerError { status, message }
        } else {
            FhirError::ClientError { status, message }
        }
    }
}

/// Chat-completion API errors
#[derive(Debug, Error)]
pub enum LlmError {
    /// Failed to reach the API
    #[error("Failed to connect to LLM API: {0}")]
    ConnectionFailed(String),

    /// API returned a non-success status
    #[error("LLM API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Invalid response from LLM API: {0}")]
    InvalidResponse(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for SummaryError {
    fn from(err: std::io::Error) -> Self {
        SummaryError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SummaryError {
    fn from(err: serde_json::Error) -> Self {
        SummaryError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SummaryError {
    fn from(err: toml::de::Error) -> Self {
        SummaryError::Configuration(format!("TOML parse error: {err}"))
    }
}
