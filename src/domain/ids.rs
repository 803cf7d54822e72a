//! Domain identifier types with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a FHIR logical id
const MAX_ID_LEN: usize = 64;

/// FHIR Patient logical id
///
/// FHIR ids are 1-64 characters drawn from `A-Z a-z 0-9 - .`.
///
/// # Examples
///
/// ```
/// use clinical_summary::domain::ids::PatientId;
/// use std::str::FromStr;
///
/// let id = PatientId::from_str("example-123").unwrap();
/// assert_eq!(id.as_str(), "example-123");
/// assert!(PatientId::from_str("not/valid").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(String);

impl PatientId {
    /// Creates a new PatientId, validating the FHIR id format
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err("Patient ID cannot be empty".to_string());
        }
        if trimmed.len() > MAX_ID_LEN {
            return Err(format!(
                "Patient ID cannot be longer than {MAX_ID_LEN} characters"
            ));
        }
        if let Some(c) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '.'))
        {
            return Err(format!("Patient ID contains invalid character '{c}'"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PatientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
