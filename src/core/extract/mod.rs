//! FHIR R4 field extraction.
//!
//! Each supported resource type has one extractor that flattens a raw resource
//! into an [`ExtractedRecord`] with a fixed, canonical set of columns.
//! Extraction is total: missing or malformed optional fields become empty
//! strings (or `null` for derived numbers such as a patient's age), never errors.
//!
//! # Example
//!
//! ```rust
//! use clinical_summary::core::extract::ExtractContext;
//! use clinical_summary::domain::ResourceType;
//! use serde_json::json;
//!
//! let condition = json!({
//!     "resourceType": "Condition",
//!     "id": "c1",
//!     "onsetPeriod": {"start": "2015-03-01"}
//! });
//!
//! let record = ResourceType::Condition.extract(&condition, &ExtractContext::default());
//! assert_eq!(record.get("onset_date").unwrap().to_string(), "2015-03-01");
//! ```

pub mod allergy;
pub mod choice;
pub mod concept;
pub mod condition;
pub mod medication_request;
pub mod observation;
pub mod patient;
pub mod record;
pub mod value;

pub use choice::{ChoiceField, ChoiceKind, ChoiceValue};
pub use record::{ExtractedRecord, FieldValue};

use crate::domain::ResourceType;
use chrono::{NaiveDate, Utc};
use serde_json::Value;

/// Inputs to extraction that do not come from the resource itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractContext {
    today: NaiveDate,
}

impl ExtractContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Context for the current UTC date
    pub fn current() -> Self {
        Self::new(Utc::now().date_naive())
    }

    /// Reference date for age calculation
    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

impl Default for ExtractContext {
    fn default() -> Self {
        Self::current()
    }
}

impl ResourceType {
    /// Canonical column order of this type's extracted records
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            ResourceType::Patient => patient::COLUMNS,
            ResourceType::Condition => condition::COLUMNS,
            ResourceType::MedicationRequest => medication_request::COLUMNS,
            ResourceType::Observation => observation::COLUMNS,
            ResourceType::AllergyIntolerance => allergy::COLUMNS,
        }
    }

    /// Flatten one raw resource of this type
    pub fn extract(&self, resource: &Value, ctx: &ExtractContext) -> ExtractedRecord {
        match self {
            ResourceType::Patient => patient::extract(resource, ctx),
            ResourceType::Condition => condition::extract(resource, ctx),
            ResourceType::MedicationRequest => medication_request::extract(resource, ctx),
            ResourceType::Observation => observation::extract(resource, ctx),
            ResourceType::AllergyIntolerance => allergy::extract(resource, ctx),
        }
    }

    /// Flatten every resource in order
    pub fn extract_all(&self, resources: &[Value], ctx: &ExtractContext) -> Vec<ExtractedRecord> {
        resources.iter().map(|r| self.extract(r, ctx)).collect()
    }
}
