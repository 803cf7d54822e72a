//! FHIR R4 server adapter
//!
//! [`FhirSource`] is the seam the summary pipeline fetches through;
//! [`FhirClient`] implements it over the FHIR REST API with reqwest.

pub mod client;
pub mod models;

pub use client::FhirClient;
pub use models::{Bundle, BundleEntry};

use crate::domain::{FhirError, PatientId, ResourceType};
use async_trait::async_trait;
use serde_json::Value;

/// Read access to the clinical resources of one patient
#[async_trait]
pub trait FhirSource: Send + Sync {
    /// Read the Patient resource by id; `None` when the server has no such patient
    async fn read_patient(&self, patient_id: &PatientId) -> Result<Option<Value>, FhirError>;

    /// Search resources of `resource_type` that reference the patient
    async fn search(
        &self,
        resource_type: ResourceType,
        patient_id: &PatientId,
    ) -> Result<Vec<Value>, FhirError>;

    /// Fetch every resource of `resource_type` for the patient.
    ///
    /// Patient is a read by id (zero or one record); other types are searches.
    async fn fetch(
        &self,
        resource_type: ResourceType,
        patient_id: &PatientId,
    ) -> Result<Vec<Value>, FhirError> {
        match resource_type {
            ResourceType::Patient => Ok(self.read_patient(patient_id).await?.into_iter().collect()),
            other => self.search(other, patient_id).await,
        }
    }

    /// Server base URL, for logging
    fn base_url(&self) -> &str;
}
