//! Summary payloads returned to callers

use crate::core::extract::ExtractedRecord;
use crate::domain::{PatientId, ResourceType, Section};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Complete clinical summary for one patient
#[derive(Debug, Clone, Serialize)]
pub struct PatientSummary {
    pub patient_id: PatientId,

    pub generated_at: DateTime<Utc>,

    /// Synthesized narrative
    pub summary: String,

    /// Per-section summaries; `None` where the section call failed
    pub sections: SectionSummaries,

    pub data_availability: DataAvailability,

    pub processing_time_ms: u64,

    /// Identifier of the model that produced the text
    pub model: String,
}

impl PatientSummary {
    /// Plain-text rendering for terminals
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "Patient: {}\nGenerated: {}\nModel: {}\nProcessing time: {} ms\n\n{}\n",
            self.patient_id,
            self.generated_at.to_rfc3339(),
            self.model,
            self.processing_time_ms,
            self.summary.trim_end()
        );

        let missing: Vec<&str> = ResourceType::ALL
            .into_iter()
            .filter(|t| !self.data_availability.get(*t))
            .map(|t| t.as_str())
            .collect();
        if !missing.is_empty() {
            out.push_str(&format!("\nNo data: {}\n", missing.join(", ")));
        }
        out
    }
}

/// Section summary texts keyed by section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionSummaries {
    pub demographics: Option<String>,
    pub conditions: Option<String>,
    pub medications: Option<String>,
    pub observations: Option<String>,
    pub allergies: Option<String>,
}

impl SectionSummaries {
    fn slot(&mut self, section: Section) -> &mut Option<String> {
        match section {
            Section::Demographics => &mut self.demographics,
            Section::Conditions => &mut self.conditions,
            Section::Medications => &mut self.medications,
            Section::Observations => &mut self.observations,
            Section::Allergies => &mut self.allergies,
        }
    }

    pub fn get(&self, section: Section) -> Option<&str> {
        match section {
            Section::Demographics => self.demographics.as_deref(),
            Section::Conditions => self.conditions.as_deref(),
            Section::Medications => self.medications.as_deref(),
            Section::Observations => self.observations.as_deref(),
            Section::Allergies => self.allergies.as_deref(),
        }
    }

    pub fn set(&mut self, section: Section, text: impl Into<String>) {
        *self.slot(section) = Some(text.into());
    }

    /// Number of sections with a summary
    pub fn present(&self) -> usize {
        Section::ALL.into_iter().filter(|s| self.get(*s).is_some()).count()
    }
}

/// Whether each resource type yielded at least one record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DataAvailability {
    pub patient: bool,
    pub condition: bool,
    pub medication_request: bool,
    pub observation: bool,
    pub allergy_intolerance: bool,
}

impl DataAvailability {
    pub fn get(&self, resource_type: ResourceType) -> bool {
        match resource_type {
            ResourceType::Patient => self.patient,
            ResourceType::Condition => self.condition,
            ResourceType::MedicationRequest => self.medication_request,
            ResourceType::Observation => self.observation,
            ResourceType::AllergyIntolerance => self.allergy_intolerance,
        }
    }

    pub fn set(&mut self, resource_type: ResourceType, available: bool) {
        let flag = match resource_type {
            ResourceType::Patient => &mut self.patient,
            ResourceType::Condition => &mut self.condition,
            ResourceType::MedicationRequest => &mut self.medication_request,
            ResourceType::Observation => &mut self.observation,
            ResourceType::AllergyIntolerance => &mut self.allergy_intolerance,
        };
        *flag = available;
    }
}

/// Extracted records of one resource type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceData {
    /// Raw resources returned by the server
    pub count: usize,
    pub data: Vec<ExtractedRecord>,
}

/// Diagnostic view of everything fetched for a patient, keyed by FHIR type name
pub type ResourceInspection = BTreeMap<ResourceType, ResourceData>;
