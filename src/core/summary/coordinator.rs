//! Summary coordinator - orchestrates fetch, extraction, prompting and generation
//!
//! Fetching runs concurrently per resource type and degrades per type; only a
//! missing Patient or a total transport outage fails the request.

use super::response::{
    DataAvailability, PatientSummary, ResourceData, ResourceInspection, SectionSummaries,
};
use crate::adapters::fhir::FhirSource;
use crate::adapters::llm::{GenerationRequest, TextGenerator};
use crate::config::SummaryConfig;
use crate::core::extract::ExtractContext;
use crate::core::prompt::templates::{FINAL_SYSTEM_PROMPT, SECTION_SYSTEM_PROMPT};
use crate::core::prompt::{build_section_prompt, compose_final_prompt, SectionPrompt};
use crate::core::table::ResourceTable;
use crate::domain::{FhirError, PatientId, ResourceType, Result, Section, SummaryError};
use chrono::Utc;
use futures::future::join_all;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Raw resources per type after the fetch phase
#[derive(Debug, Default)]
struct FetchedResources {
    by_type: BTreeMap<ResourceType, Vec<Value>>,
}

impl FetchedResources {
    fn get(&self, resource_type: ResourceType) -> &[Value] {
        self.by_type
            .get(&resource_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn availability(&self) -> DataAvailability {
        let mut availability = DataAvailability::default();
        for resource_type in ResourceType::ALL {
            availability.set(resource_type, !self.get(resource_type).is_empty());
        }
        availability
    }
}

/// Summary coordinator
pub struct SummaryCoordinator {
    config: SummaryConfig,
    fhir: Arc<dyn FhirSource>,
    llm: Arc<dyn TextGenerator>,
}

impl SummaryCoordinator {
    /// Create a new coordinator over the given collaborators
    pub fn new(
        config: SummaryConfig,
        fhir: Arc<dyn FhirSource>,
        llm: Arc<dyn TextGenerator>,
    ) -> Self {
        Self { config, fhir, llm }
    }

    /// Generate the clinical summary for one patient
    ///
    /// # Errors
    ///
    /// - [`SummaryError::PatientNotFound`] if no Patient record was fetched
    /// - [`SummaryError::Fhir`] if every resource type failed at the transport level
    /// - [`SummaryError::Llm`] if the final narrative could not be generated
    pub async fn generate_summary(&self, patient_id: &PatientId) -> Result<PatientSummary> {
        let span = tracing::info_span!(
            "summary",
            request_id = %Uuid::new_v4(),
            patient_id = %patient_id
        );
        self.run_summary(patient_id).instrument(span).await
    }

    async fn run_summary(&self, patient_id: &PatientId) -> Result<PatientSummary> {
        let start_time = Instant::now();

        tracing::info!(fhir_server = %self.fhir.base_url(), "Starting summary generation");

        let fetched = self.fetch_all(patient_id).await?;
        if fetched.get(ResourceType::Patient).is_empty() {
            return Err(SummaryError::PatientNotFound(patient_id.to_string()));
        }

        let tables = project_all(&fetched, &ExtractContext::current());
        let empty = ResourceTable::default();
        let prompts: Vec<SectionPrompt> = Section::ALL
            .into_iter()
            .map(|section| {
                let table = tables.get(&section.resource_type()).unwrap_or(&empty);
                build_section_prompt(section, table)
            })
            .collect();

        let sections = self.generate_sections(prompts).await;

        let summaries: HashMap<Section, String> = Section::ALL
            .into_iter()
            .filter_map(|s| sections.get(s).map(|text| (s, text.to_string())))
            .collect();
        let final_prompt = compose_final_prompt(&summaries);

        let request = GenerationRequest::new(final_prompt)
            .with_system_prompt(FINAL_SYSTEM_PROMPT)
            .with_max_tokens(self.config.llm.max_tokens)
            .with_temperature(self.config.llm.temperature);
        let summary = self.llm.generate(request).await.map_err(|e| {
            tracing::error!(error = %e, "Final summary generation failed");
            SummaryError::from(e)
        })?;

        let duration = start_time.elapsed();
        crate::log_summary_complete!(patient_id, sections.present(), duration);

        Ok(PatientSummary {
            patient_id: patient_id.clone(),
            generated_at: Utc::now(),
            summary,
            sections,
            data_availability: fetched.availability(),
            processing_time_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            model: self.llm.model().to_string(),
        })
    }

    /// Fetch and extract every resource type without generating text
    ///
    /// Runs the same fetch phase as [`generate_summary`](Self::generate_summary)
    /// but does not require a Patient record.
    pub async fn inspect_resources(&self, patient_id: &PatientId) -> Result<ResourceInspection> {
        let span = tracing::info_span!(
            "inspect",
            request_id = %Uuid::new_v4(),
            patient_id = %patient_id
        );

        self.run_inspection(patient_id).instrument(span).await
    }

    async fn run_inspection(&self, patient_id: &PatientId) -> Result<ResourceInspection> {
        let fetched = self.fetch_all(patient_id).await?;
        let ctx = ExtractContext::current();

        Ok(ResourceType::ALL
            .into_iter()
            .map(|resource_type| {
                let resources = fetched.get(resource_type);
                let data = ResourceData {
                    count: resources.len(),
                    data: resource_type.extract_all(resources, &ctx),
                };
                (resource_type, data)
            })
            .collect())
    }

    /// Fetch all resource types concurrently.
    ///
    /// A failed type is logged and left empty. The phase fails only when every
    /// type failed at the transport level.
    async fn fetch_all(&self, patient_id: &PatientId) -> Result<FetchedResources> {
        let start_time = Instant::now();

        let results = join_all(ResourceType::ALL.into_iter().map(|resource_type| async move {
            (resource_type, self.fhir.fetch(resource_type, patient_id).await)
        }))
        .await;

        let mut fetched = FetchedResources::default();
        let mut transport_failures: Vec<FhirError> = Vec::new();

        for (resource_type, result) in results {
            match result {
                Ok(resources) => {
                    tracing::debug!(
                        resource_type = %resource_type,
                        count = resources.len(),
                        "Fetched resources"
                    );
                    fetched.by_type.insert(resource_type, resources);
                }
                Err(e) => {
                    crate::log_fetch_degraded!(resource_type, &e);
                    if e.is_transport() {
                        transport_failures.push(e);
                    }
                    fetched.by_type.insert(resource_type, Vec::new());
                }
            }
        }

        if transport_failures.len() == ResourceType::ALL.len() {
            if let Some(first) = transport_failures.into_iter().next() {
                tracing::error!(error = %first, "FHIR server unreachable for every resource type");
                return Err(first.into());
            }
        }

        tracing::debug!(
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Fetch phase complete"
        );

        Ok(fetched)
    }

    /// Generate every section summary concurrently; failures leave a gap
    async fn generate_sections(&self, prompts: Vec<SectionPrompt>) -> SectionSummaries {
        let llm = &self.config.llm;

        let results = join_all(prompts.into_iter().map(|SectionPrompt { section, prompt }| {
            let request = GenerationRequest::new(prompt)
                .with_system_prompt(SECTION_SYSTEM_PROMPT)
                .with_max_tokens(llm.section_max_tokens)
                .with_temperature(llm.temperature);
            async move { (section, self.llm.generate(request).await) }
        }))
        .await;

        let mut sections = SectionSummaries::default();
        for (section, result) in results {
            match result {
                Ok(text) => sections.set(section, text),
                Err(e) => {
                    tracing::warn!(
                        section = %section,
                        error = %e,
                        "Section summary generation failed"
                    );
                }
            }
        }
        sections
    }
}

/// Extract and project every fetched resource type
fn project_all(
    fetched: &FetchedResources,
    ctx: &ExtractContext,
) -> BTreeMap<ResourceType, ResourceTable> {
    ResourceType::ALL
        .into_iter()
        .map(|resource_type| {
            let records = resource_type.extract_all(fetched.get(resource_type), ctx);
            (resource_type, ResourceTable::project(records))
        })
        .collect()
}
