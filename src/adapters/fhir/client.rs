//! reqwest-based FHIR REST client

use super::models::Bundle;
use super::FhirSource;
use crate::config::FhirConfig;
use crate::domain::{FhirError, PatientId, ResourceType, Result, SummaryError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// FHIR media type sent in `Accept`
pub const FHIR_JSON: &str = "application/fhir+json";

/// FHIR R4 REST client
///
/// # Example
///
/// ```no_run
/// use clinical_summary::adapters::fhir::{FhirClient, FhirSource};
/// use clinical_summary::config::FhirConfig;
/// use clinical_summary::domain::PatientId;
///
/// # async fn example() -> clinical_summary::domain::Result<()> {
/// let config = FhirConfig {
///     base_url: "http://hapi.fhir.org/baseR4".to_string(),
///     ..Default::default()
/// };
/// let client = FhirClient::new(&config)?;
///
/// let patient = client.read_patient(&PatientId::new("example").unwrap()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FhirClient {
    base_url: String,
    search_count: u32,
    client: Client,
}

impl FhirClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &FhirConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds.min(30)));

        if !config.tls_verify {
            tracing::warn!(
                base_url = %config.base_url,
                "TLS certificate verification disabled for FHIR server"
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(|e| {
            SummaryError::Configuration(format!("Failed to build FHIR HTTP client: {e}"))
        })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            search_count: config.search_count,
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> std::result::Result<Response, FhirError> {
        request
            .header(reqwest::header::ACCEPT, FHIR_JSON)
            .send()
            .await
            .map_err(map_transport_error)
    }
}

fn map_transport_error(err: reqwest::Error) -> FhirError {
    if err.is_timeout() {
        FhirError::Timeout(err.to_string())
    } else {
        FhirError::ConnectionFailed(err.to_string())
    }
}

async fn status_error(resp: Response) -> FhirError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    FhirError::from_status(status, body)
}

#[async_trait]
impl FhirSource for FhirClient {
    async fn read_patient(
        &self,
        patient_id: &PatientId,
    ) -> std::result::Result<Option<Value>, FhirError> {
        let url = self.url(&format!("Patient/{patient_id}"));
        tracing::debug!(url = %url, patient_id = %patient_id, "Reading Patient");

        let resp = self.send(self.client.get(&url)).await?;

        match resp.status() {
            StatusCode::NOT_FOUND | StatusCode::GONE => Ok(None),
            status if status.is_success() => {
                let patient: Value = resp
                    .json()
                    .await
                    .map_err(|e| FhirError::InvalidResponse(e.to_string()))?;
                if patient.as_object().map_or(true, |fields| fields.is_empty()) {
                    tracing::debug!(patient_id = %patient_id, "Patient read returned an empty body");
                    return Ok(None);
                }
                Ok(Some(patient))
            }
            _ => Err(status_error(resp).await),
        }
    }

    async fn search(
        &self,
        resource_type: ResourceType,
        patient_id: &PatientId,
    ) -> std::result::Result<Vec<Value>, FhirError> {
        let url = self.url(resource_type.as_str());
        let count = self.search_count.to_string();
        tracing::debug!(
            url = %url,
            resource_type = %resource_type,
            patient_id = %patient_id,
            "Searching resources"
        );

        let request = self.client.get(&url).query(&[
            ("patient", patient_id.as_str()),
            ("_count", count.as_str()),
            ("_format", "json"),
        ]);
        let resp = self.send(request).await?;

        if !resp.status().is_success() {
            return Err(status_error(resp).await);
        }

        let bundle: Bundle = resp
            .json()
            .await
            .map_err(|e| FhirError::InvalidResponse(e.to_string()))?;
        let resources = bundle.into_resources();

        tracing::debug!(
            resource_type = %resource_type,
            count = resources.len(),
            "Search returned resources"
        );
        Ok(resources)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
