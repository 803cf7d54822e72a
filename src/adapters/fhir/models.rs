//! FHIR REST wire models
//!
//! Only the Bundle envelope is typed. Resources stay as raw JSON values and
//! are interpreted by the extractors.

use serde::Deserialize;
use serde_json::Value;

/// Search result Bundle (`type = searchset`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Bundle {
    #[serde(default, rename = "resourceType")]
    pub resource_type: Option<String>,

    #[serde(default)]
    pub total: Option<u64>,

    #[serde(default)]
    pub entry: Option<Vec<BundleEntry>>,
}

/// One Bundle entry; search entries normally carry a resource
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BundleEntry {
    #[serde(default, rename = "fullUrl")]
    pub full_url: Option<String>,

    #[serde(default)]
    pub resource: Option<Value>,
}

impl Bundle {
    /// Entry resources in Bundle order; entries without a resource are skipped
    pub fn into_resources(self) -> Vec<Value> {
        self.entry
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| entry.resource)
            .filter(|resource| !resource.is_null())
            .collect()
    }
}
