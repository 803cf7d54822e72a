//! Clinical sections and the FHIR resource types that feed them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// FHIR resource types fetched for a patient summary
///
/// The set is closed; `ALL` is the canonical fetch and reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceType {
    Patient,
    Condition,
    MedicationRequest,
    Observation,
    AllergyIntolerance,
}

impl ResourceType {
    /// All resource types in canonical order
    pub const ALL: [ResourceType; 5] = [
        ResourceType::Patient,
        ResourceType::Condition,
        ResourceType::MedicationRequest,
        ResourceType::Observation,
        ResourceType::AllergyIntolerance,
    ];

    /// FHIR resource type name as used in REST paths
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Patient => "Patient",
            ResourceType::Condition => "Condition",
            ResourceType::MedicationRequest => "MedicationRequest",
            ResourceType::Observation => "Observation",
            ResourceType::AllergyIntolerance => "AllergyIntolerance",
        }
    }

    /// Clinical section this resource type is summarized under
    pub fn section(&self) -> Section {
        match self {
            ResourceType::Patient => Section::Demographics,
            ResourceType::Condition => Section::Conditions,
            ResourceType::MedicationRequest => Section::Medications,
            ResourceType::Observation => Section::Observations,
            ResourceType::AllergyIntolerance => Section::Allergies,
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unsupported resource type: {s}"))
    }
}

/// Clinical summary sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Demographics,
    Conditions,
    Medications,
    Observations,
    Allergies,
}

impl Section {
    /// Canonical section order used in the final prompt
    pub const ALL: [Section; 5] = [
        Section::Demographics,
        Section::Conditions,
        Section::Medications,
        Section::Observations,
        Section::Allergies,
    ];

    /// Lower-case identifier
    pub fn key(&self) -> &'static str {
        match self {
            Section::Demographics => "demographics",
            Section::Conditions => "conditions",
            Section::Medications => "medications",
            Section::Observations => "observations",
            Section::Allergies => "allergies",
        }
    }

    /// Human-readable heading: underscores become spaces, each word title-cased
    pub fn heading(&self) -> String {
        self.key()
            .split('_')
            .filter(|w| !w.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Resource type whose records feed this section
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Section::Demographics => ResourceType::Patient,
            Section::Conditions => ResourceType::Condition,
            Section::Medications => ResourceType::MedicationRequest,
            Section::Observations => ResourceType::Observation,
            Section::Allergies => ResourceType::AllergyIntolerance,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_round_trip_names() {
        for t in ResourceType::ALL {
            assert_eq!(ResourceType::from_str(t.as_str()).unwrap(), t);
        }
        assert!(ResourceType::from_str("Encounter").is_err());
    }

    #[test]
    fn test_section_mapping_is_inverse() {
        for t in ResourceType::ALL {
            assert_eq!(t.section().resource_type(), t);
        }
    }

    #[test]
    fn test_section_heading() {
        assert_eq!(Section::Demographics.heading(), "Demographics");
        assert_eq!(Section::Allergies.heading(), "Allergies");
    }

    #[test]
    fn test_section_order() {
        assert_eq!(Section::ALL[0], Section::Demographics);
        assert_eq!(Section::ALL[4], Section::Allergies);
    }
}
