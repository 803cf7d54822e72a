//! AllergyIntolerance records

use super::choice::ChoiceField;
use super::concept::codeable_concept_text;
use super::record::ExtractedRecord;
use super::value::{array, at, text};
use super::ExtractContext;
use serde_json::Value;

pub const COLUMNS: &[&str] = &[
    "allergy_id",
    "allergen",
    "clinical_status",
    "verification_status",
    "type",
    "category",
    "criticality",
    "onset_date",
    "reaction",
    "reaction_severity",
];

pub fn extract(resource: &Value, _ctx: &ExtractContext) -> ExtractedRecord {
    ExtractedRecord::from_pairs([
        ("allergy_id", text(at!(resource, "id")).into()),
        ("allergen", codeable_concept_text(at!(resource, "code")).into()),
        (
            "clinical_status",
            codeable_concept_text(at!(resource, "clinicalStatus")).into(),
        ),
        (
            "verification_status",
            codeable_concept_text(at!(resource, "verificationStatus")).into(),
        ),
        ("type", text(at!(resource, "type")).into()),
        ("category", categories(resource).into()),
        ("criticality", text(at!(resource, "criticality")).into()),
        (
            "onset_date",
            ChoiceField::ONSET.resolve(resource).to_date_text().into(),
        ),
        ("reaction", manifestations(resource).into()),
        (
            "reaction_severity",
            text(at!(resource, "reaction", 0, "severity")).into(),
        ),
    ])
}

/// Category codes (food, medication, environment, biologic)
fn categories(resource: &Value) -> String {
    array(at!(resource, "category"))
        .iter()
        .map(|c| text(Some(c)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Manifestations of the first reaction
fn manifestations(resource: &Value) -> String {
    array(at!(resource, "reaction", 0, "manifestation"))
        .iter()
        .map(|m| codeable_concept_text(Some(m)))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
