//! Observation (labs, vitals) records

use super::choice::ChoiceField;
use super::concept::{codeable_concept_text, format_reference_range};
use super::record::ExtractedRecord;
use super::value::{at, text};
use super::ExtractContext;
use serde_json::Value;

pub const COLUMNS: &[&str] = &[
    "observation_id",
    "observation_name",
    "loinc_code",
    "value",
    "unit",
    "status",
    "category",
    "effective_date",
    "interpretation",
    "reference_range",
];

pub fn extract(resource: &Value, _ctx: &ExtractContext) -> ExtractedRecord {
    let code = at!(resource, "code");

    ExtractedRecord::from_pairs([
        ("observation_id", text(at!(resource, "id")).into()),
        ("observation_name", codeable_concept_text(code).into()),
        (
            "loinc_code",
            code.map(|c| text(at!(c, "coding", 0, "code")))
                .unwrap_or_default()
                .into(),
        ),
        (
            "value",
            ChoiceField::VALUE.resolve(resource).to_value_text().into(),
        ),
        (
            "unit",
            text(at!(resource, "valueQuantity", "unit")).into(),
        ),
        ("status", text(at!(resource, "status")).into()),
        (
            "category",
            codeable_concept_text(at!(resource, "category", 0)).into(),
        ),
        (
            "effective_date",
            ChoiceField::EFFECTIVE.resolve(resource).to_date_text().into(),
        ),
        (
            "interpretation",
            codeable_concept_text(at!(resource, "interpretation", 0)).into(),
        ),
        (
            "reference_range",
            at!(resource, "referenceRange", 0)
                .map(format_reference_range)
                .unwrap_or_default()
                .into(),
        ),
    ])
}
