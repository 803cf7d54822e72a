//! Condition (problem list) records

use super::choice::ChoiceField;
use super::concept::codeable_concept_text;
use super::record::ExtractedRecord;
use super::value::{at, text};
use super::ExtractContext;
use serde_json::Value;

pub const COLUMNS: &[&str] = &[
    "condition_id",
    "condition_name",
    "clinical_status",
    "verification_status",
    "severity",
    "category",
    "onset_date",
    "abatement_date",
    "recorded_date",
];

pub fn extract(resource: &Value, _ctx: &ExtractContext) -> ExtractedRecord {
    ExtractedRecord::from_pairs([
        ("condition_id", text(at!(resource, "id")).into()),
        (
            "condition_name",
            codeable_concept_text(at!(resource, "code")).into(),
        ),
        (
            "clinical_status",
            codeable_concept_text(at!(resource, "clinicalStatus")).into(),
        ),
        (
            "verification_status",
            codeable_concept_text(at!(resource, "verificationStatus")).into(),
        ),
        (
            "severity",
            codeable_concept_text(at!(resource, "severity")).into(),
        ),
        (
            "category",
            codeable_concept_text(at!(resource, "category", 0)).into(),
        ),
        (
            "onset_date",
            ChoiceField::ONSET.resolve(resource).to_date_text().into(),
        ),
        (
            "abatement_date",
            ChoiceField::ABATEMENT.resolve(resource).to_date_text().into(),
        ),
        ("recorded_date", text(at!(resource, "recordedDate")).into()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extract::record::FieldValue;
    use serde_json::json;

    #[test]
    fn test_extract_condition() {
        let condition = json!({
            "resourceType": "Condition",
            "id": "c1",
            "code": {"coding": [{"system": "http://snomed.info/sct", "code": "44054006", "display": "Type 2 diabetes mellitus"}]},
            "clinicalStatus": {"coding": [{"code": "active"}]},
            "verificationStatus": {"coding": [{"code": "confirmed", "display": "Confirmed"}]},
            "severity": {"text": "Moderate"},
            "category": [{"coding": [{"code": "problem-list-item", "display": "Problem List Item"}]}],
            "onsetDateTime": "2015-03-01",
            "abatementString": "resolved in 2018",
            "recordedDate": "2015-03-02"
        });

        let record = extract(&condition, &ExtractContext::default());

        assert_eq!(record.columns().collect::<Vec<_>>(), COLUMNS);
        let get = |c: &str| record.get(c).and_then(FieldValue::as_text).unwrap_or("?").to_string();
        assert_eq!(get("condition_name"), "Type 2 diabetes mellitus");
        assert_eq!(get("clinical_status"), "active");
        assert_eq!(get("verification_status"), "Confirmed");
        assert_eq!(get("severity"), "Moderate");
        assert_eq!(get("category"), "Problem List Item");
        assert_eq!(get("onset_date"), "2015-03-01");
        assert_eq!(get("abatement_date"), "resolved in 2018");
        assert_eq!(get("recorded_date"), "2015-03-02");
    }

    #[test]
    fn test_onset_period_start() {
        let condition = json!({"id": "c2", "onsetPeriod": {"start": "2015-03-01"}});
        let record = extract(&condition, &ExtractContext::default());
        assert_eq!(record.get("onset_date"), Some(&FieldValue::from("2015-03-01")));
        assert_eq!(record.get("abatement_date"), Some(&FieldValue::from("")));
    }

    #[test]
    fn test_empty_condition_has_every_column() {
        let record = extract(&json!({}), &ExtractContext::default());
        assert_eq!(record.len(), COLUMNS.len());
        assert!(record.iter().all(|(_, v)| v == &FieldValue::from("")));
    }
}
