//! MedicationRequest (prescription) records

use super::concept::{codeable_concept_text, reference_text};
use super::record::ExtractedRecord;
use super::value::{at, is_truthy, text};
use super::ExtractContext;
use serde_json::Value;

pub const COLUMNS: &[&str] = &[
    "medication_id",
    "medication_name",
    "status",
    "intent",
    "dosage_text",
    "dose_value",
    "dose_unit",
    "frequency",
    "route",
    "prescribed_date",
    "reason",
];

/// Fields taken from the first dosage instruction
#[derive(Debug, Default, PartialEq)]
struct Dosage {
    text: String,
    dose_value: String,
    dose_unit: String,
    frequency: String,
    route: String,
}

pub fn extract(resource: &Value, _ctx: &ExtractContext) -> ExtractedRecord {
    let dosage = dosage(resource);

    ExtractedRecord::from_pairs([
        ("medication_id", text(at!(resource, "id")).into()),
        ("medication_name", medication_name(resource).into()),
        ("status", text(at!(resource, "status")).into()),
        ("intent", text(at!(resource, "intent")).into()),
        ("dosage_text", dosage.text.into()),
        ("dose_value", dosage.dose_value.into()),
        ("dose_unit", dosage.dose_unit.into()),
        ("frequency", dosage.frequency.into()),
        ("route", dosage.route.into()),
        ("prescribed_date", text(at!(resource, "authoredOn")).into()),
        (
            "reason",
            codeable_concept_text(at!(resource, "reasonCode", 0)).into(),
        ),
    ])
}

fn medication_name(resource: &Value) -> String {
    if let Some(concept) = at!(resource, "medicationCodeableConcept") {
        return codeable_concept_text(Some(concept));
    }
    reference_text(at!(resource, "medicationReference"))
}

fn dosage(resource: &Value) -> Dosage {
    let Some(instruction) = at!(resource, "dosageInstruction", 0) else {
        return Dosage::default();
    };

    let dose = at!(instruction, "doseAndRate", 0, "doseQuantity");
    Dosage {
        text: text(at!(instruction, "text")),
        dose_value: dose.map(|q| text(at!(q, "value"))).unwrap_or_default(),
        dose_unit: dose.map(|q| text(at!(q, "unit"))).unwrap_or_default(),
        frequency: frequency(at!(instruction, "timing")),
        route: codeable_concept_text(at!(instruction, "route")),
    }
}

/// Coded timing display, else `"{frequency}x per {period} {periodUnit}"` when all three are set
fn frequency(timing: Option<&Value>) -> String {
    let Some(timing) = timing else {
        return String::new();
    };

    let coded = codeable_concept_text(at!(timing, "code"));
    if !coded.is_empty() {
        return coded;
    }

    let count = at!(timing, "repeat", "frequency");
    let period = at!(timing, "repeat", "period");
    let unit = at!(timing, "repeat", "periodUnit");
    if is_truthy(count) && is_truthy(period) && is_truthy(unit) {
        return format!("{}x per {} {}", text(count), text(period), text(unit));
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extract::record::FieldValue;
    use serde_json::json;
    use test_case::test_case;

    fn field(record: &ExtractedRecord, column: &str) -> String {
        record.get(column).map(ToString::to_string).unwrap_or_default()
    }

    #[test]
    fn test_extract_medication_request() {
        let request = json!({
            "resourceType": "MedicationRequest",
            "id": "m1",
            "status": "active",
            "intent": "order",
            "medicationCodeableConcept": {"coding": [{"code": "860975", "display": "Metformin 500 MG"}]},
            "authoredOn": "2023-02-01",
            "reasonCode": [{"text": "Diabetes"}],
            "dosageInstruction": [
                {
                    "text": "Take 1 tablet twice daily",
                    "doseAndRate": [{"doseQuantity": {"value": 500, "unit": "mg"}}],
                    "timing": {"repeat": {"frequency": 2, "period": 1, "periodUnit": "d"}},
                    "route": {"coding": [{"display": "Oral"}]}
                },
                {"text": "ignored second instruction"}
            ]
        });

        let record = extract(&request, &ExtractContext::default());

        assert_eq!(record.columns().collect::<Vec<_>>(), COLUMNS);
        assert_eq!(field(&record, "medication_name"), "Metformin 500 MG");
        assert_eq!(field(&record, "dosage_text"), "Take 1 tablet twice daily");
        assert_eq!(field(&record, "dose_value"), "500");
        assert_eq!(field(&record, "dose_unit"), "mg");
        assert_eq!(field(&record, "frequency"), "2x per 1 d");
        assert_eq!(field(&record, "route"), "Oral");
        assert_eq!(field(&record, "prescribed_date"), "2023-02-01");
        assert_eq!(field(&record, "reason"), "Diabetes");
    }

    #[test]
    fn test_medication_reference() {
        let with_display = json!({"medicationReference": {"reference": "Medication/9", "display": "Lisinopril"}});
        let bare = json!({"medicationReference": {"reference": "Medication/9"}});
        let ctx = ExtractContext::default();
        assert_eq!(field(&extract(&with_display, &ctx), "medication_name"), "Lisinopril");
        assert_eq!(field(&extract(&bare, &ctx), "medication_name"), "Medication/9");
    }

    #[test_case(json!({"code": {"text": "BID"}, "repeat": {"frequency": 2, "period": 1, "periodUnit": "d"}}), "BID" ; "coded timing wins")]
    #[test_case(json!({"repeat": {"frequency": 3, "period": 1}}), "" ; "missing period unit")]
    #[test_case(json!({"repeat": {"frequency": 1}}), "" ; "missing period")]
    #[test_case(json!({"repeat": {"frequency": 0, "period": 1, "periodUnit": "d"}}), "" ; "zero frequency")]
    #[test_case(json!({"repeat": {"frequency": 3, "period": 1, "periodUnit": "d"}}), "3x per 1 d" ; "structured repeat")]
    #[test_case(json!({}), "" ; "empty timing")]
    fn test_frequency(timing: Value, expected: &str) {
        assert_eq!(frequency(Some(&timing)), expected);
    }

    #[test]
    fn test_no_dosage_instruction() {
        let record = extract(&json!({"id": "m2"}), &ExtractContext::default());
        assert_eq!(record.len(), COLUMNS.len());
        for column in ["dosage_text", "dose_value", "dose_unit", "frequency", "route"] {
            assert_eq!(record.get(column), Some(&FieldValue::from("")));
        }
    }
}
