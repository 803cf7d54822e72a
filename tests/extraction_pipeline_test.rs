//! Integration tests for extraction, projection and prompt building

use chrono::NaiveDate;
use clinical_summary::core::extract::{ExtractContext, FieldValue};
use clinical_summary::core::prompt::{build_section_prompt, compose_final_prompt, NO_DATA_PLACEHOLDER};
use clinical_summary::core::table::ResourceTable;
use clinical_summary::domain::{ResourceType, Section};
use serde_json::{json, Value};
use std::collections::HashMap;

fn ctx() -> ExtractContext {
    ExtractContext::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
}

fn raw_resources() -> HashMap<ResourceType, Vec<Value>> {
    HashMap::from([
        (
            ResourceType::Patient,
            vec![json!({
                "resourceType": "Patient",
                "id": "p1",
                "name": [{"use": "official", "given": ["John", "Q"], "family": "Public"}],
                "birthDate": "1990-06-15",
                "gender": "male",
                "telecom": [
                    {"system": "email", "value": "john@example.org"},
                    {"system": "phone", "value": "555-0100"}
                ]
            })],
        ),
        (
            ResourceType::Condition,
            vec![json!({
                "resourceType": "Condition",
                "id": "c1",
                "code": {"coding": [{"system": "http://snomed.info/sct", "code": "38341003"}]},
                "clinicalStatus": {"coding": [{"code": "active"}]},
                "onsetPeriod": {"start": "2015-03-01"}
            })],
        ),
        (
            ResourceType::Observation,
            vec![json!({
                "resourceType": "Observation",
                "id": "o1",
                "status": "final",
                "code": {"coding": [{"system": "http://loinc.org", "code": "2345-7", "display": "Glucose"}]},
                "valueQuantity": {"value": 95, "unit": "mg/dL"},
                "effectiveDateTime": "2024-05-01T08:00:00Z",
                "referenceRange": [{"low": {"value": 70, "unit": "mg/dL"}, "high": {"value": 99, "unit": "mg/dL"}}]
            })],
        ),
        (ResourceType::MedicationRequest, Vec::new()),
        (ResourceType::AllergyIntolerance, Vec::new()),
    ])
}

fn build_prompts(raw: &HashMap<ResourceType, Vec<Value>>) -> Vec<String> {
    Section::ALL
        .iter()
        .map(|section| {
            let resource_type = section.resource_type();
            let records = resource_type.extract_all(&raw[&resource_type], &ctx());
            build_section_prompt(*section, &ResourceTable::project(records)).prompt
        })
        .collect()
}

#[test]
fn test_condition_onset_period_end_to_end() {
    let raw = raw_resources();
    let records = ResourceType::Condition.extract_all(&raw[&ResourceType::Condition], &ctx());

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.get("onset_date").unwrap().to_string(), "2015-03-01");
    assert_eq!(record.get("condition_name").unwrap().to_string(), "38341003");
    assert_eq!(record.get("clinical_status").unwrap().to_string(), "active");
    assert_eq!(record.get("abatement_date").unwrap().to_string(), "");
}

#[test]
fn test_patient_end_to_end() {
    let raw = raw_resources();
    let record = ResourceType::Patient.extract(&raw[&ResourceType::Patient][0], &ctx());

    assert_eq!(record.get("full_name").unwrap().to_string(), "John Q Public");
    assert_eq!(record.get("age"), Some(&FieldValue::Integer(34)));
    assert_eq!(record.get("phone").unwrap().to_string(), "555-0100");
    assert_eq!(record.get("email").unwrap().to_string(), "john@example.org");
}

#[test]
fn test_observation_end_to_end() {
    let raw = raw_resources();
    let record = ResourceType::Observation.extract(&raw[&ResourceType::Observation][0], &ctx());

    assert_eq!(record.get("observation_name").unwrap().to_string(), "Glucose");
    assert_eq!(record.get("loinc_code").unwrap().to_string(), "2345-7");
    assert_eq!(record.get("value").unwrap().to_string(), "95");
    assert_eq!(record.get("unit").unwrap().to_string(), "mg/dL");
    assert_eq!(record.get("reference_range").unwrap().to_string(), "70-99 mg/dL");
    assert_eq!(
        record.get("effective_date").unwrap().to_string(),
        "2024-05-01T08:00:00Z"
    );
}

#[test]
fn test_section_prompts_embed_tables_or_placeholder() {
    let prompts = build_prompts(&raw_resources());

    assert!(prompts[0].contains("John Q Public"));
    assert!(prompts[1].contains("2015-03-01"));
    assert!(prompts[2].contains(NO_DATA_PLACEHOLDER));
    assert!(prompts[3].contains("Glucose"));
    assert!(prompts[4].contains(NO_DATA_PLACEHOLDER));
}

#[test]
fn test_prompt_building_is_idempotent() {
    let raw = raw_resources();
    assert_eq!(build_prompts(&raw), build_prompts(&raw));

    let summaries: HashMap<Section, String> = Section::ALL
        .iter()
        .map(|s| (*s, format!("{} summary", s.heading())))
        .collect();
    assert_eq!(compose_final_prompt(&summaries), compose_final_prompt(&summaries));
}

#[test]
fn test_final_prompt_orders_reverse_insertion() {
    let mut summaries = HashMap::new();
    summaries.insert(Section::Allergies, "No known allergies.".to_string());
    summaries.insert(Section::Demographics, "34-year-old male.".to_string());

    let prompt = compose_final_prompt(&summaries);
    let demographics = prompt.find("### Demographics\n34-year-old male.").unwrap();
    let allergies = prompt.find("### Allergies\nNo known allergies.").unwrap();

    assert!(demographics < allergies);
    assert!(!prompt.contains("### Conditions"));
    assert!(prompt.contains("## 6. Clinical Impression"));
}
