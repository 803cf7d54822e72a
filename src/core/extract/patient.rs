//! Patient demographics

use super::concept::codeable_concept_text;
use super::record::{ExtractedRecord, FieldValue};
use super::value::{array, at, is_truthy, non_empty_str, text};
use super::ExtractContext;
use chrono::{Datelike, NaiveDate};
use serde_json::Value;

pub const COLUMNS: &[&str] = &[
    "patient_id",
    "full_name",
    "birth_date",
    "age",
    "gender",
    "address",
    "phone",
    "email",
    "language",
    "marital_status",
];

pub fn extract(resource: &Value, ctx: &ExtractContext) -> ExtractedRecord {
    let birth_date = at!(resource, "birthDate").and_then(Value::as_str);

    ExtractedRecord::from_pairs([
        ("patient_id", text(at!(resource, "id")).into()),
        ("full_name", full_name(resource).into()),
        ("birth_date", birth_date.unwrap_or_default().into()),
        (
            "age",
            birth_date.and_then(|b| age_on(b, ctx.today())).into(),
        ),
        ("gender", text(at!(resource, "gender")).into()),
        ("address", address(resource).into()),
        ("phone", telecom(resource, "phone").into()),
        ("email", telecom(resource, "email").into()),
        ("language", language(resource).into()),
        (
            "marital_status",
            codeable_concept_text(at!(resource, "maritalStatus")).into(),
        ),
    ])
}

/// Whole years between an ISO calendar birth date and `today`.
///
/// Anything other than a strict `YYYY-MM-DD` calendar date yields `None`.
///
/// ```
/// use chrono::NaiveDate;
/// use clinical_summary::core::extract::patient::age_on;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
/// assert_eq!(age_on("1990-06-15", today), Some(33));
/// ```
pub fn age_on(birth_date: &str, today: NaiveDate) -> Option<i64> {
    if !is_iso_date(birth_date) {
        return None;
    }
    let birth = NaiveDate::parse_from_str(birth_date, "%Y-%m-%d").ok()?;
    let mut age = i64::from(today.year() - birth.year());
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Some(age)
}

/// `YYYY-MM-DD` with zero-padded fields and nothing around it
fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Official name if any, else the first; given names then family
fn full_name(resource: &Value) -> String {
    let names = array(at!(resource, "name"));
    let Some(name) = names
        .iter()
        .find(|n| at!(n, "use").and_then(Value::as_str) == Some("official"))
        .or_else(|| names.first())
    else {
        return String::new();
    };

    let given = array(at!(name, "given"))
        .iter()
        .map(|g| text(Some(g)))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{given} {}", text(at!(name, "family")))
        .trim()
        .to_string()
}

fn address(resource: &Value) -> String {
    let Some(addr) = at!(resource, "address", 0) else {
        return String::new();
    };

    let mut parts: Vec<String> = Vec::new();
    if is_truthy(at!(addr, "line")) {
        parts.extend(array(at!(addr, "line")).iter().map(|l| text(Some(l))));
    }
    for key in ["city", "state", "postalCode", "country"] {
        if let Some(part) = non_empty_str(at!(addr, key)) {
            parts.push(part.to_string());
        }
    }
    parts.join(", ")
}

/// Value of the first telecom entry with the given `system`
fn telecom(resource: &Value, system: &str) -> String {
    array(at!(resource, "telecom"))
        .iter()
        .find(|t| at!(t, "system").and_then(Value::as_str) == Some(system))
        .map(|t| text(at!(t, "value")))
        .unwrap_or_default()
}

/// Preferred communication language if flagged, else the first entry's
fn language(resource: &Value) -> String {
    let communications = array(at!(resource, "communication"));
    communications
        .iter()
        .find(|c| is_truthy(at!(c, "preferred")))
        .or_else(|| communications.first())
        .map(|c| codeable_concept_text(at!(c, "language")))
        .unwrap_or_default()
}
