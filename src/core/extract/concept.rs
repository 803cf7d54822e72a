//! Coded concepts, references and quantity ranges

use super::value::{at, is_truthy, non_empty_str, text};
use serde_json::Value;

/// Display text of a CodeableConcept.
///
/// Only the first coding is consulted: its `display`, else its `code`. With
/// no codings the concept's free `text` is used; otherwise `""`.
///
/// ```
/// use clinical_summary::core::extract::concept::codeable_concept_text;
/// use serde_json::json;
///
/// let cc = json!({"coding": [{"code": "44054006"}], "text": "Diabetes"});
/// assert_eq!(codeable_concept_text(Some(&cc)), "44054006");
/// ```
pub fn codeable_concept_text(concept: Option<&Value>) -> String {
    let Some(concept) = concept else {
        return String::new();
    };

    if is_truthy(at!(concept, "coding")) {
        let Some(coding) = at!(concept, "coding", 0) else {
            return String::new();
        };
        return non_empty_str(at!(coding, "display"))
            .map(str::to_string)
            .unwrap_or_else(|| text(at!(coding, "code")));
    }

    text(at!(concept, "text"))
}

/// Display text of a Reference: its `display`, else the literal `reference`
pub fn reference_text(reference: Option<&Value>) -> String {
    let Some(reference) = reference else {
        return String::new();
    };
    match at!(reference, "display") {
        Some(display) => text(Some(display)),
        None => text(at!(reference, "reference")),
    }
}

/// Render a low/high range the way reference ranges read on a lab report.
///
/// `"{low}-{high} {unit}"` with both bounds, `">= {low} {unit}"` or
/// `"<= {high} {unit}"` with one, else the range's free `text`. The unit
/// comes from whichever bound carries one. Surrounding whitespace is trimmed.
///
/// ```
/// use clinical_summary::core::extract::concept::format_reference_range;
/// use serde_json::json;
///
/// let range = json!({"low": {"value": 90, "unit": "mg/dL"}, "high": {"value": 110}});
/// assert_eq!(format_reference_range(&range), "90-110 mg/dL");
/// ```
pub fn format_reference_range(range: &Value) -> String {
    let low = at!(range, "low", "value");
    let high = at!(range, "high", "value");
    let unit = non_empty_str(at!(range, "low", "unit"))
        .or_else(|| non_empty_str(at!(range, "high", "unit")))
        .unwrap_or_default();

    let rendered = match (low, high) {
        (Some(low), Some(high)) => {
            format!("{}-{} {unit}", text(Some(low)), text(Some(high)))
        }
        (Some(low), None) => format!(">= {} {unit}", text(Some(low))),
        (None, Some(high)) => format!("<= {} {unit}", text(Some(high))),
        (None, None) => text(at!(range, "text")),
    };

    rendered.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!({"coding": [{"code": "c1", "display": "Display One"}]}), "Display One" ; "display wins")]
    #[test_case(json!({"coding": [{"code": "c1"}]}), "c1" ; "falls back to code")]
    #[test_case(json!({"coding": [{"code": "c1", "display": ""}]}), "c1" ; "empty display falls back to code")]
    #[test_case(json!({"coding": [{"display": "First"}, {"display": "Second"}]}), "First" ; "first coding only")]
    #[test_case(json!({"text": "Free text"}), "Free text" ; "text without coding")]
    #[test_case(json!({"coding": [], "text": "Free text"}), "Free text" ; "empty coding list uses text")]
    #[test_case(json!({"coding": [{"system": "x"}], "text": "Ignored"}), "" ; "coding present without display or code")]
    #[test_case(json!({}), "" ; "empty concept")]
    #[test_case(json!({"coding": "not-a-list"}), "" ; "malformed coding")]
    fn test_codeable_concept_text(concept: Value, expected: &str) {
        assert_eq!(codeable_concept_text(Some(&concept)), expected);
    }

    #[test]
    fn test_codeable_concept_absent() {
        assert_eq!(codeable_concept_text(None), "");
    }

    #[test]
    fn test_reference_text() {
        assert_eq!(
            reference_text(Some(&json!({"reference": "Medication/1", "display": "Aspirin"}))),
            "Aspirin"
        );
        assert_eq!(
            reference_text(Some(&json!({"reference": "Medication/1"}))),
            "Medication/1"
        );
        assert_eq!(reference_text(None), "");
    }

    #[test_case(json!({"low": {"value": 90, "unit": "mg/dL"}, "high": {"value": 110, "unit": "mg/dL"}}), "90-110 mg/dL" ; "both bounds")]
    #[test_case(json!({"low": {"value": 90, "unit": "mg/dL"}}), ">= 90 mg/dL" ; "low only")]
    #[test_case(json!({"high": {"value": 200, "unit": "mg/dL"}}), "<= 200 mg/dL" ; "high only")]
    #[test_case(json!({"low": {"value": 3.5}, "high": {"value": 5.1, "unit": "mmol/L"}}), "3.5-5.1 mmol/L" ; "unit from high bound")]
    #[test_case(json!({"low": {"value": 0}, "high": {"value": 1}}), "0-1" ; "zero low bound without unit")]
    #[test_case(json!({"text": " negative "}), "negative" ; "text fallback trimmed")]
    #[test_case(json!({}), "" ; "nothing")]
    fn test_format_reference_range(range: Value, expected: &str) {
        assert_eq!(format_reference_range(&range), expected);
    }
}
