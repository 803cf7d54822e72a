//! FHIR choice fields (`onset[x]`, `abatement[x]`, `effective[x]`, `value[x]`)
//!
//! A choice field arrives as one of several sibling keys sharing a prefix,
//! e.g. `onsetDateTime` or `onsetPeriod`. [`ChoiceField::resolve`] probes the
//! variants in the field's fixed priority order and returns the first present
//! one as a [`ChoiceValue`]. A variant whose payload has the wrong JSON shape
//! is skipped.

use super::concept::codeable_concept_text;
use super::value::{at, is_truthy, text};
use serde_json::Value;

/// Variant type of a choice field, named by its key suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    DateTime,
    Instant,
    Age,
    Quantity,
    Period,
    Range,
    Ratio,
    CodeableConcept,
    String,
    Boolean,
    Integer,
}

impl ChoiceKind {
    pub fn suffix(&self) -> &'static str {
        match self {
            ChoiceKind::DateTime => "DateTime",
            ChoiceKind::Instant => "Instant",
            ChoiceKind::Age => "Age",
            ChoiceKind::Quantity => "Quantity",
            ChoiceKind::Period => "Period",
            ChoiceKind::Range => "Range",
            ChoiceKind::Ratio => "Ratio",
            ChoiceKind::CodeableConcept => "CodeableConcept",
            ChoiceKind::String => "String",
            ChoiceKind::Boolean => "Boolean",
            ChoiceKind::Integer => "Integer",
        }
    }
}

/// A resolved choice value
#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceValue<'a> {
    DateTime(&'a str),
    Instant(&'a str),
    Age(&'a Value),
    Quantity(&'a Value),
    Period(&'a Value),
    Range(&'a Value),
    Ratio(&'a Value),
    CodeableConcept(&'a Value),
    String(&'a str),
    Boolean(bool),
    Integer(i64),
    Absent,
}

impl<'a> ChoiceValue<'a> {
    /// Interpret a raw payload as `kind`, or `None` if the shape does not fit
    fn parse(kind: ChoiceKind, raw: &'a Value) -> Option<Self> {
        let value = match kind {
            ChoiceKind::DateTime => ChoiceValue::DateTime(raw.as_str()?),
            ChoiceKind::Instant => ChoiceValue::Instant(raw.as_str()?),
            ChoiceKind::String => ChoiceValue::String(raw.as_str()?),
            ChoiceKind::Boolean => ChoiceValue::Boolean(raw.as_bool()?),
            ChoiceKind::Integer => ChoiceValue::Integer(raw.as_i64()?),
            ChoiceKind::Age if raw.is_object() => ChoiceValue::Age(raw),
            ChoiceKind::Quantity if raw.is_object() => ChoiceValue::Quantity(raw),
            ChoiceKind::Period if raw.is_object() => ChoiceValue::Period(raw),
            ChoiceKind::Range if raw.is_object() => ChoiceValue::Range(raw),
            ChoiceKind::Ratio if raw.is_object() => ChoiceValue::Ratio(raw),
            ChoiceKind::CodeableConcept if raw.is_object() => ChoiceValue::CodeableConcept(raw),
            _ => return None,
        };
        Some(value)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ChoiceValue::Absent)
    }

    /// Render a point-in-time field: a Range reads as its lower bound.
    pub fn to_date_text(&self) -> String {
        match self {
            ChoiceValue::Range(range) => {
                let low = at!(range, "low", "value");
                if is_truthy(low) {
                    text(low)
                } else {
                    String::new()
                }
            }
            other => other.common_text(),
        }
    }

    /// Render a measured value: a Range reads as `"{low}-{high}"`.
    pub fn to_value_text(&self) -> String {
        match self {
            ChoiceValue::Range(range) => {
                let low = at!(range, "low", "value");
                let high = at!(range, "high", "value");
                if is_truthy(low) && is_truthy(high) {
                    format!("{}-{}", text(low), text(high))
                } else {
                    String::new()
                }
            }
            other => other.common_text(),
        }
    }

    fn common_text(&self) -> String {
        match self {
            ChoiceValue::DateTime(s) | ChoiceValue::Instant(s) | ChoiceValue::String(s) => {
                s.to_string()
            }
            ChoiceValue::Age(age) => {
                let unit = at!(age, "unit")
                    .map(|u| text(Some(u)))
                    .unwrap_or_else(|| "years".to_string());
                format!("{} {unit}", text(at!(age, "value")))
            }
            ChoiceValue::Quantity(quantity) => text(at!(quantity, "value")),
            ChoiceValue::Period(period) => text(at!(period, "start")),
            ChoiceValue::Ratio(ratio) => {
                let numerator = at!(ratio, "numerator", "value");
                let denominator = at!(ratio, "denominator", "value");
                if is_truthy(numerator) && is_truthy(denominator) {
                    format!("{}/{}", text(numerator), text(denominator))
                } else {
                    String::new()
                }
            }
            ChoiceValue::CodeableConcept(concept) => codeable_concept_text(Some(*concept)),
            ChoiceValue::Boolean(b) => b.to_string(),
            ChoiceValue::Integer(n) => n.to_string(),
            ChoiceValue::Range(_) | ChoiceValue::Absent => String::new(),
        }
    }
}

/// A choice field: key prefix plus variant priority order
#[derive(Debug, Clone, Copy)]
pub struct ChoiceField {
    prefix: &'static str,
    variants: &'static [ChoiceKind],
}

const TEMPORAL_VARIANTS: &[ChoiceKind] = &[
    ChoiceKind::DateTime,
    ChoiceKind::Age,
    ChoiceKind::Period,
    ChoiceKind::Range,
    ChoiceKind::String,
];

impl ChoiceField {
    /// Condition / AllergyIntolerance `onset[x]`
    pub const ONSET: ChoiceField = ChoiceField::new("onset", TEMPORAL_VARIANTS);

    /// Condition `abatement[x]`
    pub const ABATEMENT: ChoiceField = ChoiceField::new("abatement", TEMPORAL_VARIANTS);

    /// Observation `effective[x]`
    pub const EFFECTIVE: ChoiceField = ChoiceField::new(
        "effective",
        &[ChoiceKind::DateTime, ChoiceKind::Period, ChoiceKind::Instant],
    );

    /// Observation `value[x]`
    pub const VALUE: ChoiceField = ChoiceField::new(
        "value",
        &[
            ChoiceKind::Quantity,
            ChoiceKind::CodeableConcept,
            ChoiceKind::String,
            ChoiceKind::Boolean,
            ChoiceKind::Integer,
            ChoiceKind::Range,
            ChoiceKind::Ratio,
        ],
    );

    pub const fn new(prefix: &'static str, variants: &'static [ChoiceKind]) -> Self {
        Self { prefix, variants }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn variants(&self) -> &'static [ChoiceKind] {
        self.variants
    }

    /// First present variant of this field on `resource`, in priority order
    pub fn resolve<'a>(&self, resource: &'a Value) -> ChoiceValue<'a> {
        self.variants
            .iter()
            .find_map(|kind| {
                let key = format!("{}{}", self.prefix, kind.suffix());
                at!(resource, key.as_str()).and_then(|raw| ChoiceValue::parse(*kind, raw))
            })
            .unwrap_or(ChoiceValue::Absent)
    }
}
