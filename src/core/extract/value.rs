//! Defensive lookups over semi-structured FHIR JSON
//!
//! Every accessor here returns a default instead of failing when a nested
//! object or array is missing, null, or of an unexpected shape.

use serde_json::Value;

/// One step of a lookup path: an object key or an array index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    Key(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for Step<'a> {
    fn from(key: &'a str) -> Self {
        Step::Key(key)
    }
}

impl From<usize> for Step<'_> {
    fn from(index: usize) -> Self {
        Step::Index(index)
    }
}

/// Follow `path` from `value`.
///
/// Returns `None` as soon as a step is missing, lands on `null`, or is applied
/// to the wrong kind of node (a key on an array, an index on an object).
pub fn lookup<'v>(value: &'v Value, path: &[Step<'_>]) -> Option<&'v Value> {
    let mut current = value;
    for step in path {
        current = match (step, current) {
            (Step::Key(key), Value::Object(map)) => map.get(*key)?,
            (Step::Index(index), Value::Array(items)) => items.get(*index)?,
            _ => return None,
        };
        if current.is_null() {
            return None;
        }
    }
    Some(current)
}

/// `at!(value, "a", 0, "b")` is shorthand for a [`lookup`] along that path.
macro_rules! at {
    ($value:expr $(, $step:expr)+ $(,)?) => {
        $crate::core::extract::value::lookup(
            $value,
            &[$($crate::core::extract::value::Step::from($step)),+],
        )
    };
}
pub(crate) use at;

/// Render a scalar as display text; objects, arrays and absent values become `""`.
pub fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// String payload when present and non-empty
pub fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Array payload, or an empty slice for anything else
pub fn array(value: Option<&Value>) -> &[Value] {
    match value {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    }
}

/// Whether a value carries content: non-zero numbers, `true`, and non-empty
/// strings, arrays and objects.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}
