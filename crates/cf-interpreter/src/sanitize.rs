//! Field-by-field validation of untrusted interpreter output.
//!
//! The service is asked for a schema-conforming object, but nothing about
//! the reply is trusted: each field is kept only when present and of the
//! expected primitive type, otherwise it is dropped. Sanitization never
//! fails; the worst case is an all-unset criteria object.

use cf_catalog::StructuredCriteria;
use serde_json::Value;

/// Interpreter output after type checks, mirroring the response schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AiCriteria {
    pub body_type: Option<String>,
    pub make: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_year: Option<f64>,
    pub features: Option<Vec<String>>,
}

/// Result of sanitizing a payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sanitized {
    pub criteria: AiCriteria,
    /// Payload keys that were present but rejected.
    pub dropped: Vec<&'static str>,
}

/// Validate a decoded payload.
///
/// Non-object payloads carry no usable fields and yield all-unset criteria.
pub fn sanitize(payload: &Value) -> Sanitized {
    let mut out = Sanitized::default();
    let Some(obj) = payload.as_object() else {
        return out;
    };

    let mut take_string = |key: &'static str| -> Option<String> {
        let value = obj.get(key)?;
        match value.as_str() {
            Some(s) if !s.trim().is_empty() => Some(s.to_string()),
            _ => {
                if !is_blank(value) {
                    out.dropped.push(key);
                }
                None
            }
        }
    };
    out.criteria.body_type = take_string("type");
    out.criteria.make = take_string("make");

    let mut take_number = |key: &'static str| -> Option<f64> {
        let value = obj.get(key)?;
        match value.as_f64() {
            Some(n) if n.is_finite() && n > 0.0 => Some(n),
            // Zero means "not mentioned".
            Some(n) if n == 0.0 => None,
            _ => {
                if !value.is_null() {
                    out.dropped.push(key);
                }
                None
            }
        }
    };
    out.criteria.min_price = take_number("minPrice");
    out.criteria.max_price = take_number("maxPrice");
    out.criteria.min_year = take_number("minYear");

    match obj.get("features") {
        Some(Value::Array(items)) => {
            let tags: Vec<String> = items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
                .collect();
            if tags.len() != items.len() {
                out.dropped.push("features[]");
            }
            out.criteria.features = Some(tags);
        }
        Some(Value::Null) | None => {}
        Some(_) => out.dropped.push("features"),
    }

    out
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

impl From<AiCriteria> for StructuredCriteria {
    fn from(ai: AiCriteria) -> Self {
        StructuredCriteria {
            make: ai.make,
            model: None,
            // Lower bounds round up and the upper bound rounds down so the
            // integer comparison agrees with the fractional one.
            min_price: ai.min_price.map(|n| n.ceil() as u64),
            max_price: ai.max_price.map(|n| n.floor() as u64),
            min_year: ai.min_year.map(|n| n.ceil() as u32),
            body_type: ai.body_type,
            required_features: ai.features.unwrap_or_default(),
        }
    }
}
