//! Form input → [`StructuredCriteria`].

use cf_catalog::{RawFormCriteria, StructuredCriteria};

/// Convert raw form fields into criteria.
///
/// Never fails. Blank text fields and numeric fields that do not parse as a
/// non-negative integer become unset. Text keeps the user's spelling; case
/// and whitespace are handled at match time.
pub fn normalize(raw: &RawFormCriteria) -> StructuredCriteria {
    StructuredCriteria {
        make: text_field(&raw.make),
        model: text_field(&raw.model),
        min_price: numeric_field("minPrice", &raw.min_price),
        max_price: numeric_field("maxPrice", &raw.max_price),
        min_year: numeric_field("minYear", &raw.min_year),
        body_type: None,
        required_features: Vec::new(),
    }
}

fn text_field(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn numeric_field<T: std::str::FromStr>(name: &str, value: &str) -> Option<T> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::debug!(field = name, value = %value, "ignoring unparseable form number");
            None
        }
    }
}
