//! Stable catalog filter.

use cf_catalog::{StructuredCriteria, VehicleRecord};

/// Records matching every set field of `criteria`, in catalog order.
///
/// An empty result is a normal outcome, not an error.
pub fn filter<'a>(
    catalog: &'a [VehicleRecord],
    criteria: &StructuredCriteria,
) -> Vec<&'a VehicleRecord> {
    let matched: Vec<_> = catalog.iter().filter(|r| matches(r, criteria)).collect();
    tracing::debug!(
        catalog_len = catalog.len(),
        matched = matched.len(),
        "catalog filtered"
    );
    matched
}

/// True when `record` satisfies all set predicates in `criteria`.
pub fn matches(record: &VehicleRecord, criteria: &StructuredCriteria) -> bool {
    if let Some(make) = &criteria.make
        && record.make.to_lowercase() != make.trim().to_lowercase()
    {
        return false;
    }
    if let Some(model) = &criteria.model
        && !record
            .model
            .to_lowercase()
            .contains(&model.trim().to_lowercase())
    {
        return false;
    }
    if let Some(min) = criteria.min_price
        && record.price < min
    {
        return false;
    }
    if let Some(max) = criteria.max_price
        && record.price > max
    {
        return false;
    }
    if let Some(min_year) = criteria.min_year
        && record.year < min_year
    {
        return false;
    }
    if let Some(body_type) = &criteria.body_type
        && !record.body_type.matches_name(body_type)
    {
        return false;
    }
    criteria
        .required_features
        .iter()
        .all(|tag| record.has_feature(tag))
}
