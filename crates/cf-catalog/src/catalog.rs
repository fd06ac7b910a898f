//! Read-only helpers over an ordered catalog slice.

use std::collections::HashSet;

use thiserror::Error;

use crate::vehicle::VehicleRecord;

/// Errors raised when accepting a catalog at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate vehicle id {id} at position {position}")]
    DuplicateId { id: u32, position: usize },
}

/// Convenience alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Check that every id in the catalog is unique.
pub fn validate_catalog(catalog: &[VehicleRecord]) -> CatalogResult<()> {
    let mut seen = HashSet::with_capacity(catalog.len());
    for (position, record) in catalog.iter().enumerate() {
        if !seen.insert(record.id) {
            return Err(CatalogError::DuplicateId {
                id: record.id,
                position,
            });
        }
    }
    Ok(())
}

/// Distinct makes in first-seen catalog order.
pub fn distinct_makes(catalog: &[VehicleRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter(|r| seen.insert(r.make.as_str()))
        .map(|r| r.make.clone())
        .collect()
}

/// Look up a single record by id.
pub fn find_by_id(catalog: &[VehicleRecord], id: u32) -> Option<&VehicleRecord> {
    catalog.iter().find(|r| r.id == id)
}
