//! Catalog loading at startup.

use anyhow::Context;

use cf_catalog::VehicleRecord;

/// Load the catalog from a JSON array file, or the sample inventory when
/// no path is given. Ids must be unique.
pub fn load_catalog(path: Option<&str>) -> anyhow::Result<Vec<VehicleRecord>> {
    let catalog = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog {path}"))?;
            let records: Vec<VehicleRecord> = serde_json::from_str(&contents)
                .with_context(|| format!("failed to parse catalog {path}"))?;
            tracing::info!(path, vehicles = records.len(), "catalog loaded");
            records
        }
        None => {
            let records = cf_catalog::sample::sample_catalog();
            tracing::info!(vehicles = records.len(), "using sample catalog");
            records
        }
    };
    cf_catalog::validate_catalog(&catalog)?;
    Ok(catalog)
}
