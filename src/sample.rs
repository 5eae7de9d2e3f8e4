use crate::error::EngineError;
use crate::types::Catalog;

/// Demo catalog shipped with the dashboard: 4 bundles, 4 CPUs, 4 GPUs
const SAMPLE_CATALOG_JSON: &str = include_str!("../data/sample_catalog.json");

/// Parse a catalog from its JSON form
pub fn parse_catalog(catalog_json: &str) -> Result<Catalog, EngineError> {
    serde_json::from_str(catalog_json).map_err(|e| EngineError::InvalidCatalog(e.to_string()))
}

/// Load the embedded demo catalog
pub fn sample_catalog() -> Result<Catalog, EngineError> {
    parse_catalog(SAMPLE_CATALOG_JSON)
}
