//! Bundled default dataset used to populate an empty store.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use crate::error::StoreError;
use crate::model::ShipmentRecord;
use crate::store::ShipmentsDocument;

const SEED_JSON: &str = include_str!("../data/shipments.json");

/// Decode the bundled default shipments.
///
/// # Errors
///
/// Returns [`StoreError::Seed`] if the bundled JSON does not match the
/// persisted document schema.
pub fn default_shipments() -> Result<Vec<ShipmentRecord>, StoreError> {
    let doc: ShipmentsDocument = serde_json::from_str(SEED_JSON).map_err(StoreError::Seed)?;
    Ok(doc.shipments.unwrap_or_default())
}
