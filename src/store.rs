//! Shipment store: get/add/update/delete over one persisted collection.
//!
//! DESIGN
//! ======
//! Every mutation reads the whole collection, computes the next collection,
//! and writes the whole document back with a single backend write. The
//! persisted value is therefore always a complete snapshot.
//!
//! The first read of an absent document seeds it from the bundled dataset
//! (unless seeding is disabled in [`StoreConfig`]).
//!
//! ERROR HANDLING
//! ==============
//! `update` and `delete` on an unknown id are silent no-ops and perform no
//! write. Backend failures and undecodable documents propagate as
//! [`StoreError`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::backend::StorageBackend;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::model::{NewShipment, ShipmentRecord};
use crate::seed::default_shipments;

/// Persisted document layout: `{ "shipments": [...] }`.
///
/// `shipments` is optional on read so a document without the collection is
/// treated like an absent one and gets seeded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct ShipmentsDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) shipments: Option<Vec<ShipmentRecord>>,
}

/// Persistence boundary for shipment records.
pub struct ShipmentStore<B> {
    backend: B,
    config: StoreConfig,
    seed: Vec<ShipmentRecord>,
}

impl<B: StorageBackend> ShipmentStore<B> {
    /// Build a store that seeds from the bundled dataset.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Seed`] if the bundled dataset cannot be decoded.
    pub fn new(backend: B, config: StoreConfig) -> Result<Self, StoreError> {
        let seed = if config.seed_on_empty { default_shipments()? } else { Vec::new() };
        Ok(Self { backend, config, seed })
    }

    /// Build a store with an explicit seed dataset.
    pub fn with_seed(backend: B, config: StoreConfig, seed: Vec<ShipmentRecord>) -> Self {
        Self { backend, config, seed }
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Return the full persisted collection, seeding it on first access.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend fails or the document is corrupt.
    pub fn get_all(&mut self) -> Result<Vec<ShipmentRecord>, StoreError> {
        self.load()
    }

    /// Append a new record with id `max(ids) + 1` (or the base id when empty).
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the collection cannot be read or written,
    /// or [`StoreError::IdSpaceExhausted`] when the largest id is `u64::MAX`.
    pub fn add(&mut self, shipment: NewShipment) -> Result<ShipmentRecord, StoreError> {
        let mut records = self.load()?;
        let id = next_id(&records, self.config.base_id).ok_or(StoreError::IdSpaceExhausted)?;
        let record = shipment.with_id(id);
        records.push(record.clone());
        self.persist(&records)?;
        info!(id, count = records.len(), "shipment added");
        Ok(record)
    }

    /// Replace the record with the same id, keeping its position.
    ///
    /// Returns `None` without writing when no record has that id.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the collection cannot be read or written.
    pub fn update(&mut self, shipment: ShipmentRecord) -> Result<Option<ShipmentRecord>, StoreError> {
        let mut records = self.load()?;
        let Some(slot) = records.iter_mut().find(|r| r.id == shipment.id) else {
            debug!(id = shipment.id, "update ignored: shipment not found");
            return Ok(None);
        };
        *slot = shipment.clone();
        self.persist(&records)?;
        info!(id = shipment.id, "shipment updated");
        Ok(Some(shipment))
    }

    /// Remove the record with `id`. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the collection cannot be read or written.
    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let records = self.load()?;
        let before = records.len();
        let remaining: Vec<ShipmentRecord> = records.into_iter().filter(|r| r.id != id).collect();
        if remaining.len() == before {
            debug!(id, "delete ignored: shipment not found");
            return Ok(());
        }
        self.persist(&remaining)?;
        info!(id, count = remaining.len(), "shipment deleted");
        Ok(())
    }

    fn load(&mut self) -> Result<Vec<ShipmentRecord>, StoreError> {
        let existing = match self.backend.read(&self.config.storage_key)? {
            Some(raw) => {
                let doc: ShipmentsDocument = serde_json::from_str(&raw).map_err(StoreError::Corrupt)?;
                doc.shipments
            }
            None => None,
        };
        if let Some(records) = existing {
            return Ok(records);
        }
        if !self.config.seed_on_empty {
            return Ok(Vec::new());
        }
        let seeded = self.seed.clone();
        self.persist(&seeded)?;
        info!(count = seeded.len(), key = %self.config.storage_key, "seeded shipments store");
        Ok(seeded)
    }

    fn persist(&mut self, records: &[ShipmentRecord]) -> Result<(), StoreError> {
        let doc = ShipmentsDocument { shipments: Some(records.to_vec()) };
        let raw = serde_json::to_string(&doc).map_err(StoreError::Encode)?;
        self.backend.write(&self.config.storage_key, &raw)
    }
}

/// Id for the next record: one past the largest id, or `base_id` (at least 1)
/// when empty. `None` once the largest id is `u64::MAX`.
#[must_use]
pub fn next_id(records: &[ShipmentRecord], base_id: u64) -> Option<u64> {
    match records.iter().map(|r| r.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(base_id.max(1)),
    }
}
