//! # shipments
//!
//! Core of the shipment-tracking dashboard: the record model, the persisted
//! store, and the derived-state logic that keeps the full and map-filtered
//! shipment lists consistent.
//!
//! ARCHITECTURE
//! ============
//! - [`store`] persists one `{ "shipments": [...] }` document through a
//!   [`backend::StorageBackend`] (browser `localStorage` in the client,
//!   [`backend::MemoryBackend`] in tests and as a fallback).
//! - [`view`] holds `all` and `filtered` and re-derives `filtered` after
//!   every mutation, selection, or mode change.
//! - [`map`], [`form`], and [`grid`] are the pure halves of the map
//!   selector, the add/edit dialog, and the paged grid. The Leptos
//!   components in the `client` crate only wire events to them.

pub mod backend;
pub mod config;
pub mod error;
pub mod form;
pub mod grid;
pub mod map;
pub mod model;
pub mod seed;
pub mod store;
pub mod view;

pub use backend::{MemoryBackend, StorageBackend};
pub use config::{DashboardConfig, StoreConfig};
pub use error::{FormError, StoreError};
pub use form::{DraftSubmission, ShipmentDraft};
pub use model::{NewShipment, ShipmentPatch, ShipmentRecord, US_STATES, VehicleType};
pub use store::ShipmentStore;
pub use view::{MapMode, SaveOutcome, ShipmentFilter, ShipmentView};
