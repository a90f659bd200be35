//! Error types for the store and the form boundary.
//!
//! ERROR HANDLING
//! ==============
//! Missing records are not errors: `update` returns `None` and `delete` is a
//! no-op when the id is absent. Only storage-layer failures and undecodable
//! documents surface as [`StoreError`].

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("persisted shipments document is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("bundled seed data is invalid: {0}")]
    Seed(#[source] serde_json::Error),
    #[error("failed to encode shipments document: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("no shipment id left after {}", u64::MAX)]
    IdSpaceExhausted,
}

/// Reasons a form draft cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("container quantity must be a positive whole number, got {0:?}")]
    InvalidQuantity(String),
}
