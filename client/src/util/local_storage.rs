//! Browser `localStorage` backend for the shipment store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The core store persists through any `StorageBackend`. In the browser that
//! is `window.localStorage`; outside the browser (native tests) or when the
//! browser refuses storage access, the dashboard runs on an in-memory
//! backend instead and logs a warning.
//!
//! TRADE-OFFS
//! ==========
//! The `Storage` handle is looked up on every call rather than held, which
//! keeps the backend `Send + Sync` so the store can live in a Leptos
//! `StoredValue`.

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use shipments::{MapMode, MemoryBackend, ShipmentStore, ShipmentView, StorageBackend, StoreConfig, StoreError};

/// Store type used by the dashboard.
pub type DashboardStore = ShipmentStore<BrowserBackend>;

/// `window.localStorage`.
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageBackend {
    _private: (),
}

impl LocalStorageBackend {
    /// Probe for `localStorage`. `None` when it is unavailable.
    pub fn open() -> Option<Self> {
        #[cfg(feature = "csr")]
        {
            storage().ok().map(|_| Self { _private: () })
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }
}

#[cfg(feature = "csr")]
fn storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .ok_or_else(|| StoreError::Storage("no window".to_owned()))?
        .local_storage()
        .map_err(|err| StoreError::Storage(format!("{err:?}")))?
        .ok_or_else(|| StoreError::Storage("localStorage unavailable".to_owned()))
}

impl StorageBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            storage()?
                .get_item(key)
                .map_err(|err| StoreError::Storage(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StoreError::Storage(format!("localStorage requires a browser (key {key})")))
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            storage()?
                .set_item(key, value)
                .map_err(|err| StoreError::Storage(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
            Err(StoreError::Storage(format!("localStorage requires a browser (key {key})")))
        }
    }
}

/// Either durable browser storage or the in-memory fallback.
#[derive(Debug, Clone)]
pub enum BrowserBackend {
    Local(LocalStorageBackend),
    Memory(MemoryBackend),
}

impl BrowserBackend {
    /// `localStorage` when available, memory otherwise.
    pub fn detect() -> Self {
        match LocalStorageBackend::open() {
            Some(local) => Self::Local(local),
            None => {
                leptos::logging::warn!("localStorage unavailable; shipments will not persist across reloads");
                Self::Memory(MemoryBackend::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

impl StorageBackend for BrowserBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Self::Local(local) => local.read(key),
            Self::Memory(memory) => memory.read(key),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            Self::Local(local) => local.write(key, value),
            Self::Memory(memory) => memory.write(key, value),
        }
    }
}

/// Open the browser store and load the initial view.
///
/// # Errors
///
/// See [`load_with_backend`].
pub fn load_dashboard(config: StoreConfig, mode: MapMode) -> Result<(DashboardStore, ShipmentView), StoreError> {
    load_with_backend(BrowserBackend::detect(), config, mode)
}

/// Load the initial view from `backend`.
///
/// A corrupt or unreadable persisted document is left untouched and the
/// session continues on a freshly seeded in-memory store.
///
/// # Errors
///
/// Returns a [`StoreError`] only if the in-memory fallback itself cannot be
/// built (i.e. the bundled seed data is invalid).
pub fn load_with_backend(
    backend: BrowserBackend,
    config: StoreConfig,
    mode: MapMode,
) -> Result<(DashboardStore, ShipmentView), StoreError> {
    let mut store = ShipmentStore::new(backend, config.clone())?;
    match ShipmentView::load(&mut store, mode) {
        Ok(view) => Ok((store, view)),
        Err(err) => {
            leptos::logging::warn!("failed to load persisted shipments ({err}); continuing in memory");
            let mut fallback = ShipmentStore::new(BrowserBackend::Memory(MemoryBackend::new()), config)?;
            let view = ShipmentView::load(&mut fallback, mode)?;
            Ok((fallback, view))
        }
    }
}
