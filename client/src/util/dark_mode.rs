//! Dark mode preference and `data-theme` application.
//!
//! The preference is stored next to the shipments document through the same
//! `StorageBackend` seam. Without a stored value the system color scheme
//! decides. Outside the browser every DOM step is a no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use shipments::StorageBackend;

use crate::util::local_storage::LocalStorageBackend;

pub const STORAGE_KEY: &str = "shipments_dashboard_dark";

/// Stored preference, if any.
pub fn stored_preference(backend: &impl StorageBackend) -> Option<bool> {
    match backend.read(STORAGE_KEY) {
        Ok(value) => value.map(|v| v == "true"),
        Err(err) => {
            leptos::logging::warn!("dark mode preference unreadable: {err}");
            None
        }
    }
}

/// Write the preference. Failures are logged and otherwise ignored.
pub fn persist(backend: &mut impl StorageBackend, enabled: bool) {
    if let Err(err) = backend.write(STORAGE_KEY, if enabled { "true" } else { "false" }) {
        leptos::logging::warn!("dark mode preference not saved: {err}");
    }
}

/// Initial preference: stored value first, then the system color scheme.
pub fn read_preference() -> bool {
    LocalStorageBackend::open()
        .and_then(|local| stored_preference(&local))
        .unwrap_or_else(system_prefers_dark)
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Set `data-theme` on `<html>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element());
        if let Some(el) = root {
            if let Err(err) = el.set_attribute("data-theme", if enabled { "dark" } else { "light" }) {
                leptos::logging::warn!("data-theme not applied: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, and persist it when storage is available.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    if let Some(mut local) = LocalStorageBackend::open() {
        persist(&mut local, next);
    }
    next
}
