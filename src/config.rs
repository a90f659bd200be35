//! Typed configuration for the store and the dashboard.
//!
//! The dashboard runs entirely in the browser, so there is no environment to
//! read from. Defaults live in constants; callers override individual fields
//! with struct update syntax.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::view::MapMode;

pub const DEFAULT_STORAGE_KEY: &str = "shipments-db";
pub const DEFAULT_BASE_ID: u64 = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];
pub const DEFAULT_ANIMATION_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Storage key the shipments document is written under.
    pub storage_key: String,
    /// Id handed out by `add` when the collection is empty. Zero is treated
    /// as 1.
    pub base_id: u64,
    /// Seed from the bundled dataset when no document exists yet.
    pub seed_on_empty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_owned(), base_id: DEFAULT_BASE_ID, seed_on_empty: true }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Duration of the post-create vehicle animation.
    pub animation_ms: u32,
    pub initial_mode: MapMode,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            animation_ms: DEFAULT_ANIMATION_MS,
            initial_mode: MapMode::Origin,
        }
    }
}

impl DashboardConfig {
    /// Pick a page size, falling back to the default when `size` is not one of
    /// the offered options.
    #[must_use]
    pub fn normalize_page_size(&self, size: usize) -> usize {
        if self.page_size_options.contains(&size) {
            size
        } else {
            self.page_size
        }
    }
}
