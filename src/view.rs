//! Repository view: the full shipment list plus the map-filtered subset.
//!
//! DESIGN
//! ======
//! `filtered` is never edited directly. Every mutation goes through the
//! store, `all` is re-read from the store, and `filtered` is re-derived from
//! the new `all` with [`derive_filtered`]. Selection and mode changes only
//! touch the filter and re-derive.
//!
//! Selecting the state that is already selected clears the selection.
//! Changing the filter mode always clears the selection.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::{Deserialize, Serialize};

use crate::backend::StorageBackend;
use crate::error::StoreError;
use crate::form::DraftSubmission;
use crate::model::{ShipmentPatch, ShipmentRecord, VehicleType};
use crate::store::ShipmentStore;

// =============================================================================
// FILTER
// =============================================================================

/// Which state field the map selection is matched against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapMode {
    #[default]
    Origin,
    Destination,
}

impl MapMode {
    /// The state this mode reads from `record`.
    #[must_use]
    pub fn state_of(self, record: &ShipmentRecord) -> &str {
        match self {
            Self::Origin => &record.origin_state,
            Self::Destination => &record.destination_state,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Destination => "destination",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Origin => "Origin States",
            Self::Destination => "Destination States",
        }
    }

    /// Parse the radio-button value used by the dashboard.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "origin" => Some(Self::Origin),
            "destination" => Some(Self::Destination),
            _ => None,
        }
    }
}

/// Active map filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShipmentFilter {
    pub mode: MapMode,
    pub selected_state: Option<String>,
}

impl ShipmentFilter {
    #[must_use]
    pub fn new(mode: MapMode) -> Self {
        Self { mode, selected_state: None }
    }

    /// `true` when no state is selected or `record` matches it on the active axis.
    #[must_use]
    pub fn matches(&self, record: &ShipmentRecord) -> bool {
        self.selected_state
            .as_deref()
            .map_or(true, |state| self.mode.state_of(record) == state)
    }

    #[must_use]
    pub fn is_selected(&self, state: &str) -> bool {
        self.selected_state.as_deref() == Some(state)
    }
}

/// Pure derivation of the displayed rows from the full list.
#[must_use]
pub fn derive_filtered(all: &[ShipmentRecord], filter: &ShipmentFilter) -> Vec<ShipmentRecord> {
    all.iter().filter(|r| filter.matches(r)).cloned().collect()
}

// =============================================================================
// VIEW
// =============================================================================

/// Result of a form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(ShipmentRecord),
    Updated(ShipmentRecord),
    /// The edited record no longer exists; nothing was written.
    NotFound(u64),
}

/// Full and filtered shipment lists kept consistent with the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShipmentView {
    all: Vec<ShipmentRecord>,
    filtered: Vec<ShipmentRecord>,
    filter: ShipmentFilter,
}

impl ShipmentView {
    /// Empty view with the given filter axis and no selection.
    #[must_use]
    pub fn new(mode: MapMode) -> Self {
        Self { all: Vec::new(), filtered: Vec::new(), filter: ShipmentFilter::new(mode) }
    }

    /// Build a view from the store's current collection.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`StoreError`].
    pub fn load<B: StorageBackend>(store: &mut ShipmentStore<B>, mode: MapMode) -> Result<Self, StoreError> {
        let mut view = Self::new(mode);
        view.refresh(store)?;
        Ok(view)
    }

    #[must_use]
    pub fn all(&self) -> &[ShipmentRecord] {
        &self.all
    }

    #[must_use]
    pub fn filtered(&self) -> &[ShipmentRecord] {
        &self.filtered
    }

    #[must_use]
    pub fn filter(&self) -> &ShipmentFilter {
        &self.filter
    }

    #[must_use]
    pub fn mode(&self) -> MapMode {
        self.filter.mode
    }

    #[must_use]
    pub fn selected_state(&self) -> Option<&str> {
        self.filter.selected_state.as_deref()
    }

    #[must_use]
    pub fn find(&self, id: u64) -> Option<&ShipmentRecord> {
        self.all.iter().find(|r| r.id == id)
    }

    /// Re-read `all` from the store and re-derive `filtered`.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`StoreError`].
    pub fn refresh<B: StorageBackend>(&mut self, store: &mut ShipmentStore<B>) -> Result<(), StoreError> {
        self.all = store.get_all()?;
        self.rederive();
        Ok(())
    }

    /// Map click: select `state`, or clear the selection if it is already selected.
    pub fn select_state(&mut self, state: &str) {
        if self.filter.is_selected(state) {
            self.filter.selected_state = None;
        } else {
            self.filter.selected_state = Some(state.to_owned());
        }
        self.rederive();
    }

    pub fn clear_selection(&mut self) {
        self.filter.selected_state = None;
        self.rederive();
    }

    /// Switch the filter axis. Any prior selection is dropped.
    pub fn set_mode(&mut self, mode: MapMode) {
        self.filter = ShipmentFilter::new(mode);
        self.rederive();
    }

    /// Persist a form submission: create when it has no id, update otherwise.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`StoreError`].
    pub fn save<B: StorageBackend>(
        &mut self,
        store: &mut ShipmentStore<B>,
        submission: DraftSubmission,
    ) -> Result<SaveOutcome, StoreError> {
        let outcome = match submission {
            DraftSubmission::Create(shipment) => SaveOutcome::Created(store.add(shipment)?),
            DraftSubmission::Update(record) => {
                let id = record.id;
                match store.update(record)? {
                    Some(updated) => SaveOutcome::Updated(updated),
                    None => SaveOutcome::NotFound(id),
                }
            }
        };
        self.refresh(store)?;
        Ok(outcome)
    }

    /// Merge a partial edit into the current record and save it.
    ///
    /// Returns `None` when `id` is not in the view. An empty patch returns
    /// the current record without touching the store.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`StoreError`].
    pub fn apply_patch<B: StorageBackend>(
        &mut self,
        store: &mut ShipmentStore<B>,
        id: u64,
        patch: ShipmentPatch,
    ) -> Result<Option<ShipmentRecord>, StoreError> {
        let Some(current) = self.find(id) else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(current.clone()));
        }
        let merged = patch.apply(current);
        let updated = store.update(merged)?;
        self.refresh(store)?;
        Ok(updated)
    }

    /// Inline grid edit of the vehicle type.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`StoreError`].
    pub fn set_vehicle_type<B: StorageBackend>(
        &mut self,
        store: &mut ShipmentStore<B>,
        id: u64,
        vehicle_type: VehicleType,
    ) -> Result<Option<ShipmentRecord>, StoreError> {
        self.apply_patch(store, id, ShipmentPatch::vehicle_type(vehicle_type))
    }

    /// Delete `id` (no-op when absent) and re-derive.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`StoreError`].
    pub fn delete<B: StorageBackend>(&mut self, store: &mut ShipmentStore<B>, id: u64) -> Result<(), StoreError> {
        store.delete(id)?;
        self.refresh(store)
    }

    fn rederive(&mut self) {
        self.filtered = derive_filtered(&self.all, &self.filter);
    }
}
