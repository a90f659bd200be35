//! Dashboard chrome state: open dialogs, pending delete, grid page, and the
//! post-create animation.
//!
//! DESIGN
//! ======
//! Shipment data lives in `shipments::ShipmentView`; this struct only tracks
//! what the page is showing around it, so it stays plain data that the
//! page keeps in an `RwSignal`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use shipments::{
    DashboardConfig, SaveOutcome, ShipmentDraft, ShipmentFilter, ShipmentRecord, ShipmentStore, ShipmentView,
    StorageBackend, StoreError, VehicleType, grid,
};

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    /// Open add/edit dialog draft.
    pub form: Option<ShipmentDraft>,
    /// Submit-time validation message for the open dialog.
    pub form_error: Option<String>,
    /// Id awaiting delete confirmation.
    pub pending_delete: Option<u64>,
    pub page: usize,
    pub page_size: usize,
    /// Vehicle currently crossing the map after a create.
    pub animation: Option<VehicleType>,
    /// Last storage failure shown in the banner.
    pub error: Option<String>,
    pub config: DashboardConfig,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl DashboardState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            form: None,
            form_error: None,
            pending_delete: None,
            page: 0,
            page_size: config.page_size,
            animation: None,
            error: None,
            config,
        }
    }

    pub fn open_add(&mut self, filter: &ShipmentFilter) {
        self.form = Some(ShipmentDraft::for_new(filter));
        self.form_error = None;
    }

    pub fn open_edit(&mut self, record: &ShipmentRecord) {
        self.form = Some(ShipmentDraft::from_record(record));
        self.form_error = None;
    }

    pub fn close_form(&mut self) {
        self.form = None;
        self.form_error = None;
    }

    pub fn request_delete(&mut self, id: u64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Apply a finished save: close the dialog and, for creates, start the
    /// vehicle animation. Returns the vehicle to animate.
    pub fn finish_save(&mut self, outcome: &SaveOutcome) -> Option<VehicleType> {
        self.close_form();
        match outcome {
            SaveOutcome::Created(record) => {
                self.animation = Some(record.vehicle_type);
                self.animation
            }
            SaveOutcome::Updated(_) => None,
            SaveOutcome::NotFound(id) => {
                self.error = Some(format!("Shipment {id} no longer exists"));
                None
            }
        }
    }

    /// Validate the open draft and save it through `view`.
    ///
    /// Validation failures stay in the dialog as `form_error`. Returns the
    /// vehicle to animate when a shipment was created.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`StoreError`]; the dialog stays open.
    pub fn submit_form<B: StorageBackend>(
        &mut self,
        view: &mut ShipmentView,
        store: &mut ShipmentStore<B>,
    ) -> Result<Option<VehicleType>, StoreError> {
        let Some(draft) = self.form.as_ref() else {
            return Ok(None);
        };
        let submission = match draft.submit() {
            Ok(submission) => submission,
            Err(err) => {
                self.form_error = Some(err.to_string());
                return Ok(None);
            }
        };
        let outcome = view.save(store, submission)?;
        self.clamp_page(view.filtered().len());
        Ok(self.finish_save(&outcome))
    }

    /// Delete the shipment awaiting confirmation, if any.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`StoreError`].
    pub fn confirm_delete<B: StorageBackend>(
        &mut self,
        view: &mut ShipmentView,
        store: &mut ShipmentStore<B>,
    ) -> Result<(), StoreError> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(());
        };
        view.delete(store, id)?;
        self.clamp_page(view.filtered().len());
        Ok(())
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn end_animation(&mut self) {
        self.animation = None;
    }

    pub fn set_page_size(&mut self, size: usize, rows: usize) {
        self.page_size = self.config.normalize_page_size(size);
        self.page = 0;
        self.clamp_page(rows);
    }

    /// Keep the page index valid after the filtered list changed length.
    pub fn clamp_page(&mut self, rows: usize) {
        self.page = grid::clamp_page(self.page, rows, self.page_size);
    }

    pub fn next_page(&mut self, rows: usize) {
        self.page = grid::clamp_page(self.page + 1, rows, self.page_size);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn page_count(&self, rows: usize) -> usize {
        grid::page_count(rows, self.page_size)
    }
}
