//! Add/edit form drafts and their conversion into store operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dialog edits a [`ShipmentDraft`] whose fields mirror the raw form
//! inputs. Submitting turns it into a [`DraftSubmission`]: a draft that
//! carries an id becomes an update, anything else becomes a create. Only
//! required-field presence (and a parseable quantity) is checked here.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::error::FormError;
use crate::model::{NewShipment, ShipmentRecord, VehicleType};
use crate::view::{MapMode, ShipmentFilter};

/// Raw form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShipmentDraft {
    pub id: Option<u64>,
    pub origin_state: String,
    pub destination_state: String,
    pub description: String,
    /// Kept as typed text until submit.
    pub container_quantity: String,
    pub vehicle_type: Option<VehicleType>,
}

/// What a valid draft asks the store to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftSubmission {
    Create(NewShipment),
    Update(ShipmentRecord),
}

impl ShipmentDraft {
    /// Draft for the "Add Shipment" button.
    ///
    /// When the map has a selected state, that state is pre-filled on the
    /// active axis.
    #[must_use]
    pub fn for_new(filter: &ShipmentFilter) -> Self {
        let mut draft = Self::default();
        if let Some(state) = filter.selected_state.clone() {
            match filter.mode {
                MapMode::Origin => draft.origin_state = state,
                MapMode::Destination => draft.destination_state = state,
            }
        }
        draft
    }

    /// Draft for editing an existing record.
    #[must_use]
    pub fn from_record(record: &ShipmentRecord) -> Self {
        Self {
            id: Some(record.id),
            origin_state: record.origin_state.clone(),
            destination_state: record.destination_state.clone(),
            description: record.description.clone(),
            container_quantity: record.container_quantity.to_string(),
            vehicle_type: Some(record.vehicle_type),
        }
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.is_edit() { "Edit Shipment" } else { "Add New Shipment" }
    }

    /// Validate required fields and build the store operation.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormError`] found, in form field order.
    pub fn submit(&self) -> Result<DraftSubmission, FormError> {
        let origin_state = required(&self.origin_state, "origin state")?;
        let destination_state = required(&self.destination_state, "destination state")?;
        let description = required(&self.description, "description")?;
        let quantity_raw = required(&self.container_quantity, "container quantity")?;
        let container_quantity = parse_quantity(quantity_raw.trim())?;
        let vehicle_type = self.vehicle_type.ok_or(FormError::MissingField("vehicle type"))?;

        let shipment = NewShipment { origin_state, destination_state, description, container_quantity, vehicle_type };
        Ok(match self.id {
            Some(id) => DraftSubmission::Update(shipment.with_id(id)),
            None => DraftSubmission::Create(shipment),
        })
    }
}

/// Presence check only; the value is kept exactly as typed.
fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(value.to_owned())
}

fn parse_quantity(raw: &str) -> Result<u32, FormError> {
    match raw.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(FormError::InvalidQuantity(raw.to_owned())),
    }
}
