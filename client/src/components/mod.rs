//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard surfaces and report user intent through
//! callbacks; the dashboard page routes every data change through the store.

pub mod delete_dialog;
pub mod shipment_animation;
pub mod shipment_form;
pub mod shipment_grid;
pub mod shipments_map;
