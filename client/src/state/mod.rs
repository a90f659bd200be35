//! Client-side page state.
//!
//! DESIGN
//! ======
//! Shipment data itself is `shipments::ShipmentView`; these modules only
//! hold presentation state so components depend on small focused models.

pub mod dashboard;
pub mod ui;
