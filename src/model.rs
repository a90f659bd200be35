//! Shipment record types shared by the store, the view, and the client.
//!
//! DESIGN
//! ======
//! `ShipmentRecord` is the persisted shape. Field names serialize in
//! camelCase (`originState`, `containerQuantity`, ...) inside the stored
//! `{ "shipments": [...] }` document.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Recognized US state and territory names, sorted alphabetically.
pub const US_STATES: [&str; 56] = [
    "Alabama",
    "Alaska",
    "American Samoa",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "District of Columbia",
    "Florida",
    "Georgia",
    "Guam",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Northern Mariana Islands",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Puerto Rico",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "U.S. Virgin Islands",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

// =============================================================================
// VEHICLE TYPE
// =============================================================================

/// How a shipment travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Truck,
    Ship,
    Airplane,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [VehicleType::Truck, VehicleType::Ship, VehicleType::Airplane];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Truck => "Truck",
            Self::Ship => "Ship",
            Self::Airplane => "Airplane",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vehicle type: {0}")]
pub struct UnknownVehicleType(pub String);

impl FromStr for VehicleType {
    type Err = UnknownVehicleType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Truck" => Ok(Self::Truck),
            "Ship" => Ok(Self::Ship),
            "Airplane" => Ok(Self::Airplane),
            other => Err(UnknownVehicleType(other.to_owned())),
        }
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// A persisted shipment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    pub id: u64,
    pub origin_state: String,
    pub destination_state: String,
    pub description: String,
    pub container_quantity: u32,
    pub vehicle_type: VehicleType,
}

/// A shipment that has not been assigned an id yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShipment {
    pub origin_state: String,
    pub destination_state: String,
    pub description: String,
    pub container_quantity: u32,
    pub vehicle_type: VehicleType,
}

impl NewShipment {
    /// Attach a store-assigned id.
    #[must_use]
    pub fn with_id(self, id: u64) -> ShipmentRecord {
        ShipmentRecord {
            id,
            origin_state: self.origin_state,
            destination_state: self.destination_state,
            description: self.description,
            container_quantity: self.container_quantity,
            vehicle_type: self.vehicle_type,
        }
    }
}

/// A partial edit coming from the grid.
///
/// The store replaces whole records, so a patch is always applied to the
/// current record before it is handed to `update`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShipmentPatch {
    pub origin_state: Option<String>,
    pub destination_state: Option<String>,
    pub description: Option<String>,
    pub container_quantity: Option<u32>,
    pub vehicle_type: Option<VehicleType>,
}

impl ShipmentPatch {
    #[must_use]
    pub fn vehicle_type(vehicle_type: VehicleType) -> Self {
        Self { vehicle_type: Some(vehicle_type), ..Self::default() }
    }

    /// Merge this patch over `record`, producing the full replacement record.
    #[must_use]
    pub fn apply(self, record: &ShipmentRecord) -> ShipmentRecord {
        ShipmentRecord {
            id: record.id,
            origin_state: self.origin_state.unwrap_or_else(|| record.origin_state.clone()),
            destination_state: self
                .destination_state
                .unwrap_or_else(|| record.destination_state.clone()),
            description: self.description.unwrap_or_else(|| record.description.clone()),
            container_quantity: self.container_quantity.unwrap_or(record.container_quantity),
            vehicle_type: self.vehicle_type.unwrap_or(record.vehicle_type),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
