use super::*;

fn texas_parts() -> ShipmentRecord {
    ShipmentRecord {
        id: 7,
        origin_state: "Texas".to_owned(),
        destination_state: "Ohio".to_owned(),
        description: "Parts".to_owned(),
        container_quantity: 4,
        vehicle_type: VehicleType::Truck,
    }
}

// =============================================================
// US_STATES
// =============================================================

#[test]
fn us_states_are_sorted_and_unique() {
    let mut sorted = US_STATES.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted, US_STATES.to_vec());
}

// =============================================================
// VehicleType
// =============================================================

#[test]
fn vehicle_type_serializes_as_plain_name() {
    assert_eq!(serde_json::to_string(&VehicleType::Airplane).unwrap(), "\"Airplane\"");
    let parsed: VehicleType = serde_json::from_str("\"Ship\"").unwrap();
    assert_eq!(parsed, VehicleType::Ship);
}

#[test]
fn vehicle_type_from_str_rejects_unknown_names() {
    assert_eq!("Truck".parse::<VehicleType>(), Ok(VehicleType::Truck));
    assert_eq!(
        "Bicycle".parse::<VehicleType>(),
        Err(UnknownVehicleType("Bicycle".to_owned()))
    );
}

#[test]
fn vehicle_type_display_round_trips_through_from_str() {
    for vehicle in VehicleType::ALL {
        assert_eq!(vehicle.to_string().parse::<VehicleType>(), Ok(vehicle));
    }
}

// =============================================================
// ShipmentRecord
// =============================================================

#[test]
fn record_uses_camel_case_field_names() {
    let value = serde_json::to_value(texas_parts()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "id": 7,
            "originState": "Texas",
            "destinationState": "Ohio",
            "description": "Parts",
            "containerQuantity": 4,
            "vehicleType": "Truck"
        })
    );
}

#[test]
fn new_shipment_with_id_keeps_every_field() {
    let draft = NewShipment {
        origin_state: "Texas".to_owned(),
        destination_state: "Ohio".to_owned(),
        description: "Parts".to_owned(),
        container_quantity: 4,
        vehicle_type: VehicleType::Truck,
    };
    assert_eq!(draft.with_id(7), texas_parts());
}

// =============================================================
// ShipmentPatch
// =============================================================

#[test]
fn patch_replaces_only_the_given_fields() {
    let record = texas_parts();
    let updated = ShipmentPatch::vehicle_type(VehicleType::Ship).apply(&record);
    assert_eq!(updated.vehicle_type, VehicleType::Ship);
    assert_eq!(updated.id, record.id);
    assert_eq!(updated.origin_state, record.origin_state);
    assert_eq!(updated.destination_state, record.destination_state);
    assert_eq!(updated.description, record.description);
    assert_eq!(updated.container_quantity, record.container_quantity);
}

#[test]
fn empty_patch_is_identity() {
    let patch = ShipmentPatch::default();
    assert!(patch.is_empty());
    assert_eq!(patch.apply(&texas_parts()), texas_parts());
}
