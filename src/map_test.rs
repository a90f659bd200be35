use super::*;
use crate::model::VehicleType;

fn record(id: u64, origin: &str, destination: &str) -> ShipmentRecord {
    ShipmentRecord {
        id,
        origin_state: origin.to_owned(),
        destination_state: destination.to_owned(),
        description: "Cargo".to_owned(),
        container_quantity: 1,
        vehicle_type: VehicleType::Truck,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn state_counts_follow_mode() {
    let all = vec![record(1, "Texas", "Ohio"), record(2, "Texas", "Utah"), record(3, "Ohio", "Utah")];

    let origin = state_counts(&all, MapMode::Origin);
    assert_eq!(origin.get("Texas"), Some(&2));
    assert_eq!(origin.get("Ohio"), Some(&1));
    assert_eq!(origin.get("Utah"), None);

    let destination = state_counts(&all, MapMode::Destination);
    assert_eq!(destination.get("Utah"), Some(&2));
    assert_eq!(destination.get("Texas"), None);
}

#[test]
fn fill_opacity_grows_then_saturates() {
    assert!(approx(fill_opacity(0), 0.1));
    assert!(approx(fill_opacity(1), 0.25));
    assert!(approx(fill_opacity(2), 0.4));
    assert!(approx(fill_opacity(5), 0.85));
    assert!(approx(fill_opacity(6), 0.9));
    assert!(approx(fill_opacity(100), 0.9));
}

#[test]
fn region_fill_prefers_selection_over_density() {
    let filter = ShipmentFilter { mode: MapMode::Origin, selected_state: Some("Texas".to_owned()) };
    assert_eq!(region_fill("Texas", 3, &filter), RegionFill::Selected);
    assert_eq!(region_fill("Texas", 0, &filter), RegionFill::Selected);
    assert_eq!(region_fill("Ohio", 0, &filter), RegionFill::Empty);
    assert_eq!(region_fill("Ohio", 1, &filter), RegionFill::Density(fill_opacity(1)));
}

#[test]
fn region_fill_css_strings() {
    assert_eq!(RegionFill::Selected.css(), "#1976d2");
    assert_eq!(RegionFill::Empty.css(), "#FFFFFF");
    assert_eq!(RegionFill::Density(fill_opacity(1)).css(), "rgba(46, 125, 50, 0.25)");
    assert_eq!(RegionFill::Density(fill_opacity(2)).css(), "rgba(46, 125, 50, 0.4)");
    assert_eq!(RegionFill::Density(fill_opacity(9)).css(), "rgba(46, 125, 50, 0.9)");
}

#[test]
fn tooltip_pluralizes() {
    assert_eq!(tooltip("Texas", 0), "Texas: 0 shipments");
    assert_eq!(tooltip("Texas", 1), "Texas: 1 shipment");
    assert_eq!(tooltip("Texas", 3), "Texas: 3 shipments");
}
