use super::*;

#[test]
fn every_vehicle_has_a_distinct_glyph() {
    let glyphs: Vec<&str> = VehicleType::ALL.into_iter().map(vehicle_glyph).collect();
    assert_eq!(glyphs, vec!["🚚", "🚢", "✈"]);
}

#[test]
fn airplane_gets_the_tilted_variant() {
    assert!(animation_class(VehicleType::Airplane).ends_with("--airplane"));
    assert_eq!(animation_class(VehicleType::Truck), "shipment-animation");
    assert_eq!(animation_class(VehicleType::Ship), "shipment-animation");
}
