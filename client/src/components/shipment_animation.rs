//! Vehicle glyph that slides across the map after a shipment is created.
//!
//! The slide itself is a CSS keyframe animation on
//! `.shipment-animation`; the page clears the vehicle when the timer fires.

#[cfg(test)]
#[path = "shipment_animation_test.rs"]
mod shipment_animation_test;

use leptos::prelude::*;
use shipments::VehicleType;

pub fn vehicle_glyph(vehicle: VehicleType) -> &'static str {
    match vehicle {
        VehicleType::Truck => "🚚",
        VehicleType::Ship => "🚢",
        VehicleType::Airplane => "✈",
    }
}

pub fn animation_class(vehicle: VehicleType) -> &'static str {
    match vehicle {
        VehicleType::Airplane => "shipment-animation shipment-animation--airplane",
        VehicleType::Truck | VehicleType::Ship => "shipment-animation",
    }
}

#[component]
pub fn ShipmentAnimation(#[prop(into)] vehicle: Signal<Option<VehicleType>>) -> impl IntoView {
    move || {
        vehicle.get().map(|v| {
            view! {
                <div class=animation_class(v) aria-hidden="true">
                    {vehicle_glyph(v)}
                </div>
            }
        })
    }
}
