//! Map selector math: per-state shipment counts and region fill colors.
//!
//! Counts follow the active map mode, so the choropleth always shows the
//! same axis the selection filters on. Fill opacity saturates at 0.9 to keep
//! region labels readable.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use std::collections::HashMap;

use crate::model::ShipmentRecord;
use crate::view::{MapMode, ShipmentFilter};

pub const EMPTY_FILL: &str = "#FFFFFF";
pub const SELECTED_FILL: &str = "#1976d2";
pub const DENSITY_RGB: (u8, u8, u8) = (46, 125, 50);
pub const MIN_OPACITY: f64 = 0.1;
pub const OPACITY_STEP: f64 = 0.15;
pub const MAX_OPACITY: f64 = 0.9;

/// Shipment count per state on the `mode` axis.
#[must_use]
pub fn state_counts(all: &[ShipmentRecord], mode: MapMode) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for record in all {
        *counts.entry(mode.state_of(record).to_owned()).or_insert(0) += 1;
    }
    counts
}

/// Fill opacity for a state with `count` shipments: `min(0.1 + count * 0.15, 0.9)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fill_opacity(count: usize) -> f64 {
    (MIN_OPACITY + count as f64 * OPACITY_STEP).min(MAX_OPACITY)
}

/// How a region is painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegionFill {
    Selected,
    Empty,
    Density(f64),
}

impl RegionFill {
    /// CSS color for this fill.
    #[must_use]
    pub fn css(self) -> String {
        match self {
            Self::Selected => SELECTED_FILL.to_owned(),
            Self::Empty => EMPTY_FILL.to_owned(),
            Self::Density(opacity) => {
                let (r, g, b) = DENSITY_RGB;
                format!("rgba({r}, {g}, {b}, {})", round_opacity(opacity))
            }
        }
    }
}

/// Fill for `state` given its count and the active filter.
#[must_use]
pub fn region_fill(state: &str, count: usize, filter: &ShipmentFilter) -> RegionFill {
    if filter.is_selected(state) {
        RegionFill::Selected
    } else if count == 0 {
        RegionFill::Empty
    } else {
        RegionFill::Density(fill_opacity(count))
    }
}

/// Hover text, e.g. `"Texas: 3 shipments"`.
#[must_use]
pub fn tooltip(state: &str, count: usize) -> String {
    let noun = if count == 1 { "shipment" } else { "shipments" };
    format!("{state}: {count} {noun}")
}

/// Two decimals is enough for CSS and keeps `0.1 + 0.15 * n` float noise out
/// of the rendered string.
fn round_opacity(opacity: f64) -> f64 {
    (opacity * 100.0).round() / 100.0
}
