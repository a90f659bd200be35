//! Choropleth tile map of shipments per state, with the origin/destination
//! mode switch and legend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Counts are taken from the view's full list on the active mode's axis, so
//! the map keeps showing every state while the grid is filtered. Clicking a
//! tile reports the state name; the page applies the toggle rule.

use leptos::prelude::*;
use shipments::map::{self, EMPTY_FILL, SELECTED_FILL};
use shipments::{MapMode, ShipmentView};

use crate::state::ui::UiState;
use crate::util::state_tiles::{STATE_TILES, TILE_SIZE, grid_extent};

/// Interactive state map.
#[component]
pub fn ShipmentsMap(
    shipments: RwSignal<ShipmentView>,
    ui: RwSignal<UiState>,
    on_state_select: Callback<String>,
    on_mode_change: Callback<MapMode>,
) -> impl IntoView {
    let counts = Memo::new(move |_| shipments.with(|v| map::state_counts(v.all(), v.mode())));
    let count_of = move |name: &str| counts.with(|c| c.get(name).copied().unwrap_or(0));
    let (width, height) = grid_extent();

    let tooltip = move || {
        ui.with(|u| u.hovered_state.clone())
            .map(|name| map::tooltip(&name, count_of(&name)))
    };

    view! {
        <div class="shipments-map">
            <fieldset class="shipments-map__mode">
                {[MapMode::Origin, MapMode::Destination]
                    .into_iter()
                    .map(|mode| {
                        view! {
                            <label class="shipments-map__mode-option">
                                <input
                                    type="radio"
                                    name="map-mode"
                                    value=mode.as_str()
                                    prop:checked=move || shipments.with(|v| v.mode() == mode)
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        match MapMode::from_value(&value) {
                                            Some(mode) => on_mode_change.run(mode),
                                            None => leptos::logging::warn!("unknown map mode {value:?}"),
                                        }
                                    }
                                />
                                {mode.label()}
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </fieldset>
            <svg
                class="shipments-map__svg"
                viewBox=format!("0 0 {width} {height}")
                role="img"
                aria-label="Shipments per state"
            >
                {STATE_TILES
                    .into_iter()
                    .map(|tile| {
                        let name = tile.name;
                        let fill = move || {
                            shipments.with(|v| map::region_fill(name, count_of(name), v.filter()).css())
                        };
                        view! {
                            <g
                                class="shipments-map__tile"
                                on:click=move |_| on_state_select.run(name.to_owned())
                                on:mouseenter=move |_| ui.update(|u| u.hover(name))
                                on:mouseleave=move |_| ui.update(UiState::leave)
                            >
                                <rect
                                    x=tile.x().to_string()
                                    y=tile.y().to_string()
                                    width=TILE_SIZE.to_string()
                                    height=TILE_SIZE.to_string()
                                    rx="4"
                                    fill=fill
                                    stroke="#CCCCCC"
                                    stroke-width="0.75"
                                ></rect>
                                <text
                                    class="shipments-map__abbr"
                                    x=(tile.x() + TILE_SIZE / 2).to_string()
                                    y=(tile.y() + TILE_SIZE / 2 + 4).to_string()
                                    text-anchor="middle"
                                >
                                    {tile.abbr}
                                </text>
                            </g>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
            <div class="shipments-map__tooltip" aria-live="polite">
                {tooltip}
            </div>
            <MapLegend/>
        </div>
    }
}

/// Zero / density gradient / selected swatches.
#[component]
fn MapLegend() -> impl IntoView {
    let (r, g, b) = map::DENSITY_RGB;
    let gradient = format!(
        "background: linear-gradient(to right, rgba({r}, {g}, {b}, {}), rgba({r}, {g}, {b}, {}))",
        map::MIN_OPACITY,
        map::MAX_OPACITY
    );

    view! {
        <div class="shipments-map__legend">
            <div class="shipments-map__legend-title">"Shipments per State:"</div>
            <div class="shipments-map__legend-row">
                <span
                    class="shipments-map__swatch shipments-map__swatch--empty"
                    style=format!("background: {EMPTY_FILL}")
                ></span>
                <span>"0"</span>
                <span class="shipments-map__swatch shipments-map__swatch--gradient" style=gradient></span>
                <span>"More Shipments →"</span>
                <span class="shipments-map__swatch" style=format!("background: {SELECTED_FILL}")></span>
                <span>"Selected"</span>
            </div>
        </div>
    }
}
