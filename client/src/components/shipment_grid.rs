//! Paged shipment table with inline vehicle editing and row actions.
//!
//! DESIGN
//! ======
//! Rows come from the view's `filtered` list, sliced to the current page.
//! The grid never mutates shipments itself; every edit is reported through a
//! callback so the page can route it through the store.

use leptos::prelude::*;
use shipments::{ShipmentRecord, ShipmentView, VehicleType, grid};

use crate::state::dashboard::DashboardState;

/// Shipment table for the dashboard.
#[component]
pub fn ShipmentGrid(
    shipments: RwSignal<ShipmentView>,
    dashboard: RwSignal<DashboardState>,
    on_vehicle_change: Callback<(u64, VehicleType)>,
    on_edit: Callback<u64>,
    on_delete: Callback<u64>,
) -> impl IntoView {
    let total = move || shipments.with(|v| v.filtered().len());
    let page_rows = move || {
        let (page, size) = dashboard.with(|d| (d.page, d.page_size));
        shipments.with(|v| grid::page_slice(v.filtered(), page, size).to_vec())
    };
    let range = move || dashboard.with(|d| grid::range_label(total(), d.page, d.page_size));
    let size_options = dashboard.with_untracked(|d| d.config.page_size_options.clone());

    view! {
        <div class="shipment-grid">
            <table class="shipment-grid__table">
                <thead>
                    <tr>
                        <th class="shipment-grid__num">"ID"</th>
                        <th>"Origin State"</th>
                        <th>"Destination State"</th>
                        <th>"Description"</th>
                        <th class="shipment-grid__num">"Containers"</th>
                        <th>"Vehicle Type"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || { total() == 0 }>
                        <tr>
                            <td class="shipment-grid__empty" colspan="7">"No shipments"</td>
                        </tr>
                    </Show>
                    {move || {
                        page_rows()
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <ShipmentRow
                                        row=row
                                        on_vehicle_change=on_vehicle_change
                                        on_edit=on_edit
                                        on_delete=on_delete
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <div class="shipment-grid__footer">
                <label class="shipment-grid__page-size">
                    "Rows per page"
                    <select on:change=move |ev| {
                        let rows = total();
                        match event_target_value(&ev).parse::<usize>() {
                            Ok(size) => dashboard.update(|d| d.set_page_size(size, rows)),
                            Err(err) => leptos::logging::warn!("page size not a number: {err}"),
                        }
                    }>
                        {size_options
                            .into_iter()
                            .map(|size| {
                                view! {
                                    <option
                                        value=size.to_string()
                                        selected=move || dashboard.with(|d| d.page_size == size)
                                    >
                                        {size.to_string()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <span class="shipment-grid__range">{range}</span>
                <button
                    class="btn btn--icon"
                    title="Previous page"
                    disabled=move || dashboard.with(|d| d.page == 0)
                    on:click=move |_| dashboard.update(DashboardState::prev_page)
                >
                    "‹"
                </button>
                <button
                    class="btn btn--icon"
                    title="Next page"
                    disabled=move || dashboard.with(|d| d.page + 1 >= d.page_count(total()))
                    on:click=move |_| {
                        let rows = total();
                        dashboard.update(|d| d.next_page(rows));
                    }
                >
                    "›"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ShipmentRow(
    row: ShipmentRecord,
    on_vehicle_change: Callback<(u64, VehicleType)>,
    on_edit: Callback<u64>,
    on_delete: Callback<u64>,
) -> impl IntoView {
    let id = row.id;
    let current = row.vehicle_type;

    view! {
        <tr class="shipment-grid__row">
            <td class="shipment-grid__num">{id.to_string()}</td>
            <td>{row.origin_state}</td>
            <td>{row.destination_state}</td>
            <td>{row.description}</td>
            <td class="shipment-grid__num">{row.container_quantity.to_string()}</td>
            <td>
                <select
                    class="shipment-grid__vehicle"
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<VehicleType>() {
                            Ok(vehicle) => on_vehicle_change.run((id, vehicle)),
                            Err(err) => leptos::logging::warn!("{err}"),
                        }
                    }
                >
                    {VehicleType::ALL
                        .into_iter()
                        .map(|vehicle| {
                            view! {
                                <option value=vehicle.as_str() selected=vehicle == current>
                                    {vehicle.as_str()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </td>
            <td class="shipment-grid__actions">
                <button
                    class="btn btn--icon shipment-grid__edit"
                    title="Edit shipment"
                    aria-label="Edit shipment"
                    on:click=move |_| on_edit.run(id)
                >
                    "✎"
                </button>
                <button
                    class="btn btn--icon btn--danger shipment-grid__delete"
                    title="Delete shipment"
                    aria-label="Delete shipment"
                    on:click=move |_| on_delete.run(id)
                >
                    "✕"
                </button>
            </td>
        </tr>
    }
}
