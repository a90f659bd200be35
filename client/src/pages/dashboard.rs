//! Shipment dashboard page: grid, map, dialogs, and the create animation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. `App` provides the store (`StoredValue<DashboardStore>`)
//! and three signals: the shipment view, the dashboard chrome state, and the
//! UI chrome state. Components report intent through callbacks; every data
//! change is routed through the store here and the view re-derives from it.
//!
//! ERROR HANDLING
//! ==============
//! Store failures are logged and surfaced in a dismissible banner. The view
//! keeps its last good lists when an operation fails.

use leptos::prelude::*;
use shipments::{MapMode, ShipmentView, StoreError, VehicleType};

use crate::components::delete_dialog::DeleteShipmentDialog;
use crate::components::shipment_animation::ShipmentAnimation;
use crate::components::shipment_form::ShipmentFormDialog;
use crate::components::shipment_grid::ShipmentGrid;
use crate::components::shipments_map::ShipmentsMap;
use crate::state::dashboard::DashboardState;
use crate::state::ui::UiState;
use crate::util::local_storage::DashboardStore;

/// Run `op` against the store and the view, surfacing failures in the banner.
fn run_store<T>(
    store: StoredValue<DashboardStore>,
    shipments: RwSignal<ShipmentView>,
    dashboard: RwSignal<DashboardState>,
    op: impl FnOnce(&mut DashboardStore, &mut ShipmentView, &mut DashboardState) -> Result<T, StoreError>,
) -> Option<T> {
    let result = store
        .try_update_value(|store| {
            shipments.try_update(|view| dashboard.try_update(|state| op(store, view, state)))
        })
        .flatten()
        .flatten()?;
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            leptos::logging::warn!("shipment store operation failed: {err}");
            dashboard.update(|d| d.error = Some(err.to_string()));
            None
        }
    }
}

/// Clear the animation once it has crossed the map.
fn schedule_animation_end(dashboard: RwSignal<DashboardState>) {
    #[cfg(feature = "csr")]
    {
        let millis = dashboard.with_untracked(|d| d.config.animation_ms);
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(millis))).await;
            dashboard.update(DashboardState::end_animation);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        dashboard.update(DashboardState::end_animation);
    }
}

/// Dashboard page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<StoredValue<DashboardStore>>();
    let shipments = expect_context::<RwSignal<ShipmentView>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let persistent = store.with_value(|s| s.backend().is_persistent());

    // Map.
    let on_state_select = Callback::new(move |state: String| {
        shipments.update(|v| v.select_state(&state));
        let rows = shipments.with_untracked(|v| v.filtered().len());
        dashboard.update(|d| d.clamp_page(rows));
    });
    let on_clear_filter = move |_| {
        shipments.update(ShipmentView::clear_selection);
        let rows = shipments.with_untracked(|v| v.filtered().len());
        dashboard.update(|d| d.clamp_page(rows));
    };
    let on_mode_change = Callback::new(move |mode: MapMode| {
        shipments.update(|v| v.set_mode(mode));
        let rows = shipments.with_untracked(|v| v.filtered().len());
        dashboard.update(|d| d.clamp_page(rows));
    });

    // Grid.
    let on_vehicle_change = Callback::new(move |(id, vehicle): (u64, VehicleType)| {
        let updated = run_store(store, shipments, dashboard, |store, view, state| {
            let updated = view.set_vehicle_type(store, id, vehicle)?;
            state.clamp_page(view.filtered().len());
            Ok(updated)
        });
        if matches!(updated, Some(None)) {
            dashboard.update(|d| d.error = Some(format!("Shipment {id} no longer exists")));
        }
    });
    let on_edit = Callback::new(move |id: u64| {
        let record = shipments.with_untracked(|v| v.find(id).cloned());
        match record {
            Some(record) => dashboard.update(|d| d.open_edit(&record)),
            None => leptos::logging::warn!("edit requested for unknown shipment {id}"),
        }
    });
    let on_delete_request = Callback::new(move |id: u64| dashboard.update(|d| d.request_delete(id)));

    // Dialogs.
    let on_add = move |_| {
        let filter = shipments.with_untracked(|v| v.filter().clone());
        dashboard.update(|d| d.open_add(&filter));
    };
    let on_form_cancel = Callback::new(move |()| dashboard.update(DashboardState::close_form));
    let on_form_save = Callback::new(move |()| {
        let animated = run_store(store, shipments, dashboard, |store, view, state| state.submit_form(view, store));
        if let Some(Some(vehicle)) = animated {
            leptos::logging::log!("shipment created; animating {vehicle}");
            schedule_animation_end(dashboard);
        }
    });
    let on_delete_cancel = Callback::new(move |()| dashboard.update(DashboardState::cancel_delete));
    let on_delete_confirm = Callback::new(move |()| {
        run_store(store, shipments, dashboard, |store, view, state| state.confirm_delete(view, store));
    });

    let animation = Signal::derive(move || dashboard.with(|d| d.animation));
    let error = move || dashboard.with(|d| d.error.clone());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Shipment Data"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <button class="btn btn--primary toolbar__add" on:click=on_add>
                    "+ Add Shipment"
                </button>
                <span class="toolbar__filter">
                    {move || {
                        shipments
                            .with(|v| v.selected_state().map(|s| format!("{}: {s}", v.mode().label())))
                    }}
                </span>
                <Show when=move || shipments.with(|v| v.selected_state().is_some())>
                    <button class="btn btn--icon toolbar__clear-filter" title="Clear filter" on:click=on_clear_filter>
                        "✕"
                    </button>
                </Show>

                <span class="toolbar__spacer"></span>

                <button
                    class="btn toolbar__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
            </header>

            <Show when=move || !persistent>
                <p class="dashboard-page__notice">
                    "Browser storage is unavailable; changes will be lost on reload."
                </p>
            </Show>
            <Show when=move || error().is_some()>
                <p class="dashboard-page__error">
                    {move || error().unwrap_or_default()}
                    <button
                        class="btn btn--icon"
                        title="Dismiss"
                        on:click=move |_| dashboard.update(DashboardState::dismiss_error)
                    >
                        "✕"
                    </button>
                </p>
            </Show>

            <main class="dashboard-page__body">
                <section class="dashboard-page__grid">
                    <ShipmentGrid
                        shipments=shipments
                        dashboard=dashboard
                        on_vehicle_change=on_vehicle_change
                        on_edit=on_edit
                        on_delete=on_delete_request
                    />
                </section>
                <section class="dashboard-page__map">
                    <ShipmentsMap
                        shipments=shipments
                        ui=ui
                        on_state_select=on_state_select
                        on_mode_change=on_mode_change
                    />
                    <ShipmentAnimation vehicle=animation/>
                </section>
            </main>

            <Show when=move || dashboard.with(|d| d.form.is_some())>
                <ShipmentFormDialog dashboard=dashboard on_save=on_form_save on_cancel=on_form_cancel/>
            </Show>
            <Show when=move || dashboard.with(|d| d.pending_delete.is_some())>
                <DeleteShipmentDialog on_confirm=on_delete_confirm on_cancel=on_delete_cancel/>
            </Show>
        </div>
    }
}
