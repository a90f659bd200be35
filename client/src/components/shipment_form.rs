//! Modal add/edit form for a shipment.

use leptos::prelude::*;
use shipments::{ShipmentDraft, US_STATES, VehicleType};

use crate::state::dashboard::DashboardState;

fn edit_draft(dashboard: RwSignal<DashboardState>, apply: impl FnOnce(&mut ShipmentDraft)) {
    dashboard.update(|d| {
        if let Some(draft) = d.form.as_mut() {
            apply(draft);
        }
    });
}

fn read_draft<T: Default>(dashboard: RwSignal<DashboardState>, read: impl FnOnce(&ShipmentDraft) -> T) -> T {
    dashboard.with(|d| d.form.as_ref().map(read).unwrap_or_default())
}

/// Dialog shown while `DashboardState::form` is set.
#[component]
pub fn ShipmentFormDialog(
    dashboard: RwSignal<DashboardState>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = move || read_draft(dashboard, |d| d.title().to_owned());
    let origin = Signal::derive(move || read_draft(dashboard, |d| d.origin_state.clone()));
    let destination = Signal::derive(move || read_draft(dashboard, |d| d.destination_state.clone()));
    let vehicle = move || read_draft(dashboard, |d| d.vehicle_type);
    let error = move || dashboard.with(|d| d.form_error.clone());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--shipment" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_save.run(());
                }>
                    <label class="dialog__label">
                        "Origin State"
                        <StateSelect
                            value=origin
                            on_change=Callback::new(move |state: String| {
                                edit_draft(dashboard, |d| d.origin_state = state);
                            })
                        />
                    </label>
                    <label class="dialog__label">
                        "Destination State"
                        <StateSelect
                            value=destination
                            on_change=Callback::new(move |state: String| {
                                edit_draft(dashboard, |d| d.destination_state = state);
                            })
                        />
                    </label>
                    <label class="dialog__label">
                        "Description"
                        <input
                            class="dialog__input"
                            type="text"
                            required=true
                            prop:value=move || read_draft(dashboard, |d| d.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                edit_draft(dashboard, |d| d.description = value);
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Container Quantity"
                        <input
                            class="dialog__input"
                            type="number"
                            min="1"
                            step="1"
                            required=true
                            prop:value=move || read_draft(dashboard, |d| d.container_quantity.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                edit_draft(dashboard, |d| d.container_quantity = value);
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Vehicle Type"
                        <select
                            class="dialog__input"
                            required=true
                            on:change=move |ev| {
                                let parsed = event_target_value(&ev).parse::<VehicleType>().ok();
                                edit_draft(dashboard, |d| d.vehicle_type = parsed);
                            }
                        >
                            <option value="" disabled=true selected=move || vehicle().is_none()>
                                "Select a vehicle"
                            </option>
                            {VehicleType::ALL
                                .into_iter()
                                .map(|option| {
                                    view! {
                                        <option value=option.as_str() selected=move || vehicle() == Some(option)>
                                            {option.as_str()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <Show when=move || error().is_some()>
                        <p class="dialog__danger">{move || error().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Required `<select>` over the recognized states.
#[component]
fn StateSelect(value: Signal<String>, on_change: Callback<String>) -> impl IntoView {
    view! {
        <select
            class="dialog__input"
            required=true
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="" disabled=true selected=move || value.with(String::is_empty)>
                "Select a state"
            </option>
            {US_STATES
                .into_iter()
                .map(|name| {
                    view! {
                        <option value=name selected=move || value.with(|v| v == name)>
                            {name}
                        </option>
                    }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}
