//! Confirmation dialog shown before a shipment is deleted.

use leptos::prelude::*;

/// Asks before deleting; only "Delete" reaches the store.
#[component]
pub fn DeleteShipmentDialog(on_confirm: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Confirm Delete"</h2>
                <p class="dialog__danger">
                    "Are you sure you want to delete this shipment? This action cannot be undone."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" autofocus=true on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
