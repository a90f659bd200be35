//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use shipments::{DashboardConfig, MapMode, MemoryBackend, ShipmentStore, ShipmentView, StoreConfig};

use crate::pages::dashboard::DashboardPage;
use crate::state::dashboard::DashboardState;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::local_storage::{BrowserBackend, DashboardStore, load_dashboard};

/// Open the persisted store, or an empty in-memory one if even the bundled
/// seed cannot be loaded.
fn open_store(config: StoreConfig, mode: MapMode) -> (DashboardStore, ShipmentView) {
    match load_dashboard(config.clone(), mode) {
        Ok(loaded) => loaded,
        Err(err) => {
            leptos::logging::warn!("shipment store unavailable ({err}); starting empty");
            let store = ShipmentStore::with_seed(BrowserBackend::Memory(MemoryBackend::new()), config, Vec::new());
            (store, ShipmentView::new(mode))
        }
    }
}

/// Root application component.
///
/// Provides the store and the page state signals.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = DashboardConfig::default();
    let (store, view) = open_store(StoreConfig::default(), config.initial_mode);

    let dark = dark_mode::read_preference();
    dark_mode::apply(dark);

    provide_context(StoredValue::new(store));
    provide_context(RwSignal::new(view));
    provide_context(RwSignal::new(DashboardState::new(config)));
    provide_context(RwSignal::new(UiState { dark_mode: dark, hovered_state: None }));

    view! {
        <Title text="Shipment Dashboard"/>
        <DashboardPage/>
    }
}
