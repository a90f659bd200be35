use super::*;
use crate::backend::MemoryBackend;
use crate::model::VehicleType;

const KEY: &str = "shipments-db";

fn record(id: u64, origin: &str, destination: &str) -> ShipmentRecord {
    ShipmentRecord {
        id,
        origin_state: origin.to_owned(),
        destination_state: destination.to_owned(),
        description: format!("Cargo {id}"),
        container_quantity: 1,
        vehicle_type: VehicleType::Truck,
    }
}

fn parts_draft() -> NewShipment {
    NewShipment {
        origin_state: "Texas".to_owned(),
        destination_state: "Ohio".to_owned(),
        description: "Parts".to_owned(),
        container_quantity: 4,
        vehicle_type: VehicleType::Truck,
    }
}

fn store_with(records: Vec<ShipmentRecord>) -> ShipmentStore<MemoryBackend> {
    let raw = serde_json::json!({ "shipments": records }).to_string();
    ShipmentStore::with_seed(MemoryBackend::with_entry(KEY, raw), StoreConfig::default(), Vec::new())
}

fn empty_store() -> ShipmentStore<MemoryBackend> {
    store_with(Vec::new())
}

fn ids(records: &[ShipmentRecord]) -> Vec<u64> {
    records.iter().map(|r| r.id).collect()
}

struct BrokenBackend;

impl StorageBackend for BrokenBackend {
    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Storage("localStorage disabled".to_owned()))
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Storage("localStorage disabled".to_owned()))
    }
}

// =============================================================
// Seeding
// =============================================================

#[test]
fn get_all_seeds_absent_document_once() {
    let seed = vec![record(1, "Texas", "Ohio"), record(2, "Ohio", "Utah")];
    let mut store = ShipmentStore::with_seed(MemoryBackend::new(), StoreConfig::default(), seed.clone());

    assert_eq!(store.get_all().unwrap(), seed);
    assert_eq!(store.backend().write_count(), 1);

    assert_eq!(store.get_all().unwrap(), seed);
    assert_eq!(store.backend().write_count(), 1);
}

#[test]
fn new_store_seeds_from_bundled_dataset() {
    let mut store = ShipmentStore::new(MemoryBackend::new(), StoreConfig::default()).unwrap();
    let all = store.get_all().unwrap();
    assert_eq!(all, crate::seed::default_shipments().unwrap());
    assert!(store.backend().raw(KEY).is_some());
}

#[test]
fn existing_document_is_loaded_as_is() {
    let mut store = store_with(vec![record(5, "Iowa", "Ohio")]);
    assert_eq!(ids(&store.get_all().unwrap()), vec![5]);
    assert_eq!(store.backend().write_count(), 0);
}

#[test]
fn document_without_collection_is_seeded() {
    let seed = vec![record(1, "Texas", "Ohio")];
    let backend = MemoryBackend::with_entry(KEY, "{}");
    let mut store = ShipmentStore::with_seed(backend, StoreConfig::default(), seed.clone());
    assert_eq!(store.get_all().unwrap(), seed);
}

#[test]
fn seeding_disabled_yields_empty_collection_without_writing() {
    let mut store = ShipmentStore::new(MemoryBackend::new(), StoreConfig { seed_on_empty: false, ..StoreConfig::default() }).unwrap();
    assert!(store.get_all().unwrap().is_empty());
    assert_eq!(store.backend().write_count(), 0);
}

#[test]
fn custom_storage_key_is_respected() {
    let config = StoreConfig { storage_key: "alt".to_owned(), ..StoreConfig::default() };
    let mut store = ShipmentStore::with_seed(MemoryBackend::new(), config, vec![record(1, "Texas", "Ohio")]);
    store.get_all().unwrap();
    assert!(store.backend().raw("alt").is_some());
    assert!(store.backend().raw(KEY).is_none());
}

// =============================================================
// get_all
// =============================================================

#[test]
fn get_all_is_idempotent() {
    let mut store = store_with(vec![record(1, "Texas", "Ohio"), record(2, "Ohio", "Texas")]);
    let first = store.get_all().unwrap();
    let second = store.get_all().unwrap();
    assert_eq!(first, second);
}

#[test]
fn corrupt_document_is_reported() {
    let backend = MemoryBackend::with_entry(KEY, "{not json");
    let mut store = ShipmentStore::with_seed(backend, StoreConfig::default(), Vec::new());
    assert!(matches!(store.get_all(), Err(StoreError::Corrupt(_))));
}

#[test]
fn backend_failures_propagate() {
    let mut store = ShipmentStore::with_seed(BrokenBackend, StoreConfig::default(), Vec::new());
    assert!(matches!(store.get_all(), Err(StoreError::Storage(_))));
    assert!(matches!(store.add(parts_draft()), Err(StoreError::Storage(_))));
}

// =============================================================
// add
// =============================================================

#[test]
fn add_to_empty_store_assigns_base_id() {
    let mut store = empty_store();
    let added = store.add(parts_draft()).unwrap();
    assert_eq!(added, parts_draft().with_id(1));
    assert_eq!(store.get_all().unwrap().len(), 1);
}

#[test]
fn add_assigns_max_plus_one() {
    let mut store = store_with(vec![record(1, "Texas", "Ohio"), record(2, "Ohio", "Texas")]);
    assert_eq!(store.add(parts_draft()).unwrap().id, 3);
}

#[test]
fn add_uses_max_not_length_when_ids_have_gaps() {
    let mut store = store_with(vec![record(9, "Texas", "Ohio"), record(2, "Ohio", "Texas")]);
    assert_eq!(store.add(parts_draft()).unwrap().id, 10);
}

#[test]
fn repeated_adds_produce_distinct_increasing_ids() {
    let mut store = empty_store();
    let mut seen = Vec::new();
    for _ in 0..5 {
        let previous_max = seen.iter().copied().max().unwrap_or(0);
        let id = store.add(parts_draft()).unwrap().id;
        assert_eq!(id, previous_max + 1);
        seen.push(id);
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);
}

#[test]
fn add_persists_full_document() {
    let mut store = empty_store();
    store.add(parts_draft()).unwrap();
    let raw = store.backend().raw(KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(raw).unwrap();
    assert_eq!(value["shipments"][0]["originState"], "Texas");
    assert_eq!(value["shipments"][0]["id"], 1);
}

#[test]
fn add_respects_configured_base_id() {
    let config = StoreConfig { base_id: 1000, seed_on_empty: false, ..StoreConfig::default() };
    let mut store = ShipmentStore::with_seed(MemoryBackend::new(), config, Vec::new());
    assert_eq!(store.add(parts_draft()).unwrap().id, 1000);
    assert_eq!(store.add(parts_draft()).unwrap().id, 1001);
}

// =============================================================
// update
// =============================================================

#[test]
fn update_replaces_in_place_and_preserves_order() {
    let mut store = store_with(vec![record(1, "Texas", "Ohio"), record(3, "Iowa", "Utah"), record(2, "Ohio", "Texas")]);
    let mut changed = record(3, "Maine", "Utah");
    changed.description = "Lobster".to_owned();

    assert_eq!(store.update(changed.clone()).unwrap(), Some(changed.clone()));

    let all = store.get_all().unwrap();
    assert_eq!(ids(&all), vec![1, 3, 2]);
    assert_eq!(all[1], changed);
    assert_eq!(all[0], record(1, "Texas", "Ohio"));
    assert_eq!(all[2], record(2, "Ohio", "Texas"));
}

#[test]
fn update_unknown_id_returns_none_and_skips_write() {
    let mut store = store_with(vec![record(1, "Texas", "Ohio"), record(2, "Ohio", "Texas")]);
    let before = store.get_all().unwrap();
    assert_eq!(store.update(record(99, "Texas", "Ohio")).unwrap(), None);
    assert_eq!(store.get_all().unwrap(), before);
    assert_eq!(store.backend().write_count(), 0);
}

// =============================================================
// delete
// =============================================================

#[test]
fn delete_removes_only_matching_record() {
    let mut store = store_with(vec![record(1, "Texas", "Ohio"), record(2, "Ohio", "Texas"), record(3, "Iowa", "Utah")]);
    let before = store.get_all().unwrap();
    store.delete(2).unwrap();
    let expected: Vec<ShipmentRecord> = before.into_iter().filter(|r| r.id != 2).collect();
    assert_eq!(store.get_all().unwrap(), expected);
}

#[test]
fn delete_unknown_id_is_noop() {
    let mut store = store_with(vec![record(1, "Texas", "Ohio")]);
    let before = store.get_all().unwrap();
    store.delete(42).unwrap();
    assert_eq!(store.get_all().unwrap(), before);
    assert_eq!(store.backend().write_count(), 0);
}

#[test]
fn delete_then_add_reuses_nothing_below_current_max() {
    let mut store = store_with(vec![record(1, "Texas", "Ohio"), record(2, "Ohio", "Texas")]);
    store.delete(1).unwrap();
    assert_eq!(store.add(parts_draft()).unwrap().id, 3);
}

#[test]
fn deleting_last_record_then_adding_restarts_at_base_id() {
    let mut store = store_with(vec![record(4, "Texas", "Ohio")]);
    store.delete(4).unwrap();
    assert!(store.get_all().unwrap().is_empty());
    assert_eq!(store.add(parts_draft()).unwrap().id, 1);
}

// =============================================================
// next_id
// =============================================================

#[test]
fn next_id_handles_empty_and_populated() {
    assert_eq!(next_id(&[], 1), Some(1));
    assert_eq!(next_id(&[record(4, "Texas", "Ohio")], 1), Some(5));
}

#[test]
fn next_id_keeps_zero_base_positive() {
    assert_eq!(next_id(&[], 0), Some(1));
}

#[test]
fn next_id_stops_at_u64_max() {
    assert_eq!(next_id(&[record(u64::MAX, "Texas", "Ohio")], 1), None);
}

#[test]
fn add_after_max_id_reports_exhausted_id_space_without_writing() {
    let mut store = store_with(vec![record(u64::MAX, "Texas", "Ohio")]);
    let writes = store.backend().write_count();

    let err = store.add(parts_draft()).unwrap_err();
    assert!(matches!(err, StoreError::IdSpaceExhausted));
    assert_eq!(store.backend().write_count(), writes);
    assert_eq!(ids(&store.get_all().unwrap()), vec![u64::MAX]);
}
