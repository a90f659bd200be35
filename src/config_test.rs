use super::*;

#[test]
fn store_config_defaults() {
    let cfg = StoreConfig::default();
    assert_eq!(cfg.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(cfg.storage_key, "shipments-db");
    assert_eq!(cfg.base_id, 1);
    assert!(cfg.seed_on_empty);
}

#[test]
fn dashboard_config_defaults() {
    let cfg = DashboardConfig::default();
    assert_eq!(cfg.page_size, 10);
    assert_eq!(cfg.page_size_options, vec![5, 10, 20]);
    assert_eq!(cfg.animation_ms, 2000);
    assert_eq!(cfg.initial_mode, MapMode::Origin);
}

#[test]
fn normalize_page_size_accepts_only_offered_options() {
    let cfg = DashboardConfig::default();
    assert_eq!(cfg.normalize_page_size(20), 20);
    assert_eq!(cfg.normalize_page_size(5), 5);
    assert_eq!(cfg.normalize_page_size(7), 10);
    assert_eq!(cfg.normalize_page_size(0), 10);
}
