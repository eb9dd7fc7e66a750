// Integration tests for seed loading, configuration and the read-side projections
use courier_dispatch::utils::filter::{displayed_orders, filter_orders, FilterMode};
use courier_dispatch::utils::init_fleet::{demo_orders, load_seed, Seed};
use courier_dispatch::utils::plot::chart_data;
use courier_dispatch::{AssignmentEngine, DispatchError, EngineConfig, OrderAssigner};
use std::fs;
use std::path::PathBuf;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("courier_dispatch_{}_{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_filter_orders_by_customer() {
    let orders = demo_orders();
    let matches = filter_orders(&orders, "ali");

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].customer, "Alice");
}

#[test]
fn test_load_seed_and_config_from_files() {
    let seed_path = temp_file(
        "seed.json",
        r#"{
            "couriers": [
                { "id": "A", "name": "Ann", "location": { "x": 0, "y": 0 }, "currentLoad": 0, "maxLoad": 5 },
                { "id": "B", "name": "Ben", "location": { "x": 10, "y": 0 }, "currentLoad": 0, "maxLoad": 5 }
            ],
            "orders": [
                { "id": "X", "destination": { "x": 4, "y": 0 }, "priority": 2, "customer": "Xavier" },
                { "id": "Y", "destination": { "x": 6, "y": 0 }, "priority": 1, "customer": "Yvonne" }
            ]
        }"#,
    );
    let config_path = temp_file("config.json", r#"{ "relocateOnAssign": false }"#);

    let seed = load_seed(&seed_path).unwrap();
    let config = EngineConfig::from_file(&config_path).unwrap();
    fs::remove_file(&seed_path).ok();
    fs::remove_file(&config_path).ok();

    assert!(!config.relocate_on_assign);
    let mut engine = AssignmentEngine::from_seed(seed, config).unwrap();
    let couriers: Vec<String> = engine
        .assign_all()
        .unwrap()
        .into_iter()
        .map(|a| a.courier_id)
        .collect();
    assert_eq!(couriers, vec!["A", "B"]);
}

#[test]
fn test_invalid_seed_is_rejected() {
    let json = r#"{
        "couriers": [
            { "id": "A", "name": "Ann", "location": { "x": 0, "y": 0 }, "currentLoad": 6, "maxLoad": 5 }
        ],
        "orders": []
    }"#;
    let seed = Seed::from_json_str(json).unwrap();

    let result = AssignmentEngine::from_seed(seed, EngineConfig::default());
    assert!(matches!(result, Err(DispatchError::OverCapacity { .. })));
}

#[test]
fn test_missing_seed_file() {
    let result = load_seed("no/such/seed.json");
    assert!(matches!(result, Err(DispatchError::Io(_))));
}

#[test]
fn test_listing_follows_engine_state() {
    let mut engine = AssignmentEngine::with_demo_fleet(EngineConfig::default()).unwrap();
    engine.assign_next_order().unwrap();
    engine.assign_next_order().unwrap();

    let ids = |mode| -> Vec<String> {
        displayed_orders(engine.pending(), engine.assigned(), "", mode)
            .iter()
            .map(|o| o.id.clone())
            .collect()
    };
    assert_eq!(ids(FilterMode::Pending), vec!["O2", "O3", "O4", "O6"]);
    assert_eq!(ids(FilterMode::Assigned), vec!["O1", "O5"]);
    assert_eq!(ids(FilterMode::All), vec!["O2", "O3", "O4", "O6", "O1", "O5"]);

    // Assigned orders leave the map
    let data = chart_data(engine.couriers(), engine.pending(), "");
    assert_eq!(data.orders.len(), 4);
    let d5 = data.couriers.iter().find(|p| p.label == "Alex").unwrap();
    assert_eq!((d5.x, d5.y), (55.0, 45.0));
}

#[test]
fn test_snapshot_serializes_camel_case() {
    let mut engine = AssignmentEngine::with_demo_fleet(EngineConfig::default()).unwrap();
    engine.assign_next_order().unwrap();

    let json = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(json["assigned"][0]["assignedTo"], "D5");
    assert_eq!(json["couriers"][4]["currentLoad"], 5);
    assert_eq!(json["pending"].as_array().unwrap().len(), 5);
}
