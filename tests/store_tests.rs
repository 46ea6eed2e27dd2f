mod common;
use common::{entry, init_data_with_entries, sample_entries, setup_test_data, ts};
use std::fs;
use timeloom::models::TimeEntry;
use timeloom::store::RecordStore;

#[test]
fn test_missing_file_loads_empty() {
    let path = setup_test_data("store_missing");
    let store = RecordStore::new(&path);
    assert!(store.load().is_empty());
}

#[test]
fn test_corrupt_file_loads_empty() {
    let path = setup_test_data("store_corrupt");
    fs::write(&path, "{ this is not json").expect("write corrupt file");

    let store = RecordStore::new(&path);
    assert!(store.load().is_empty());
}

#[test]
fn test_save_load_round_trip_is_idempotent() {
    let path = setup_test_data("store_round_trip");
    let store = init_data_with_entries(&path);

    let first = fs::read_to_string(&path).expect("read data");
    store.save(&store.load()).expect("save again");
    let second = fs::read_to_string(&path).expect("read data");

    assert_eq!(first, second);
    assert_eq!(store.load(), sample_entries());
}

#[test]
fn test_file_uses_expected_field_names_and_format() {
    let path = setup_test_data("store_field_names");
    init_data_with_entries(&path);

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
    let first = &raw[0];

    assert_eq!(first["task"], "Write report");
    assert_eq!(first["category"], "Work");
    assert_eq!(first["start"], "2025-09-01 09:00:00");
    assert_eq!(first["end"], "2025-09-01 10:30:00");
    assert_eq!(first["duration_mins"], 90.0);
}

#[test]
fn test_running_entry_omits_end_and_duration() {
    let path = setup_test_data("store_running_entry");
    let store = RecordStore::new(&path);
    store
        .append(&TimeEntry::running("Draft", "Work", ts("2025-09-03 10:00:00")))
        .expect("append");

    let content = fs::read_to_string(&path).expect("read");
    assert!(!content.contains("\"end\""));
    assert!(!content.contains("duration_mins"));
    assert!(store.load()[0].is_running());
}

#[test]
fn test_append_adds_entry_at_the_end() {
    let path = setup_test_data("store_append");
    let store = init_data_with_entries(&path);
    let before = store.load();

    let new = entry("Gym", "Health", "2025-09-03 18:00:00", "2025-09-03 19:00:00");
    store.append(&new).expect("append");

    let after = store.load();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last(), Some(&new));
}

#[test]
fn test_delete_valid_index_shifts_later_entries() {
    let path = setup_test_data("store_delete_valid");
    let store = init_data_with_entries(&path);
    let before = store.load();

    assert!(store.delete(1).expect("delete"));

    let after = store.load();
    assert_eq!(after.len(), 2);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[2]);
}

#[test]
fn test_delete_invalid_index_leaves_store_unchanged() {
    let path = setup_test_data("store_delete_invalid");
    let store = init_data_with_entries(&path);
    let before = fs::read_to_string(&path).expect("read");

    assert!(!store.delete(3).expect("delete"));
    assert!(!store.delete(usize::MAX).expect("delete"));

    assert_eq!(fs::read_to_string(&path).expect("read"), before);
}

#[test]
fn test_replace_valid_and_invalid_index() {
    let path = setup_test_data("store_replace");
    let store = init_data_with_entries(&path);

    let new = entry("Refactor", "Work", "2025-09-04 09:00:00", "2025-09-04 09:15:00");
    assert!(store.replace(2, &new).expect("replace"));
    assert_eq!(store.load()[2], new);

    assert!(!store.replace(10, &new).expect("replace"));
    assert_eq!(store.load().len(), 3);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("deeper").join("data.json");
    let store = RecordStore::new(&path);

    store.save(&sample_entries()).expect("save");
    assert_eq!(store.load().len(), 3);
}
