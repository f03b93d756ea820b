use super::*;

// =============================================================
// MemoryElement
// =============================================================

#[test]
fn add_and_remove_class() {
    let el = MemoryElement::new();
    el.add_class("hidden").unwrap();
    assert!(el.has_class("hidden"));
    el.remove_class("hidden").unwrap();
    assert!(!el.has_class("hidden"));
}

#[test]
fn remove_missing_class_is_noop() {
    let el = MemoryElement::with_classes(&["icon"]);
    el.remove_class("hidden").unwrap();
    assert_eq!(el.classes(), vec!["icon".to_owned()]);
}

#[test]
fn toggle_class_reports_new_presence() {
    let el = MemoryElement::new();
    assert!(el.toggle_class("light").unwrap());
    assert!(el.has_class("light"));
    assert!(!el.toggle_class("light").unwrap());
    assert!(!el.has_class("light"));
}

#[test]
fn set_class_is_idempotent() {
    let el = MemoryElement::new();
    el.set_class("hidden", true).unwrap();
    el.set_class("hidden", true).unwrap();
    assert_eq!(el.classes(), vec!["hidden".to_owned()]);
    el.set_class("hidden", false).unwrap();
    assert!(el.classes().is_empty());
}

#[test]
fn clones_share_class_set() {
    let el = MemoryElement::new();
    let handle = el.clone();
    handle.add_class("light").unwrap();
    assert!(el.has_class("light"));
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn storage_read_absent_is_none() {
    let store = MemoryStorage::new();
    assert_eq!(store.read("theme").unwrap(), None);
    assert!(store.is_empty());
}

#[test]
fn storage_write_then_read() {
    let store = MemoryStorage::new();
    store.write("theme", "light").unwrap();
    store.write("theme", "dark").unwrap();
    assert_eq!(store.read("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(store.len(), 1);
}

#[test]
fn storage_clones_share_entries() {
    let store = MemoryStorage::with_entry("theme", "light");
    let handle = store.clone();
    handle.write("theme", "dark").unwrap();
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}
