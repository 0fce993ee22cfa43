use super::*;

#[test]
fn get_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme"), None);
}

#[test]
fn set_then_get_returns_latest_value() {
    let store = MemoryStore::new();
    store.set("theme", "dark").unwrap();
    store.set("theme", "light").unwrap();
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn keys_are_independent() {
    let store = MemoryStore::new();
    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("other"), None);
}
