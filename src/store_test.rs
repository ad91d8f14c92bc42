use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.get("theme").is_none());
}

#[test]
fn memory_store_set_then_get() {
    let mut store = MemoryStore::new();
    assert_eq!(store.set("theme", "dark"), Ok(()));
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn memory_store_overwrites() {
    let mut store = MemoryStore::with("theme", "dark");
    assert_eq!(store.set("theme", "light"), Ok(()));
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn memory_store_keys_are_independent() {
    let store = MemoryStore::with("theme", "dark");
    assert!(store.get("other").is_none());
}

#[test]
fn store_error_messages() {
    assert_eq!(StoreError::Unavailable.to_string(), "preference storage is unavailable");
    assert_eq!(StoreError::Rejected("quota".to_owned()).to_string(), "preference write rejected: quota");
}
