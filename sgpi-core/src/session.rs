//! Session-scoped key/value cache.
//!
//! Entries live as long as the session (for the CLI, the process) and are
//! shared by every view in it. Values are JSON text, one well-known key per
//! resource.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::{debug, warn};

use crate::record::Record;
use crate::resource::Resource;

/// Minimal key/value capability the catalog sync needs.
///
/// Each call is atomic from the caller's point of view; the last write wins.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

/// Process-lifetime [`SessionStore`].
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        // A poisoned lock still holds consistent strings; keep serving them.
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
    }
}

/// Read the cached records of `resource`. Unreadable entries count as a miss.
pub fn read_records(store: &dyn SessionStore, resource: Resource) -> Option<Vec<Record>> {
    let raw = store.get(resource.cache_key())?;

    match serde_json::from_str::<Vec<Record>>(&raw) {
        Ok(records) => {
            debug!(%resource, count = records.len(), "session cache hit");
            Some(records)
        }
        Err(e) => {
            warn!(%resource, error = %e, "ignoring unreadable session cache entry");
            None
        }
    }
}

/// Overwrite the cached records of `resource`.
pub fn write_records(store: &dyn SessionStore, resource: Resource, records: &[Record]) {
    match serde_json::to_string(records) {
        Ok(json) => store.set(resource.cache_key(), json),
        Err(e) => warn!(%resource, error = %e, "could not serialize catalog for session cache"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_records_under_resource_key() {
        let store = MemorySessionStore::new();
        let records = vec![Record::from_pairs([("name", "Dr. Iyer")])];

        write_records(&store, Resource::Members, &records);

        assert!(store.get("members_data").is_some());
        assert_eq!(read_records(&store, Resource::Members), Some(records));
        assert_eq!(read_records(&store, Resource::Events), None);
    }

    #[test]
    fn corrupt_entry_is_a_miss() {
        let store = MemorySessionStore::new();
        store.set("events_data", "{not json".to_string());
        assert_eq!(read_records(&store, Resource::Events), None);
    }

    #[test]
    fn last_write_wins() {
        let store = MemorySessionStore::new();
        store.set("k", "1".into());
        store.set("k", "2".into());
        assert_eq!(store.get("k").as_deref(), Some("2"));

        store.remove("k");
        assert_eq!(store.get("k"), None);
    }
}
