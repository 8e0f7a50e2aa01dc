//! Per-user summary history, persisted as a JSON array in client-local
//! storage under `history_<email>`. Newest entries sit at the front; the
//! order is established at insertion time and deletion never reorders.

use tracing::warn;

use crate::{storage::KvStore, types::HistoryEntry};

pub fn history_key(email: &str) -> String {
    format!("history_{email}")
}

/// Load the full history for a user. A missing or unreadable list is an
/// empty one.
pub fn load(store: &impl KvStore, email: &str) -> Vec<HistoryEntry> {
    let Some(raw) = store.get(&history_key(email)) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(email, error = %e, "discarding unreadable history");
            Vec::new()
        }
    }
}

/// Prepend a new entry and write the list back. Runs synchronously with the
/// summarize response handling; a failed write is not retried or rolled back.
pub fn append(store: &mut impl KvStore, email: &str, entry: HistoryEntry) {
    let mut entries = load(store, email);
    entries.insert(0, entry);
    save(store, email, &entries);
}

/// Remove the entry with the given id. Returns whether anything was removed;
/// an unknown id is a no-op.
pub fn delete(store: &mut impl KvStore, email: &str, id: i64) -> bool {
    let mut entries = load(store, email);
    let before = entries.len();
    entries.retain(|entry| entry.id != id);
    if entries.len() == before {
        return false;
    }
    save(store, email, &entries);
    true
}

fn save(store: &mut impl KvStore, email: &str, entries: &[HistoryEntry]) {
    match serde_json::to_string(entries) {
        Ok(json) => store.set(&history_key(email), &json),
        Err(e) => warn!(email, error = %e, "could not encode history"),
    }
}
