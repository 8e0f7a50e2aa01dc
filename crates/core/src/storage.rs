//! Client-local key-value storage.
//!
//! The browser original leans on `localStorage`; here the same contract is a
//! small trait so the file-backed store can be swapped for an in-memory one
//! in tests. Reads and writes are synchronous and treated as best-effort: a
//! failed write is logged and otherwise ignored.

use std::{collections::HashMap, path::PathBuf};

use tracing::warn;

/// Persisted keys in use: `language`, `theme`, `history_<email>`.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// HashMap-backed store for tests and the desktop shell.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// One file per key under the platform data directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at the platform data dir (e.g. `~/.local/share/compentube`).
    pub fn open_default() -> Self {
        let root = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("compentube");
        Self::open(root)
    }

    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // History keys embed an email address; keep filesystem-safe characters
        // and map the rest so every key stays a single flat file name.
        let safe: String = key
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' | '.' | '@' => c,
                _ => '-',
            })
            .collect();
        self.root.join(format!("{safe}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.root) {
            warn!(key, error = %e, "could not create storage directory");
            return;
        }
        if let Err(e) = std::fs::write(self.path_for(key), value) {
            warn!(key, error = %e, "storage write failed");
        }
    }

    fn remove(&mut self, key: &str) {
        let _ = std::fs::remove_file(self.path_for(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);

        store.set("theme", "dark");
        assert_eq!(store.get("theme").as_deref(), Some("dark"));

        store.remove("theme");
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path());

        store.set("language", "tr");
        assert_eq!(store.get("language").as_deref(), Some("tr"));

        store.remove("language");
        assert_eq!(store.get("language"), None);
    }

    #[test]
    fn file_store_handles_email_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path());

        store.set("history_user@example.com", "[]");
        assert_eq!(store.get("history_user@example.com").as_deref(), Some("[]"));
        // A key with path separators must not escape the store root.
        store.set("history_../evil", "[]");
        assert_eq!(store.get("history_../evil").as_deref(), Some("[]"));
        assert!(dir.path().join("history_..-evil.json").exists());
    }
}
