use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::Mutex,
};

const APP_NAME: &str = "manabi";

pub mod keys {
    pub const KNOWN_WORDS: &str = "known_words";
    pub const LEARNING_WORDS: &str = "learning_words";
    pub const READING_STATS: &str = "reading_stats";
    pub const WRITING_STATS: &str = "writing_stats";
    pub const VISUAL_STATS: &str = "visual_stats";
    pub const API_KEY: &str = "api_key";
}

/// Key-value persistence boundary. The core never touches the filesystem
/// directly; screens inject a store so tests can run fully in memory.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;

    /// Fire-and-forget write. Failures are logged by the implementation,
    /// never surfaced to the caller.
    fn write(&self, key: &str, value: &str);
}

/// One file per key under the platform data directory.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new() -> Self {
        let base_dir = if let Some(data_dir) = dirs::data_local_dir() {
            data_dir.join(APP_NAME)
        } else {
            PathBuf::from(".")
        };
        let _ = fs::create_dir_all(&base_dir);
        Self { base_dir }
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        let _ = fs::create_dir_all(&base_dir);
        Self { base_dir }
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.file_path(key)).ok()
    }

    fn write(&self, key: &str, value: &str) {
        let path = self.file_path(key);
        if let Err(e) = fs::write(&path, value) {
            eprintln!("Failed to write {}: {}", path.display(), e);
        }
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.lock().unwrap().insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.read(keys::KNOWN_WORDS).is_none());

        store.write(keys::KNOWN_WORDS, "わたし ねこ");
        assert_eq!(store.read(keys::KNOWN_WORDS).as_deref(), Some("わたし ねこ"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::with_base_dir(dir.path().to_path_buf());

        assert!(store.read(keys::READING_STATS).is_none());
        store.write(keys::READING_STATS, "{\"counts\":{}}");
        assert_eq!(store.read(keys::READING_STATS).as_deref(), Some("{\"counts\":{}}"));
    }
}
