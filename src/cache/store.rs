use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::debug;

/// Best-effort key-value store for cached JSON payloads.
///
/// Implementations never surface storage errors to callers; a failed
/// read reports a miss and a failed write is dropped, logged at debug.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// File-backed store, one JSON file per key under a cache directory.
pub struct FileCacheStore {
    cache_dir: PathBuf,
}

impl FileCacheStore {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }
}

impl CacheStore for FileCacheStore {
    fn get(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Some(contents),
            Err(e) => {
                debug!(key, error = %e, "Cache read miss");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.cache_dir) {
            debug!(key, error = %e, "Could not create cache directory");
            return;
        }
        if let Err(e) = std::fs::write(self.path_for(key), value) {
            debug!(key, error = %e, "Cache write failed");
        }
    }
}

/// In-memory store for tests and cache-less runs.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryCacheStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }
}
