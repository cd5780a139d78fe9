//! Progress persistence over a pluggable key/value backend
use crate::progress::ProgressRecord;
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;
use thiserror::Error;

/// Storage key of the serialized progress record.
pub const PROGRESS_KEY: &str = "matrixQuestProgress";

/// String key/value storage the progress store writes through.
/// Platform-specific implementations should provide this.
pub trait ProgressBackend {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// In-memory backend. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, e.g. a malformed record.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl ProgressBackend for MemoryBackend {
    type Error = Infallible;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.insert(key, value);
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize progress: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage backend rejected write: {0}")]
    Backend(String),
}

/// Loads and saves the whole progress record. No partial updates.
#[derive(Debug, Clone)]
pub struct ProgressStore<B> {
    backend: B,
}

impl<B: ProgressBackend> ProgressStore<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Return the stored record, or the default record when nothing is
    /// stored or the stored value cannot be read or parsed.
    #[must_use]
    pub fn load(&self) -> ProgressRecord {
        let raw = match self.backend.read(PROGRESS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ProgressRecord::default(),
            Err(err) => {
                log::warn!("could not read stored progress: {err}");
                return ProgressRecord::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::warn!("stored progress is malformed, starting fresh: {err}");
            ProgressRecord::default()
        })
    }

    /// Serialize the full record and overwrite the stored value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the backend rejects the write.
    pub fn save(&self, record: &ProgressRecord) -> Result<(), StoreError> {
        let raw = serde_json::to_string(record)?;
        self.backend
            .write(PROGRESS_KEY, &raw)
            .map_err(|err| StoreError::Backend(err.to_string()))
    }

    /// Load, apply `f`, save, and return the new record.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated record cannot be saved.
    pub fn update<F>(&self, f: F) -> Result<ProgressRecord, StoreError>
    where
        F: FnOnce(ProgressRecord) -> ProgressRecord,
    {
        let next = f(self.load());
        self.save(&next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;

    #[derive(Debug, Error)]
    #[error("quota exceeded")]
    struct QuotaExceeded;

    struct BrokenBackend;

    impl ProgressBackend for BrokenBackend {
        type Error = QuotaExceeded;

        fn read(&self, _key: &str) -> Result<Option<String>, Self::Error> {
            Err(QuotaExceeded)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), Self::Error> {
            Err(QuotaExceeded)
        }
    }

    #[test]
    fn missing_record_loads_defaults() {
        let store = ProgressStore::new(MemoryBackend::new());
        assert_eq!(store.load(), ProgressRecord::default());
    }

    #[test]
    fn malformed_record_loads_defaults() {
        let backend = MemoryBackend::new();
        backend.insert(PROGRESS_KEY, "{not json");
        let store = ProgressStore::new(backend);
        assert_eq!(store.load(), ProgressRecord::default());
    }

    #[test]
    fn save_then_load_is_identity() {
        let store = ProgressStore::new(MemoryBackend::new());
        let mut record = ProgressRecord::new();
        record.player_name = "Morpheus".into();
        record.set_checked("quest_2_1", "step_4", true);
        record.mark_completed(Difficulty::Normal);
        record.started_at = Some("2026-01-01T00:00:00Z".into());
        store.save(&record).unwrap();
        let loaded = store.load();
        assert_eq!(loaded, record);
        store.save(&loaded).unwrap();
        assert_eq!(store.load(), record);
    }

    #[test]
    fn update_persists_the_new_record() {
        let backend = MemoryBackend::new();
        let store = ProgressStore::new(backend.clone());
        let updated = store
            .update(|mut record| {
                record.server_ip = "192.0.2.7".into();
                record
            })
            .unwrap();
        assert_eq!(updated.server_ip, "192.0.2.7");
        let raw = backend.get(PROGRESS_KEY).expect("written");
        assert!(raw.contains("\"serverIP\":\"192.0.2.7\""));
    }

    #[test]
    fn backend_failures_degrade_reads_and_surface_writes() {
        let store = ProgressStore::new(BrokenBackend);
        assert_eq!(store.load(), ProgressRecord::default());
        let err = store.save(&ProgressRecord::default()).unwrap_err();
        assert!(matches!(err, StoreError::Backend(msg) if msg == "quota exceeded"));
    }
}
