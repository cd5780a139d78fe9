//! Browser `localStorage` backend for the progress store
use crate::dom;
use matrix_quest_game::{ProgressBackend, QuestSession, SnowPreference};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage is unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage operation failed: {0}")]
    Js(String),
}

/// Stateless handle; every call looks up `window.localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorageBackend;

impl ProgressBackend for LocalStorageBackend {
    type Error = StorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage = dom::local_storage()
            .map_err(|err| StorageError::Unavailable(dom::js_error_message(&err)))?;
        storage
            .get_item(key)
            .map_err(|err| StorageError::Js(dom::js_error_message(&err)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage()
            .map_err(|err| StorageError::Unavailable(dom::js_error_message(&err)))?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Js(dom::js_error_message(&err)))
    }
}

pub type BrowserSession = QuestSession<LocalStorageBackend>;

#[must_use]
pub fn load_session() -> BrowserSession {
    QuestSession::with_builtin_catalog(LocalStorageBackend)
}

#[must_use]
pub const fn snow_preference() -> SnowPreference<LocalStorageBackend> {
    SnowPreference::new(LocalStorageBackend)
}
