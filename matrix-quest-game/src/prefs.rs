//! Decorative snow preference stored next to the progress record
use crate::events::QuestEvent;
use crate::store::{ProgressBackend, StoreError};

/// Storage key of the snow preference.
pub const SNOW_KEY: &str = "show_snow";

/// Boolean preference read from the same backend as progress.
/// A missing value means enabled; anything but `"true"` means disabled.
#[derive(Debug, Clone)]
pub struct SnowPreference<B> {
    backend: B,
}

impl<B: ProgressBackend> SnowPreference<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        match self.backend.read(SNOW_KEY) {
            Ok(Some(value)) => value == "true",
            Ok(None) => true,
            Err(err) => {
                log::warn!("could not read snow preference: {err}");
                true
            }
        }
    }

    /// Persist `enabled` as the literal `"true"` or `"false"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    pub fn set(&self, enabled: bool) -> Result<QuestEvent, StoreError> {
        let literal = if enabled { "true" } else { "false" };
        self.backend
            .write(SNOW_KEY, literal)
            .map_err(|err| StoreError::Backend(err.to_string()))?;
        Ok(QuestEvent::SnowToggled { enabled })
    }

    /// Flip the stored value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    pub fn toggle(&self) -> Result<QuestEvent, StoreError> {
        self.set(!self.enabled())
    }
}
