use std::sync::Mutex;

use super::{ItemStore, StoreError, decode, encode};
use crate::item::GeneratedItem;

/// A store keeping the raw entry in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Creates a store whose entry holds `raw` verbatim.
    #[inline]
    pub fn with_raw<S: Into<String>>(raw: S) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    /// Returns the raw entry, if any.
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().ok().and_then(|raw| raw.clone())
    }
}

impl ItemStore for MemoryStore {
    fn load_all(&self) -> Vec<GeneratedItem> {
        self.raw().as_deref().map(decode).unwrap_or_default()
    }

    fn save_all(&self, items: &[GeneratedItem]) -> Result<(), StoreError> {
        let encoded = encode(items)?;
        let mut raw = self
            .raw
            .lock()
            .map_err(|_| StoreError::new("memory store is poisoned"))?;
        *raw = Some(encoded);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut raw = self
            .raw
            .lock()
            .map_err(|_| StoreError::new("memory store is poisoned"))?;
        *raw = None;
        Ok(())
    }
}
