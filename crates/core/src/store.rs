//! Persistence of the generated item list.
//!
//! The whole list lives under one well-known key as a JSON array. Every
//! mutation goes through [`ItemStore::save_all`] or [`ItemStore::clear`];
//! nothing writes a partial list.

mod json_file;
mod memory;

use std::error::Error as StdError;
use std::fmt::{self, Display};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::item::GeneratedItem;

/// The key the list is stored under.
pub const STORAGE_KEY: &str = "savedBlogs";

/// A failed write to the store.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoreError {
    message: String,
}

impl StoreError {
    #[inline]
    pub(crate) fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for StoreError {}

/// Storage for the persisted item list.
///
/// Implementations hold no business logic. Reads never fail: a missing or
/// unreadable list is an empty list.
pub trait ItemStore: Send + Sync {
    /// Reads the persisted list, newest first.
    fn load_all(&self) -> Vec<GeneratedItem>;

    /// Replaces the persisted list.
    fn save_all(&self, items: &[GeneratedItem]) -> Result<(), StoreError>;

    /// Removes the persisted list entirely.
    fn clear(&self) -> Result<(), StoreError>;

    /// Removes the item with the given id, re-reading the list first.
    ///
    /// Returns whether an item was removed. The list is not written when
    /// nothing matched.
    fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut items = self.load_all();
        let len = items.len();
        items.retain(|item| item.id != id);
        if items.len() == len {
            return Ok(false);
        }
        self.save_all(&items)?;
        Ok(true)
    }
}

/// Decodes a raw entry, treating anything unreadable as no data.
pub(crate) fn decode(raw: &str) -> Vec<GeneratedItem> {
    match serde_json::from_str(raw) {
        Ok(items) => items,
        Err(err) => {
            warn!("discarding malformed item list: {err}");
            Vec::new()
        }
    }
}

pub(crate) fn encode(items: &[GeneratedItem]) -> Result<String, StoreError> {
    serde_json::to_string(items).map_err(|err| {
        StoreError::new(format!("failed to encode item list: {err}"))
    })
}
