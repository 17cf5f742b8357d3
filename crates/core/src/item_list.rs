use std::sync::Arc;

use crate::confirm::Confirm;
use crate::item::GeneratedItem;
use crate::store::{ItemStore, StoreError};

/// How many items the landing view shows.
pub const PREVIEW_LIMIT: usize = 6;

const DELETE_ONE_PROMPT: &str = "Delete this blog?";
const DELETE_ALL_PROMPT: &str = "Are you sure you want to delete all saved blogs?";

/// The saved items view.
///
/// Holds a bounded, newest-first copy of the persisted list. The copy is a
/// cache: destructive actions re-read the store before writing.
pub struct ItemList {
    store: Arc<dyn ItemStore>,
    items: Vec<GeneratedItem>,
    limit: usize,
}

impl ItemList {
    /// Creates an empty view over `store`. Call [`Self::load_preview`] to
    /// populate it.
    #[inline]
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self {
            store,
            items: Vec::new(),
            limit: PREVIEW_LIMIT,
        }
    }

    /// Reads the persisted list and keeps at most `limit` items.
    pub fn load_preview(&mut self, limit: usize) -> &[GeneratedItem] {
        let mut items = self.store.load_all();
        items.truncate(limit);
        self.items = items;
        self.limit = limit;
        &self.items
    }

    /// Returns the items currently shown.
    #[inline]
    pub fn items(&self) -> &[GeneratedItem] {
        &self.items
    }

    /// Returns the shown item with the given id.
    #[inline]
    pub fn get(&self, id: &str) -> Option<&GeneratedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Deletes one item after confirmation.
    ///
    /// Returns `Ok(false)` when the user declined or the item no longer
    /// exists.
    pub async fn delete_one(
        &mut self,
        id: &str,
        confirm: &dyn Confirm,
    ) -> Result<bool, StoreError> {
        if !confirm.confirm(DELETE_ONE_PROMPT).await {
            debug!("deletion of {id} declined");
            return Ok(false);
        }
        let removed = self.store.remove(id)?;
        if removed {
            info!("deleted article {id}");
        }
        self.load_preview(self.limit);
        Ok(removed)
    }

    /// Deletes every saved item after confirmation.
    ///
    /// Returns `Ok(false)` when the user declined.
    pub async fn delete_all(
        &mut self,
        confirm: &dyn Confirm,
    ) -> Result<bool, StoreError> {
        if !confirm.confirm(DELETE_ALL_PROMPT).await {
            debug!("deletion of all articles declined");
            return Ok(false);
        }
        self.store.clear()?;
        self.items.clear();
        info!("deleted all articles");
        Ok(true)
    }
}
