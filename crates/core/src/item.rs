use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An article kept in the persisted list.
///
/// Items are never edited once created; the list only grows by prepending
/// and shrinks by deletion.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedItem {
    /// Unique within the persisted list.
    pub id: String,
    /// Normalized heading.
    pub title: String,
    /// Normalized body.
    pub content: String,
    /// The trimmed input that produced this item.
    pub topic: String,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
}

impl GeneratedItem {
    /// Creates an item stamped with the current time, with an id that does
    /// not clash with any of `existing`.
    pub fn new(
        existing: &[GeneratedItem],
        title: String,
        content: String,
        topic: String,
    ) -> Self {
        let created_at = Utc::now();
        Self {
            id: unique_id(existing, created_at),
            title,
            content,
            topic,
            created_at,
        }
    }
}

/// Millisecond timestamps, bumped until unused.
fn unique_id(existing: &[GeneratedItem], now: DateTime<Utc>) -> String {
    let mut candidate = now.timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !existing.iter().any(|item| item.id == id) {
            return id;
        }
        candidate += 1;
    }
}
