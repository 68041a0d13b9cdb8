use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single credential entry as displayed in the list.
///
/// The entry sequence (ordering and membership) is owned by the store
/// that produced it; the UI layer treats entries as opaque records with
/// a stable id and never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable unique identifier.
    pub id: String,
    pub title: String,
    pub user: String,
    pub url: String,
    pub notes: String,
    pub pass: String,
    /// Free-form extra fields (field name -> value).
    #[serde(default)]
    pub other: BTreeMap<String, String>,
    /// Whether the entry carries protected fields.
    #[serde(default)]
    pub protected: bool,
    /// Prior revisions, newest first.
    #[serde(default)]
    pub history: Vec<EntryRevision>,
    /// Creation time, seconds since the epoch.
    #[serde(default)]
    pub created_at: u64,
    /// Last modification time, seconds since the epoch.
    #[serde(default)]
    pub updated_at: u64,
}

/// A historical revision of an entry, kept for history-aware search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRevision {
    pub title: String,
    pub user: String,
    pub url: String,
    pub notes: String,
    pub pass: String,
    #[serde(default)]
    pub saved_at: u64,
}

impl Entry {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            user: String::new(),
            url: String::new(),
            notes: String::new(),
            pass: String::new(),
            other: BTreeMap::new(),
            protected: false,
            history: Vec::new(),
            created_at: 0,
            updated_at: 0,
        }
    }
}
