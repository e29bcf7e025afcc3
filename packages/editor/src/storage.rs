//! # Page Persistence
//!
//! Saved pages live in a small key-value store as JSON:
//!
//! ```json
//! { "sections": [ ... ], "savedAt": "2024-05-01T12:00:00Z" }
//! ```
//!
//! Loading never fails outward. A payload that cannot be trusted is logged
//! and dropped, and the caller starts from an empty page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::section::SectionInstance;

/// Key the current page is saved under
pub const PAGE_STORAGE_KEY: &str = "pagesmith-page";

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value storage abstraction for saved pages
pub trait PageStorage {
    /// Read a value; `Ok(None)` if the key is absent
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<(), PersistError>;
}

/// Directory-backed storage, one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl PageStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory storage for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    pub entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Persisted page record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPage {
    pub sections: Vec<SectionInstance>,
    pub saved_at: DateTime<Utc>,
}

/// Save the sections under [`PAGE_STORAGE_KEY`]
pub fn save_page(
    storage: &mut impl PageStorage,
    sections: &[SectionInstance],
    saved_at: DateTime<Utc>,
) -> Result<SavedPage, PersistError> {
    let record = SavedPage {
        sections: sections.to_vec(),
        saved_at,
    };

    let json = serde_json::to_string_pretty(&record)?;
    storage.set(PAGE_STORAGE_KEY, &json)?;
    tracing::debug!(sections = record.sections.len(), "saved page");

    Ok(record)
}

/// Load the saved page, or `None` if there is nothing usable.
///
/// Unparseable JSON also clears the stored key. A record with any invalid
/// section is discarded whole; nothing is partially applied.
pub fn load_page(storage: &mut impl PageStorage) -> Option<SavedPage> {
    let raw = match storage.get(PAGE_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("Failed to read saved page: {}", e);
            return None;
        }
    };

    let value: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Saved page is corrupt, clearing it: {}", e);
            if let Err(e) = storage.remove(PAGE_STORAGE_KEY) {
                tracing::warn!("Failed to clear corrupt page: {}", e);
            }
            return None;
        }
    };

    if let Err(reason) = validate_record(&value) {
        tracing::warn!("Discarding saved page: {}", reason);
        return None;
    }

    match serde_json::from_value::<SavedPage>(value) {
        Ok(saved) if saved.sections.is_empty() => None,
        Ok(saved) => Some(saved),
        Err(e) => {
            tracing::warn!("Discarding saved page: {}", e);
            None
        }
    }
}

fn validate_record(value: &Value) -> Result<(), String> {
    let sections = value
        .get("sections")
        .and_then(Value::as_array)
        .ok_or_else(|| "missing sections list".to_string())?;

    let mut seen = HashSet::with_capacity(sections.len());
    for (index, section) in sections.iter().enumerate() {
        for field in ["id", "type", "variationId"] {
            let present = section
                .get(field)
                .and_then(Value::as_str)
                .map_or(false, |s| !s.is_empty());
            if !present {
                return Err(format!("section {} has no {}", index, field));
            }
        }

        if section.get("content").map_or(true, Value::is_null) {
            return Err(format!("section {} has no content", index));
        }

        let id = section.get("id").and_then(Value::as_str).unwrap_or_default();
        if !seen.insert(id) {
            return Err(format!("section {} repeats id '{}'", index, id));
        }
    }

    Ok(())
}
