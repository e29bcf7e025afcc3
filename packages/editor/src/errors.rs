//! Error types for the editor

use thiserror::Error;

/// Why a store operation was rejected.
///
/// A rejected operation leaves both the page and its history untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Invalid permutation: {0}")]
    InvalidPermutation(String),

    #[error("Duplicate section id: {0}")]
    DuplicateId(String),
}

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Persistence error: {0}")]
    Persist(#[from] crate::storage::PersistError),
}
