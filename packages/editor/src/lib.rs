//! # Pagesmith Editor
//!
//! Core page editing engine for Pagesmith.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ sections: registry + default content        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: ContentStore + mutations            │
//! │  - Add / update / delete / reorder sections │
//! │  - Selection cursor                         │
//! │  - Bounded linear undo/redo history         │
//! │  - Save / load through a PageStorage        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: sections → static HTML       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Owned state**: a `ContentStore` is a plain value; tests build as many as they like
//! 2. **Mutations are data**: every edit is a serializable [`Mutation`], validated before it applies
//! 3. **Contiguous order**: section `order` is always `0..N-1` after a committed edit
//! 4. **Linear history**: undo/redo walks one timeline; a new edit drops the redo tail
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagesmith_editor::{ContentStore, NewSection};
//! use pagesmith_sections::SectionType;
//!
//! let mut store = ContentStore::new("Launch page");
//!
//! let hero = store.add_section(NewSection::new(SectionType::Hero, "hero-centered"))?;
//! let footer = store.add_section(NewSection::new(SectionType::Footer, "footer-simple"))?;
//!
//! store.reorder_sections(&[footer, hero])?;
//! store.undo();
//! ```

mod errors;
mod history;
mod id_generator;
mod mutations;
mod section;
mod storage;
mod store;

pub use errors::{EditorError, StoreError};
pub use history::{History, Snapshot, DEFAULT_MAX_HISTORY_SIZE};
pub use id_generator::{get_page_seed, IdGenerator};
pub use mutations::{Mutation, MutationResult, PageState};
pub use section::{NewSection, Page, SectionInstance, SectionPatch};
pub use storage::{
    load_page, save_page, FileStorage, MemoryStorage, PageStorage, PersistError, SavedPage,
    PAGE_STORAGE_KEY,
};
pub use store::ContentStore;

// Re-export section catalog types for convenience
pub use pagesmith_sections::{Content, SectionType};
