//! # Content Store
//!
//! Single source of truth for a page's sections and the active selection.
//!
//! Every edit goes through [`ContentStore::apply`]:
//!
//! ```text
//! validate → apply to live state → record snapshot → bump version
//!     ↓
//!   Err(StoreError): nothing changed, nothing recorded
//! ```
//!
//! The history always holds the live state under its cursor, so the state
//! before an edit is already on the timeline when the edit starts. Undo
//! right after an edit restores exactly that state, and redo replays it.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::errors::{EditorError, StoreError};
use crate::history::{History, Snapshot};
use crate::id_generator::{get_page_seed, IdGenerator};
use crate::mutations::{Mutation, MutationResult, PageState};
use crate::section::{NewSection, Page, SectionInstance, SectionPatch};
use crate::storage::{load_page, save_page, PageStorage, SavedPage};

/// Mutations grouped into one undo step
#[derive(Debug)]
struct PendingBatch {
    label: Option<String>,
    dirty: bool,
}

/// Editable page: sections, selection and undo/redo history
#[derive(Debug)]
pub struct ContentStore {
    page_id: String,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,

    /// Current version number (increments on every state change)
    version: u64,

    state: PageState,
    history: History,
    ids: IdGenerator,
    batch: Option<PendingBatch>,
}

impl ContentStore {
    /// Start an empty page
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let created_at = Utc::now();
        let page_id = format!(
            "page-{}",
            get_page_seed(&format!("{}@{}", name, created_at.to_rfc3339()))
        );

        Self::from_page(Page {
            id: page_id,
            name,
            sections: Vec::new(),
            created_at,
            updated_at: created_at,
        })
    }

    /// Open an existing page; its sections become the history baseline
    pub fn from_page(page: Page) -> Self {
        let mut sections = page.sections;
        sections.sort_by_key(|s| s.order);

        let mut state = PageState {
            sections,
            selected_section_id: None,
        };
        state.renormalize();

        let mut history = History::new();
        history.reset(Snapshot::new(state.clone()));

        Self {
            ids: IdGenerator::new(&page.id),
            page_id: page.id,
            name: page.name,
            created_at: page.created_at,
            updated_at: page.updated_at,
            version: 0,
            state,
            history,
            batch: None,
        }
    }

    /// Use a history of the given size, keeping the current state as baseline
    pub fn with_max_history_size(mut self, max_size: usize) -> Self {
        self.history = History::with_max_size(max_size);
        self.history.reset(Snapshot::new(self.state.clone()));
        self
    }

    /// Snapshot the page as a [`Page`] value
    pub fn to_page(&self) -> Page {
        Page {
            id: self.page_id.clone(),
            name: self.name.clone(),
            sections: self.state.sections.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Replace every section with a saved list, as a fresh history baseline
    pub fn restore_sections(&mut self, mut sections: Vec<SectionInstance>) -> Result<(), StoreError> {
        let mut seen = HashSet::with_capacity(sections.len());
        for section in &sections {
            if !seen.insert(section.id.as_str()) {
                return Err(StoreError::DuplicateId(section.id.clone()));
            }
        }

        sections.sort_by_key(|s| s.order);
        self.state = PageState {
            sections,
            selected_section_id: None,
        };
        self.state.renormalize();

        self.batch = None;
        self.history.reset(Snapshot::new(self.state.clone()));
        self.touch();

        tracing::debug!(sections = self.state.sections.len(), "restored sections");
        Ok(())
    }

    /// Replace the sections with the page saved in `storage`, if there is a usable one.
    ///
    /// Returns whether a saved page was restored. An untrusted payload is
    /// discarded by [`load_page`] and leaves the store as it was.
    pub fn load_from(&mut self, storage: &mut impl PageStorage) -> Result<bool, EditorError> {
        match load_page(storage) {
            Some(saved) => {
                self.restore_sections(saved.sections)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Persist the current sections to `storage`
    pub fn save_to(&self, storage: &mut impl PageStorage) -> Result<SavedPage, EditorError> {
        Ok(save_page(storage, self.sections(), self.updated_at)?)
    }

    /// Apply a mutation and record it for undo
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, StoreError> {
        let section_id = mutation.apply(&mut self.state, &mut self.ids)?;
        let label = mutation.label();

        match &mut self.batch {
            Some(batch) => batch.dirty = true,
            None => self
                .history
                .save(Snapshot::labeled(self.state.clone(), label.clone())),
        }

        self.touch();
        tracing::debug!(mutation = %label, version = self.version, "applied mutation");

        Ok(MutationResult {
            version: self.version,
            section_id,
        })
    }

    /// Append a section; returns its new id
    pub fn add_section(&mut self, section: NewSection) -> Result<String, StoreError> {
        self.apply(Mutation::AddSection { section })
            .map(|result| result.section_id.unwrap_or_default())
    }

    pub fn update_section(&mut self, section_id: &str, patch: SectionPatch) -> Result<MutationResult, StoreError> {
        self.apply(Mutation::UpdateSection {
            section_id: section_id.to_string(),
            patch,
        })
    }

    pub fn delete_section(&mut self, section_id: &str) -> Result<MutationResult, StoreError> {
        self.apply(Mutation::DeleteSection {
            section_id: section_id.to_string(),
        })
    }

    /// Put sections in the given order; `section_ids` must be a permutation of the current ids
    pub fn reorder_sections<S: AsRef<str>>(&mut self, section_ids: &[S]) -> Result<MutationResult, StoreError> {
        self.apply(Mutation::ReorderSections {
            section_ids: section_ids.iter().map(|id| id.as_ref().to_string()).collect(),
        })
    }

    /// Move one section to `to_index` (clamped to the end)
    pub fn move_section(&mut self, section_id: &str, to_index: usize) -> Result<MutationResult, StoreError> {
        let from = self
            .state
            .position(section_id)
            .ok_or_else(|| StoreError::SectionNotFound(section_id.to_string()))?;

        let mut ids: Vec<String> = self.state.sections.iter().map(|s| s.id.clone()).collect();
        let id = ids.remove(from);
        let to = to_index.min(ids.len());
        ids.insert(to, id);

        self.reorder_sections(&ids)
    }

    /// Clone a section to the end of the page; returns the clone's id
    pub fn duplicate_section(&mut self, section_id: &str) -> Result<String, StoreError> {
        self.apply(Mutation::DuplicateSection {
            section_id: section_id.to_string(),
        })
        .map(|result| result.section_id.unwrap_or_default())
    }

    /// Remove every section
    pub fn clear_sections(&mut self) -> Result<MutationResult, StoreError> {
        self.apply(Mutation::ClearSections)
    }

    /// Set or clear the selection; not an undo step
    pub fn select_section(&mut self, section_id: Option<&str>) -> Result<(), StoreError> {
        if let Some(id) = section_id {
            if !self.state.contains(id) {
                return Err(StoreError::SectionNotFound(id.to_string()));
            }
        }

        self.state.selected_section_id = section_id.map(str::to_string);

        // The live entry tracks the selection so undo after the next edit
        // lands on exactly this state. A dirty batch records it on close.
        let batch_dirty = self.batch.as_ref().map_or(false, |batch| batch.dirty);
        if !batch_dirty {
            if let Some(current) = self.history.current_mut() {
                current.state.selected_section_id = self.state.selected_section_id.clone();
            }
        }
        Ok(())
    }

    /// Start grouping mutations into a single undo step
    pub fn begin_batch(&mut self, label: Option<&str>) {
        self.end_batch();
        self.batch = Some(PendingBatch {
            label: label.map(str::to_string),
            dirty: false,
        });
    }

    /// Close the current batch; records one history entry if anything changed
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.batch.take() {
            if batch.dirty {
                self.history.save(Snapshot {
                    state: self.state.clone(),
                    label: batch.label,
                });
            }
        }
    }

    pub fn in_batch(&self) -> bool {
        self.batch.is_some()
    }

    /// Undo the most recent edit; `false` if there was nothing to undo
    pub fn undo(&mut self) -> bool {
        self.end_batch();
        match self.history.undo() {
            Some(snapshot) => {
                self.state = snapshot.state.clone();
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Redo the most recently undone edit; `false` if there was nothing to redo
    pub fn redo(&mut self) -> bool {
        self.end_batch();
        match self.history.redo() {
            Some(snapshot) => {
                self.state = snapshot.state.clone();
                self.touch();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Sections in ascending `order`
    pub fn sections(&self) -> &[SectionInstance] {
        &self.state.sections
    }

    pub fn section(&self, section_id: &str) -> Option<&SectionInstance> {
        self.state.section(section_id)
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn selected_section_id(&self) -> Option<&str> {
        self.state.selected_section_id.as_deref()
    }

    pub fn selected_section(&self) -> Option<&SectionInstance> {
        self.selected_section_id().and_then(|id| self.state.section(id))
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_sections::SectionType;

    #[test]
    fn test_new_store_is_empty() {
        let store = ContentStore::new("Landing");
        assert!(store.sections().is_empty());
        assert_eq!(store.version(), 0);
        assert!(!store.can_undo());
        assert!(!store.can_redo());
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn test_store_version_increments() {
        let mut store = ContentStore::new("Landing");
        let result = store
            .apply(Mutation::AddSection {
                section: NewSection::new(SectionType::Hero, "hero-centered"),
            })
            .unwrap();

        assert_eq!(result.version, 1);
        assert_eq!(store.version(), 1);

        // Rejected mutations do not count
        assert!(store.delete_section("missing").is_err());
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_from_page_sorts_and_renormalizes() {
        let mut page = Page::new("p", "Landing");
        for (id, order) in [("b", 7), ("a", 3)] {
            page.sections.push(SectionInstance {
                id: id.to_string(),
                section_type: SectionType::Hero,
                variation_id: "hero-centered".to_string(),
                content: Default::default(),
                order,
            });
        }

        let store = ContentStore::from_page(page);
        let ids: Vec<_> = store.sections().iter().map(|s| (s.id.as_str(), s.order)).collect();
        assert_eq!(ids, vec![("a", 0), ("b", 1)]);
        assert!(!store.can_undo());
    }

    #[test]
    fn test_select_validates_id() {
        let mut store = ContentStore::new("Landing");
        let id = store.add_section(NewSection::new(SectionType::Hero, "hero-centered")).unwrap();

        store.select_section(Some(&id)).unwrap();
        assert_eq!(store.selected_section().unwrap().id, id);

        assert_eq!(
            store.select_section(Some("nope")),
            Err(StoreError::SectionNotFound("nope".to_string()))
        );
        assert_eq!(store.selected_section_id(), Some(id.as_str()));

        store.select_section(None).unwrap();
        assert!(store.selected_section_id().is_none());
    }

    #[test]
    fn test_restore_rejects_duplicate_ids() {
        let mut store = ContentStore::new("Landing");
        let section = SectionInstance {
            id: "dup".to_string(),
            section_type: SectionType::Cta,
            variation_id: "cta-simple".to_string(),
            content: Default::default(),
            order: 0,
        };

        let err = store.restore_sections(vec![section.clone(), section]).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("dup".to_string()));
        assert!(store.sections().is_empty());
    }

    #[test]
    fn test_save_to_then_load_from() {
        let mut storage = crate::storage::MemoryStorage::new();
        let mut store = ContentStore::new("Landing");
        store.add_section(NewSection::new(SectionType::Hero, "hero-centered")).unwrap();
        store.save_to(&mut storage).unwrap();

        let mut reopened = ContentStore::new("Landing");
        assert!(reopened.load_from(&mut storage).unwrap());
        assert_eq!(reopened.sections(), store.sections());
        assert!(!reopened.can_undo());
    }

    #[test]
    fn test_load_from_skips_payload_with_duplicate_ids() {
        let mut storage = crate::storage::MemoryStorage::new();
        let raw = r#"{
            "sections": [
                { "id": "a", "type": "hero", "variationId": "hero-centered", "content": {}, "order": 0 },
                { "id": "a", "type": "cta", "variationId": "cta-simple", "content": {}, "order": 1 }
            ],
            "savedAt": "2024-05-01T12:00:00Z"
        }"#;
        storage.set(crate::storage::PAGE_STORAGE_KEY, raw).unwrap();

        let mut store = ContentStore::new("Landing");
        assert!(!store.load_from(&mut storage).unwrap());
        assert!(store.sections().is_empty());

        // The store stays usable
        store.add_section(NewSection::new(SectionType::Hero, "hero-centered")).unwrap();
        store.clear_sections().unwrap();
    }

    #[test]
    fn test_ids_stay_unique_after_restore() {
        let mut first = ContentStore::from_page(Page::new("p", "Landing"));
        let a = first.add_section(NewSection::new(SectionType::Hero, "hero-centered")).unwrap();

        let mut second = ContentStore::from_page(Page::new("p", "Landing"));
        second.restore_sections(first.sections().to_vec()).unwrap();
        let b = second.add_section(NewSection::new(SectionType::Footer, "footer-simple")).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_with_max_history_size_keeps_state() {
        let mut store = ContentStore::new("Landing");
        store.add_section(NewSection::new(SectionType::Hero, "hero-centered")).unwrap();

        let store = store.with_max_history_size(5);
        assert_eq!(store.sections().len(), 1);
        assert_eq!(store.history().max_size(), 5);
        assert!(!store.can_undo());
    }
}
