//! # Page Mutations
//!
//! Structural operations on a page's section list.
//!
//! ## Design Principles
//!
//! 1. **Validated**: every mutation is checked against the current state before it touches it
//! 2. **All or nothing**: a mutation that fails validation changes nothing
//! 3. **Order renormalized**: after any structural change `order` is `0..N-1`
//!
//! ## Mutation Semantics
//!
//! ### DeleteSection
//! - Remaining sections keep their relative order
//! - Clears the selection only if it pointed at the deleted section
//!
//! ### ReorderSections
//! - Input must be a permutation of the current ids: same set, no duplicates
//!
//! ### DuplicateSection
//! - Deep copy with a fresh id, appended at the end

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::StoreError;
use crate::id_generator::IdGenerator;
use crate::section::{NewSection, SectionInstance, SectionPatch};

/// The part of a page that undo/redo restores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    /// Sections in ascending `order`
    pub sections: Vec<SectionInstance>,
    pub selected_section_id: Option<String>,
}

impl PageState {
    pub fn position(&self, section_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == section_id)
    }

    pub fn contains(&self, section_id: &str) -> bool {
        self.position(section_id).is_some()
    }

    pub fn section(&self, section_id: &str) -> Option<&SectionInstance> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    /// Rewrite `order` so it matches list position
    pub fn renormalize(&mut self) {
        for (index, section) in self.sections.iter_mut().enumerate() {
            section.order = index;
        }
    }

    fn require(&self, section_id: &str) -> Result<usize, StoreError> {
        self.position(section_id)
            .ok_or_else(|| StoreError::SectionNotFound(section_id.to_string()))
    }
}

/// Semantic edits to a page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a new section
    AddSection { section: NewSection },

    /// Merge a patch into an existing section
    UpdateSection {
        section_id: String,
        patch: SectionPatch,
    },

    /// Remove a section
    DeleteSection { section_id: String },

    /// Put sections in the given order (full permutation of current ids)
    ReorderSections { section_ids: Vec<String> },

    /// Clone a section to the end of the page
    DuplicateSection { section_id: String },

    /// Remove every section
    ClearSections,
}

impl Mutation {
    /// Apply mutation to the page state with validation.
    ///
    /// Returns the id of the section the mutation created or touched.
    pub fn apply(
        &self,
        state: &mut PageState,
        ids: &mut IdGenerator,
    ) -> Result<Option<String>, StoreError> {
        // Validate first
        self.validate(state)?;

        match self {
            Mutation::AddSection { section } => Ok(Some(Self::apply_add(state, ids, section))),

            Mutation::UpdateSection { section_id, patch } => {
                Self::apply_update(state, section_id, patch)?;
                Ok(Some(section_id.clone()))
            }

            Mutation::DeleteSection { section_id } => {
                Self::apply_delete(state, section_id)?;
                Ok(Some(section_id.clone()))
            }

            Mutation::ReorderSections { section_ids } => {
                Self::apply_reorder(state, section_ids);
                Ok(None)
            }

            Mutation::DuplicateSection { section_id } => {
                Self::apply_duplicate(state, ids, section_id).map(Some)
            }

            Mutation::ClearSections => {
                state.sections.clear();
                state.selected_section_id = None;
                Ok(None)
            }
        }
    }

    fn apply_add(state: &mut PageState, ids: &mut IdGenerator, section: &NewSection) -> String {
        let id = ids.next_unused(|candidate| state.contains(candidate));

        state.sections.push(SectionInstance {
            id: id.clone(),
            section_type: section.section_type,
            variation_id: section.variation_id.clone(),
            content: section.content.clone(),
            order: state.sections.len(),
        });

        id
    }

    fn apply_update(state: &mut PageState, section_id: &str, patch: &SectionPatch) -> Result<(), StoreError> {
        let index = state.require(section_id)?;
        patch.apply_to(&mut state.sections[index]);
        Ok(())
    }

    fn apply_delete(state: &mut PageState, section_id: &str) -> Result<(), StoreError> {
        let index = state.require(section_id)?;
        state.sections.remove(index);
        state.renormalize();

        if state.selected_section_id.as_deref() == Some(section_id) {
            state.selected_section_id = None;
        }

        Ok(())
    }

    fn apply_reorder(state: &mut PageState, section_ids: &[String]) {
        let mut remaining = std::mem::take(&mut state.sections);
        let mut reordered = Vec::with_capacity(remaining.len());

        for id in section_ids {
            if let Some(pos) = remaining.iter().position(|s| &s.id == id) {
                reordered.push(remaining.swap_remove(pos));
            }
        }

        state.sections = reordered;
        state.renormalize();
    }

    fn apply_duplicate(
        state: &mut PageState,
        ids: &mut IdGenerator,
        section_id: &str,
    ) -> Result<String, StoreError> {
        let index = state.require(section_id)?;
        let id = ids.next_unused(|candidate| state.contains(candidate));

        // Clone owns its content; edits to either copy never alias
        let mut duplicate = state.sections[index].clone();
        duplicate.id = id.clone();
        duplicate.order = state.sections.len();
        state.sections.push(duplicate);

        Ok(id)
    }

    /// Validate without applying
    pub fn validate(&self, state: &PageState) -> Result<(), StoreError> {
        match self {
            Mutation::AddSection { .. } | Mutation::ClearSections => Ok(()),

            Mutation::UpdateSection { section_id, .. }
            | Mutation::DeleteSection { section_id }
            | Mutation::DuplicateSection { section_id } => state.require(section_id).map(|_| ()),

            Mutation::ReorderSections { section_ids } => Self::validate_permutation(state, section_ids),
        }
    }

    fn validate_permutation(state: &PageState, section_ids: &[String]) -> Result<(), StoreError> {
        if section_ids.len() != state.sections.len() {
            return Err(StoreError::InvalidPermutation(format!(
                "expected {} section ids, got {}",
                state.sections.len(),
                section_ids.len()
            )));
        }

        let mut seen = HashSet::with_capacity(section_ids.len());
        for id in section_ids {
            if !seen.insert(id.as_str()) {
                return Err(StoreError::InvalidPermutation(format!("section {} listed twice", id)));
            }
            if !state.contains(id) {
                return Err(StoreError::InvalidPermutation(format!("unknown section {}", id)));
            }
        }

        Ok(())
    }

    /// Short description used as the undo/redo label
    pub fn label(&self) -> String {
        match self {
            Mutation::AddSection { section } => format!("Add {} section", section.section_type),
            Mutation::UpdateSection { .. } => "Edit section".to_string(),
            Mutation::DeleteSection { .. } => "Delete section".to_string(),
            Mutation::ReorderSections { .. } => "Reorder sections".to_string(),
            Mutation::DuplicateSection { .. } => "Duplicate section".to_string(),
            Mutation::ClearSections => "Clear page".to_string(),
        }
    }
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// New store version
    pub version: u64,

    /// Section created or touched, if the mutation names one
    pub section_id: Option<String>,
}
