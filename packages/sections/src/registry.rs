//! # Section Registry
//!
//! Read-only lookup from `(type, variation id)` to a variation and its
//! default content.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::defaults;
use crate::types::{merge_content, Content, SectionType};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Unknown section type: {0}")]
    UnknownSectionType(String),

    #[error("Unknown variation '{variation_id}' for section type '{section_type}'")]
    UnknownVariation {
        section_type: SectionType,
        variation_id: String,
    },
}

/// One layout of a section type
#[derive(Debug, Clone, PartialEq)]
pub struct SectionVariation {
    pub id: String,
    pub name: String,
    pub description: String,

    /// Fallback content for every field the template reads
    pub default_content: Content,
}

/// A section type and its available variations
#[derive(Debug, Clone, PartialEq)]
pub struct SectionDefinition {
    pub section_type: SectionType,
    pub name: String,
    pub icon: String,
    pub variations: Vec<SectionVariation>,
}

impl SectionDefinition {
    pub fn variation(&self, variation_id: &str) -> Option<&SectionVariation> {
        self.variations.iter().find(|v| v.id == variation_id)
    }
}

/// Catalog of section definitions keyed by type
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: BTreeMap<SectionType, SectionDefinition>,
}

impl SectionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in section type registered
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for definition in defaults::builtin_definitions() {
            registry.register(definition);
        }
        registry
    }

    /// Register a definition, replacing any previous one for the same type
    pub fn register(&mut self, definition: SectionDefinition) {
        self.sections.insert(definition.section_type, definition);
    }

    pub fn get(&self, section_type: SectionType) -> Option<&SectionDefinition> {
        self.sections.get(&section_type)
    }

    /// All definitions in catalog order
    pub fn all(&self) -> Vec<&SectionDefinition> {
        self.sections.values().collect()
    }

    pub fn variation(&self, section_type: SectionType, variation_id: &str) -> Option<&SectionVariation> {
        self.get(section_type)?.variation(variation_id)
    }

    /// Like [`variation`](Self::variation), but with an error naming what was missing
    pub fn require_variation(
        &self,
        section_type: SectionType,
        variation_id: &str,
    ) -> Result<&SectionVariation, RegistryError> {
        self.variation(section_type, variation_id)
            .ok_or_else(|| RegistryError::UnknownVariation {
                section_type,
                variation_id: variation_id.to_string(),
            })
    }

    /// Default content of a variation (empty if the variation is unknown)
    pub fn default_content(&self, section_type: SectionType, variation_id: &str) -> Content {
        self.variation(section_type, variation_id)
            .map(|v| v.default_content.clone())
            .unwrap_or_default()
    }

    /// Content as a template sees it: defaults overlaid with the instance's own fields
    pub fn resolve_content(
        &self,
        section_type: SectionType,
        variation_id: &str,
        content: &Content,
    ) -> Content {
        match self.variation(section_type, variation_id) {
            Some(variation) => merge_content(&variation.default_content, content),
            None => content.clone(),
        }
    }
}
