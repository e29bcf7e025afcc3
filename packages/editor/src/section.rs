//! # Sections and Pages
//!
//! A page is an ordered list of section instances. Each instance picks a
//! variation of a section type and carries its own content payload, which
//! the variation's template interprets.

use chrono::{DateTime, Utc};
use pagesmith_sections::{Content, SectionType};
use serde::{Deserialize, Serialize};

/// One placed section on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionInstance {
    /// Stable for the instance's lifetime
    pub id: String,

    #[serde(rename = "type")]
    pub section_type: SectionType,

    /// Layout within `section_type`; changing it means delete and re-add
    pub variation_id: String,

    /// Template-specific fields, merged with variation defaults at render time
    pub content: Content,

    /// Position among siblings, always `0..N-1` once committed
    #[serde(default)]
    pub order: usize,
}

/// Section to add; the store assigns `id` and `order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSection {
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub variation_id: String,
    #[serde(default)]
    pub content: Content,
}

impl NewSection {
    /// Section with empty content (template defaults apply)
    pub fn new(section_type: SectionType, variation_id: impl Into<String>) -> Self {
        Self {
            section_type,
            variation_id: variation_id.into(),
            content: Content::new(),
        }
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }
}

/// Partial update, shallow-merged into a section's mutable fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPatch {
    /// Replaces the whole content payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

impl SectionPatch {
    pub fn content(content: Content) -> Self {
        Self {
            content: Some(content),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    pub(crate) fn apply_to(&self, section: &mut SectionInstance) {
        if let Some(content) = &self.content {
            section.content = content.clone();
        }
    }
}

/// A page and its sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    pub sections: Vec<SectionInstance>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// Create an empty page
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            sections: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
