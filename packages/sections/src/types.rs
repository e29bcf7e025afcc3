use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::RegistryError;

/// Template-specific content payload of a section.
///
/// Always plain JSON data, so a snapshot is a structural copy that cannot fail.
pub type Content = serde_json::Map<String, serde_json::Value>;

/// Category of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Header,
    Hero,
    Features,
    Pricing,
    Testimonials,
    Cta,
    Footer,
    About,
    Faq,
    Newsletter,
    Stats,
}

impl SectionType {
    /// All types in catalog order
    pub const ALL: [SectionType; 11] = [
        SectionType::Header,
        SectionType::Hero,
        SectionType::Features,
        SectionType::Pricing,
        SectionType::Testimonials,
        SectionType::Cta,
        SectionType::Footer,
        SectionType::About,
        SectionType::Faq,
        SectionType::Newsletter,
        SectionType::Stats,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Header => "header",
            SectionType::Hero => "hero",
            SectionType::Features => "features",
            SectionType::Pricing => "pricing",
            SectionType::Testimonials => "testimonials",
            SectionType::Cta => "cta",
            SectionType::Footer => "footer",
            SectionType::About => "about",
            SectionType::Faq => "faq",
            SectionType::Newsletter => "newsletter",
            SectionType::Stats => "stats",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownSectionType(s.to_string()))
    }
}

/// Overlay `content` on top of `defaults` (top-level keys only).
///
/// Keys present in `content` win, even when their value is an empty string
/// or an empty list. `null` values fall back to the default.
pub fn merge_content(defaults: &Content, content: &Content) -> Content {
    let mut merged = defaults.clone();
    for (key, value) in content {
        if value.is_null() {
            continue;
        }
        merged.insert(key.clone(), value.clone());
    }
    merged
}
