//! # Pagesmith Sections
//!
//! Catalog of the section types a page can be built from.
//!
//! A section *type* is a category (hero, pricing, footer, ...). Each type
//! offers one or more *variations*, which pick the layout used to render
//! it. Every variation owns its default content: the editor shows it before
//! the user changes anything, and the HTML exporter falls back to it for
//! fields the user never filled in. Both read the same table, so they can
//! never disagree.
//!
//! ```rust,ignore
//! use pagesmith_sections::{SectionRegistry, SectionType};
//!
//! let registry = SectionRegistry::builtin();
//! let hero = registry.variation(SectionType::Hero, "hero-centered").unwrap();
//! assert_eq!(hero.name, "Centered Hero");
//! ```

mod defaults;
mod registry;
mod types;

pub use registry::{RegistryError, SectionDefinition, SectionRegistry, SectionVariation};
pub use types::{merge_content, Content, SectionType};
