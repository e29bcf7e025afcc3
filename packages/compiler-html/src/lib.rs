//! Static HTML export for Pagesmith pages
//!
//! Turns an ordered list of section instances into one standalone HTML
//! document with inline styles and optional analytics snippets. Export is a
//! pure function: no I/O, no clock, same input gives the same bytes.

mod analytics;
mod compiler;
mod options;
mod styles;

#[cfg(test)]
mod tests;

pub use compiler::{compile_page, compile_page_with_registry};
pub use options::{export_file_name, AnalyticsIntegration, ExportOptions, Theme};
