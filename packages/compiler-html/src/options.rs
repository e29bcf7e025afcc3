use serde::{Deserialize, Serialize};

/// A third-party tracking integration to inject into the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsIntegration {
    /// Provider id, e.g. "google-analytics" or "plausible"
    pub provider: String,
    pub tracking_id: String,
}

impl AnalyticsIntegration {
    pub fn new(provider: impl Into<String>, tracking_id: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            tracking_id: tracking_id.into(),
        }
    }
}

/// Colour palette and font exposed as CSS custom properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub muted: String,
    pub font_family: String,
    pub font_fallback: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#3b82f6".to_string(),
            secondary: "#1e40af".to_string(),
            accent: "#06b6d4".to_string(),
            background: "#ffffff".to_string(),
            text: "#111827".to_string(),
            muted: "#6b7280".to_string(),
            font_family: "Inter".to_string(),
            font_fallback: "system-ui, sans-serif".to_string(),
        }
    }
}

/// Options for HTML export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    /// Document title
    pub title: String,
    /// Meta description
    pub description: String,
    /// `lang` attribute of the root element
    pub lang: String,
    /// Emit charset, viewport, title and description tags
    pub include_meta: bool,
    /// Emit the inline stylesheet
    pub include_styles: bool,
    /// Tracking snippets, in injection order
    pub analytics: Vec<AnalyticsIntegration>,
    /// Optional theme variables (only with `include_styles`)
    pub theme: Option<Theme>,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: "My Landing Page".to_string(),
            description: "Created with Pagesmith".to_string(),
            lang: "en".to_string(),
            include_meta: true,
            include_styles: true,
            analytics: Vec::new(),
            theme: None,
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

/// File name for an exported page: the slugged title plus `.html`
pub fn export_file_name(options: &ExportOptions) -> String {
    let mut slug = String::new();
    for c in options.title.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        "landing-page.html".to_string()
    } else {
        format!("{}.html", slug)
    }
}
