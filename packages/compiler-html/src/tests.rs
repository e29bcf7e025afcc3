use crate::{compile_page, AnalyticsIntegration, ExportOptions, Theme};
use pagesmith_editor::SectionInstance;
use serde_json::json;

fn sections(value: serde_json::Value) -> Vec<SectionInstance> {
    serde_json::from_value(value).expect("Failed to parse sections")
}

fn hero_and_footer() -> Vec<SectionInstance> {
    sections(json!([
        { "id": "s1", "type": "hero", "variationId": "hero-centered", "content": { "title": "Hi" }, "order": 0 },
        { "id": "s2", "type": "footer", "variationId": "footer-simple", "content": {}, "order": 1 }
    ]))
}

#[test]
fn test_hero_and_footer_without_styles() {
    let options = ExportOptions {
        include_styles: false,
        ..ExportOptions::default()
    };
    let html = compile_page(&hero_and_footer(), &options);

    println!("Generated HTML:\n{}", html);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(">Hi</h1>"));
    assert!(html.contains("© 2024 Brand. All rights reserved."));
    assert!(!html.contains("<style"));
}

#[test]
fn test_sections_render_in_order() {
    let list = sections(json!([
        { "id": "b", "type": "footer", "variationId": "footer-simple", "content": {}, "order": 1 },
        { "id": "a", "type": "hero", "variationId": "hero-centered", "content": { "title": "Top" }, "order": 0 }
    ]));
    let html = compile_page(&list, &ExportOptions::default());

    let hero = html.find(">Top</h1>").unwrap();
    let footer = html.find("<footer").unwrap();
    assert!(hero < footer);
    // Input is sorted on a copy
    assert_eq!(list[0].id, "b");
}

#[test]
fn test_output_is_deterministic() {
    let options = ExportOptions {
        analytics: vec![AnalyticsIntegration::new("google-analytics", "G-TEST123")],
        theme: Some(Theme::default()),
        ..ExportOptions::default()
    };
    let list = hero_and_footer();

    assert_eq!(compile_page(&list, &options), compile_page(&list, &options));
}

#[test]
fn test_meta_and_styles_by_default() {
    let html = compile_page(&hero_and_footer(), &ExportOptions::default());

    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("<title>My Landing Page</title>"));
    assert!(html.contains("content=\"Created with Pagesmith\""));
    assert!(html.contains("<meta charset=\"utf-8\">"));
    assert!(html.contains("<style>"));
    assert!(html.contains(".btn-primary"));
    assert!(!html.contains("--theme-primary"));
}

#[test]
fn test_no_meta() {
    let options = ExportOptions {
        include_meta: false,
        ..ExportOptions::default()
    };
    let html = compile_page(&hero_and_footer(), &options);

    assert!(!html.contains("<title>"));
    assert!(!html.contains("<meta"));
}

#[test]
fn test_text_is_escaped() {
    let list = sections(json!([
        {
            "id": "s1",
            "type": "hero",
            "variationId": "hero-centered",
            "content": {
                "title": "<script>alert('x')</script>",
                "ctaText": "Go",
                "ctaHref": "\" onclick=\"evil()"
            },
            "order": 0
        }
    ]));
    let options = ExportOptions {
        title: "Tom & Jerry".to_string(),
        ..ExportOptions::default()
    };
    let html = compile_page(&list, &options);

    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(html.contains("href=\"&quot; onclick=&quot;evil()\""));
    assert!(html.contains("<title>Tom &amp; Jerry</title>"));
}

#[test]
fn test_missing_fields_use_variation_defaults() {
    let list = sections(json!([
        { "id": "s1", "type": "header", "variationId": "header-with-cta", "content": { "logoText": "Acme" }, "order": 0 }
    ]));
    let html = compile_page(&list, &ExportOptions::default());

    assert!(html.contains(">Acme</span>"));
    assert!(html.contains(">Get Started</a>"));
    assert!(html.contains(">Contact</a>"));
}

#[test]
fn test_hero_with_image_uses_split_layout() {
    let list = sections(json!([
        { "id": "s1", "type": "hero", "variationId": "hero-split", "content": { "imageAlt": "Dashboard" }, "order": 0 }
    ]));
    let html = compile_page(&list, &ExportOptions::default());

    assert!(html.contains("lg:grid-cols-2"));
    assert!(html.contains("alt=\"Dashboard\""));
    assert!(html.contains("<img src=\"https://images.unsplash.com/"));
}

#[test]
fn test_unknown_variation_and_unsupported_types_are_skipped() {
    let list = sections(json!([
        { "id": "s1", "type": "hero", "variationId": "hero-removed", "content": { "title": "Gone" }, "order": 0 },
        { "id": "s2", "type": "faq", "variationId": "faq-accordion", "content": {}, "order": 1 },
        { "id": "s3", "type": "cta", "variationId": "cta-simple", "content": {}, "order": 2 }
    ]));
    let html = compile_page(&list, &ExportOptions::default());

    assert!(!html.contains("Gone"));
    assert!(!html.contains("Frequently"));
    assert!(html.contains("Ready to get started?"));
}

#[test]
fn test_pricing_marks_popular_plan() {
    let list = sections(json!([
        { "id": "s1", "type": "pricing", "variationId": "pricing-cards", "content": {}, "order": 0 }
    ]));
    let html = compile_page(&list, &ExportOptions::default());

    assert_eq!(html.matches("plan-popular\"").count(), 1);
    assert!(html.contains("Most Popular"));
}

#[test]
fn test_analytics_placement() {
    let options = ExportOptions {
        analytics: vec![
            AnalyticsIntegration::new("google-tag-manager", "GTM-XYZ"),
            AnalyticsIntegration::new("unknown-provider", "abc"),
        ],
        ..ExportOptions::default()
    };
    let html = compile_page(&hero_and_footer(), &options);

    let head_end = html.find("</head>").unwrap();
    let body_start = html.find("<body>").unwrap();
    let gtm = html.find("googletagmanager.com/gtm.js").unwrap();
    let noscript = html.find("<noscript><iframe").unwrap();

    assert!(gtm < head_end);
    assert!(noscript > body_start);
    assert!(noscript < html.find("<section").unwrap());
}

#[test]
fn test_compact_output_keeps_script_lines() {
    let options = ExportOptions {
        pretty: false,
        analytics: vec![AnalyticsIntegration::new("google-analytics", "G-1")],
        ..ExportOptions::default()
    };
    let html = compile_page(&hero_and_footer(), &options);

    assert!(html.contains("<!DOCTYPE html><html lang=\"en\"><head>"));
    assert!(html.contains("window.dataLayer = window.dataLayer || [];\n"));
}

#[test]
fn test_theme_variables() {
    let options = ExportOptions {
        theme: Some(Theme {
            primary: "#ff0000".to_string(),
            ..Theme::default()
        }),
        ..ExportOptions::default()
    };
    let html = compile_page(&hero_and_footer(), &options);
    assert!(html.contains("--theme-primary: #ff0000;"));

    let unstyled = ExportOptions {
        include_styles: false,
        ..options
    };
    assert!(!compile_page(&hero_and_footer(), &unstyled).contains("--theme-primary"));
}

#[test]
fn test_empty_page() {
    let html = compile_page(&[], &ExportOptions::default());
    assert!(html.contains("<body>"));
    assert!(html.trim_end().ends_with("</html>"));
}
