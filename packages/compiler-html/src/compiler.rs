use crate::analytics::generate_analytics;
use crate::options::ExportOptions;
use crate::styles::{theme_styles, BASE_STYLES};
use pagesmith_editor::SectionInstance;
use pagesmith_sections::{Content, SectionRegistry, SectionType};
use serde_json::Value;

struct Context<'a> {
    options: &'a ExportOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a ExportOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    /// Multi-line text whose line breaks must survive compact output (inline scripts)
    fn add_block(&mut self, text: &str) {
        for line in text.lines() {
            if self.options.pretty {
                self.add_indent();
            }
            self.add(line);
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    /// `<tag attrs>` then one level deeper
    fn open(&mut self, tag: &str) {
        self.add_line(&format!("<{}>", tag));
        self.indent();
    }

    fn close(&mut self, name: &str) {
        self.dedent();
        self.add_line(&format!("</{}>", name));
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile an ordered section list into a standalone HTML document
/// using the built-in section registry
pub fn compile_page(sections: &[SectionInstance], options: &ExportOptions) -> String {
    compile_page_with_registry(sections, options, &SectionRegistry::builtin())
}

/// Compile with an explicit registry (defaults and known variations come from it)
pub fn compile_page_with_registry(
    sections: &[SectionInstance],
    options: &ExportOptions,
    registry: &SectionRegistry,
) -> String {
    let mut ordered: Vec<&SectionInstance> = sections.iter().collect();
    ordered.sort_by_key(|section| section.order);

    let analytics = generate_analytics(&options.analytics);
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.open(&format!("html lang=\"{}\"", escape_html(&options.lang)));

    ctx.open("head");
    compile_head(&mut ctx);
    for snippet in &analytics.head {
        ctx.add_block(snippet);
    }
    ctx.close("head");

    ctx.open("body");
    for snippet in &analytics.body_start {
        ctx.add_block(snippet);
    }

    for section in ordered {
        compile_section(section, registry, &mut ctx);
    }

    ctx.close("body");
    ctx.close("html");

    ctx.get_output()
}

fn compile_head(ctx: &mut Context) {
    let options = ctx.options;

    if options.include_meta {
        ctx.add_line("<meta charset=\"utf-8\">");
        ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
        ctx.add_line(&format!("<title>{}</title>", escape_html(&options.title)));
        ctx.add_line(&format!(
            "<meta name=\"description\" content=\"{}\">",
            escape_html(&options.description)
        ));
    }

    if options.include_styles {
        ctx.open("style");
        for line in BASE_STYLES.lines() {
            ctx.add_line(line);
        }
        if let Some(theme) = &options.theme {
            for line in theme_styles(theme).lines() {
                ctx.add_line(line);
            }
        }
        ctx.close("style");
    }
}

fn compile_section(section: &SectionInstance, registry: &SectionRegistry, ctx: &mut Context) {
    if registry
        .variation(section.section_type, &section.variation_id)
        .is_none()
    {
        tracing::debug!(
            section_id = %section.id,
            variation_id = %section.variation_id,
            "skipping section with unknown variation"
        );
        return;
    }

    let content = registry.resolve_content(section.section_type, &section.variation_id, &section.content);

    match section.section_type {
        SectionType::Header => compile_header(&content, ctx),
        SectionType::Hero => compile_hero(&content, ctx),
        SectionType::Features => compile_features(&content, ctx),
        SectionType::Pricing => compile_pricing(&content, ctx),
        SectionType::Testimonials => compile_testimonials(&content, ctx),
        SectionType::Cta => compile_cta(&content, ctx),
        SectionType::Footer => compile_footer(&content, ctx),
        SectionType::About | SectionType::Faq | SectionType::Newsletter | SectionType::Stats => {
            tracing::debug!(section_type = %section.section_type, "no HTML generator for section type");
        }
    }
}

fn compile_header(content: &Content, ctx: &mut Context) {
    ctx.open("header style=\"background-color: white; border-bottom: 1px solid #e5e7eb;\"");
    ctx.open("div class=\"container\"");
    ctx.open("div style=\"display: flex; justify-content: space-between; align-items: center; height: 4rem;\"");

    ctx.open("div class=\"flex items-center\"");
    ctx.add_line(&format!(
        "<span style=\"font-size: 1.5rem; margin-right: 0.5rem;\">{}</span>",
        text(content, "logo")
    ));
    ctx.add_line(&format!(
        "<span class=\"text-xl font-bold text-gray-900\">{}</span>",
        text(content, "logoText")
    ));
    ctx.close("div");

    ctx.open("nav style=\"display: flex; gap: 2rem; align-items: center;\"");
    for item in list(content, "navItems") {
        ctx.add_line(&format!(
            "<a href=\"{}\" style=\"color: #374151; text-decoration: none;\">{}</a>",
            text(item, "href"),
            text(item, "label")
        ));
    }
    cta_link(content, "ctaText", "ctaHref", "btn btn-primary", ctx);
    ctx.close("nav");

    ctx.close("div");
    ctx.close("div");
    ctx.close("header");
}

fn compile_hero(content: &Content, ctx: &mut Context) {
    let image_url = text(content, "imageUrl");

    ctx.open("section class=\"bg-white py-20\"");
    ctx.open("div class=\"container\"");

    if image_url.is_empty() {
        ctx.open("div class=\"text-center\"");
        hero_copy(content, ctx);
        ctx.close("div");
    } else {
        ctx.open("div class=\"grid grid-cols-1 lg:grid-cols-2 gap-12 items-center\"");
        ctx.open("div");
        hero_copy(content, ctx);
        ctx.close("div");
        ctx.open("div");
        let alt = text(content, "imageAlt");
        ctx.add_line(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"rounded-lg shadow-lg\" />",
            image_url,
            if alt.is_empty() { "Hero image".to_string() } else { alt }
        ));
        ctx.close("div");
        ctx.close("div");
    }

    ctx.close("div");
    ctx.close("section");
}

fn hero_copy(content: &Content, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<h1 class=\"text-4xl font-bold text-gray-900 mb-6\">{}</h1>",
        text(content, "title")
    ));
    ctx.add_line(&format!(
        "<p class=\"text-xl text-gray-600 mb-10\">{}</p>",
        text(content, "subtitle")
    ));
    cta_link(content, "ctaText", "ctaHref", "btn btn-primary", ctx);
}

fn compile_features(content: &Content, ctx: &mut Context) {
    ctx.open("section class=\"bg-gray-50 py-20\"");
    ctx.open("div class=\"container\"");
    section_heading(content, "text-gray-900", "text-gray-600", ctx);

    ctx.open("div class=\"grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8\"");
    for feature in list(content, "features") {
        ctx.open("div class=\"bg-white p-6 rounded-lg shadow-lg\"");
        ctx.add_line(&format!(
            "<div style=\"font-size: 3rem; margin-bottom: 1rem;\">{}</div>",
            text(feature, "icon")
        ));
        ctx.add_line(&format!(
            "<h3 class=\"text-xl font-semibold text-gray-900 mb-2\">{}</h3>",
            text(feature, "title")
        ));
        ctx.add_line(&format!(
            "<p class=\"text-gray-600\">{}</p>",
            text(feature, "description")
        ));
        ctx.close("div");
    }
    ctx.close("div");

    ctx.close("div");
    ctx.close("section");
}

fn compile_pricing(content: &Content, ctx: &mut Context) {
    ctx.open("section class=\"bg-gray-50 py-20\"");
    ctx.open("div class=\"container\"");
    section_heading(content, "text-gray-900", "text-gray-600", ctx);

    ctx.open("div class=\"grid grid-cols-1 md:grid-cols-3 gap-8\"");
    for plan in list(content, "plans") {
        let popular = plan.get("popular").and_then(Value::as_bool).unwrap_or(false);

        if popular {
            ctx.open("div class=\"bg-white p-6 rounded-lg shadow-lg plan-popular\"");
            ctx.add_line("<div class=\"text-center mb-4\"><span style=\"background-color: #2563eb; color: white; padding: 0.25rem 0.75rem; border-radius: 9999px; font-size: 0.875rem;\">Most Popular</span></div>");
        } else {
            ctx.open("div class=\"bg-white p-6 rounded-lg shadow-lg\"");
        }

        ctx.open("div class=\"text-center\"");
        ctx.add_line(&format!(
            "<h3 class=\"text-xl font-semibold text-gray-900 mb-2\">{}</h3>",
            text(plan, "name")
        ));
        ctx.open("div class=\"mb-4\"");
        ctx.add_line(&format!(
            "<span class=\"text-3xl font-bold text-gray-900\">{}</span>",
            text(plan, "price")
        ));
        ctx.add_line(&format!("<span class=\"text-gray-600\">{}</span>", text(plan, "period")));
        ctx.close("div");
        ctx.add_line(&format!(
            "<p class=\"text-gray-600 mb-6\">{}</p>",
            text(plan, "description")
        ));
        ctx.close("div");

        ctx.open("ul style=\"list-style: none; margin-bottom: 2rem;\"");
        for feature in list(plan, "features") {
            ctx.add_line(&format!(
                "<li style=\"display: flex; align-items: center; margin-bottom: 0.75rem;\"><span style=\"color: #10b981; margin-right: 0.75rem;\">✓</span><span class=\"text-gray-700\">{}</span></li>",
                value_text(feature)
            ));
        }
        ctx.close("ul");

        ctx.add_line(&format!(
            "<a href=\"{}\" class=\"btn {}\" style=\"width: 100%; justify-content: center;\">{}</a>",
            text(plan, "ctaHref"),
            if popular { "btn-primary" } else { "btn-secondary" },
            text(plan, "ctaText")
        ));
        ctx.close("div");
    }
    ctx.close("div");

    ctx.close("div");
    ctx.close("section");
}

fn compile_testimonials(content: &Content, ctx: &mut Context) {
    ctx.open("section class=\"bg-white py-20\"");
    ctx.open("div class=\"container\"");
    section_heading(content, "text-gray-900", "text-gray-600", ctx);

    ctx.open("div class=\"grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8\"");
    for testimonial in list(content, "testimonials") {
        let name = text(testimonial, "name");

        ctx.open("div class=\"bg-gray-50 p-6 rounded-lg\"");
        ctx.add_line(&format!(
            "<p class=\"text-gray-700 text-lg mb-4\">&quot;{}&quot;</p>",
            text(testimonial, "content")
        ));
        ctx.open("div class=\"flex items-center\"");
        let avatar = text(testimonial, "avatar");
        if !avatar.is_empty() {
            ctx.add_line(&format!(
                "<img src=\"{}\" alt=\"{}\" style=\"width: 3rem; height: 3rem; border-radius: 50%; margin-right: 1rem;\" />",
                avatar, name
            ));
        }
        ctx.open("div");
        ctx.add_line(&format!("<h4 class=\"font-semibold text-gray-900\">{}</h4>", name));
        ctx.add_line(&format!(
            "<p class=\"text-gray-600 text-sm\">{}</p>",
            role_line(testimonial)
        ));
        ctx.close("div");
        ctx.close("div");
        ctx.close("div");
    }
    ctx.close("div");

    ctx.close("div");
    ctx.close("section");
}

fn compile_cta(content: &Content, ctx: &mut Context) {
    ctx.open("section class=\"bg-blue-600 py-20\"");
    ctx.open("div class=\"container\"");
    ctx.open("div class=\"text-center\"");
    ctx.add_line(&format!(
        "<h2 class=\"text-3xl font-bold text-white mb-4\">{}</h2>",
        text(content, "title")
    ));
    ctx.add_line(&format!(
        "<p class=\"text-xl text-blue-100 mb-10\">{}</p>",
        text(content, "subtitle")
    ));
    cta_link(content, "ctaText", "ctaHref", "btn btn-secondary", ctx);
    ctx.close("div");
    ctx.close("div");
    ctx.close("section");
}

fn compile_footer(content: &Content, ctx: &mut Context) {
    ctx.open("footer class=\"bg-gray-900 text-white py-16\"");
    ctx.open("div class=\"container\"");
    ctx.open("div class=\"grid grid-cols-1 md:grid-cols-4 gap-8\"");

    ctx.open("div");
    ctx.open("div class=\"flex items-center mb-4\"");
    ctx.add_line(&format!(
        "<span style=\"font-size: 1.5rem; margin-right: 0.5rem;\">{}</span>",
        text(content, "logo")
    ));
    ctx.add_line(&format!("<span class=\"text-xl font-bold\">{}</span>", text(content, "logoText")));
    ctx.close("div");
    ctx.add_line(&format!(
        "<p style=\"color: #9ca3af; margin-bottom: 1.5rem;\">{}</p>",
        text(content, "description")
    ));
    ctx.open("div class=\"flex space-x-4\"");
    for social in list(content, "socialLinks") {
        ctx.add_line(&format!(
            "<a href=\"{}\" aria-label=\"{}\" style=\"color: #9ca3af; font-size: 1.25rem; text-decoration: none;\">{}</a>",
            text(social, "href"),
            text(social, "name"),
            text(social, "icon")
        ));
    }
    ctx.close("div");
    ctx.close("div");

    for column in list(content, "sections") {
        ctx.open("div");
        ctx.add_line(&format!(
            "<h3 style=\"font-size: 0.875rem; font-weight: 600; text-transform: uppercase; letter-spacing: 0.05em; margin-bottom: 1rem;\">{}</h3>",
            text(column, "title")
        ));
        ctx.open("ul style=\"list-style: none;\"");
        for link in list(column, "links") {
            ctx.add_line(&format!(
                "<li style=\"margin-bottom: 0.75rem;\"><a href=\"{}\" style=\"color: #9ca3af; text-decoration: none;\">{}</a></li>",
                text(link, "href"),
                text(link, "label")
            ));
        }
        ctx.close("ul");
        ctx.close("div");
    }

    ctx.close("div");
    ctx.open("div style=\"margin-top: 3rem; padding-top: 2rem; border-top: 1px solid #374151; text-align: center;\"");
    ctx.add_line(&format!("<p style=\"color: #9ca3af;\">{}</p>", text(content, "copyright")));
    ctx.close("div");
    ctx.close("div");
    ctx.close("footer");
}

fn section_heading(content: &Content, title_class: &str, subtitle_class: &str, ctx: &mut Context) {
    ctx.open("div class=\"text-center mb-16\"");
    ctx.add_line(&format!(
        "<h2 class=\"text-3xl font-bold {} mb-4\">{}</h2>",
        title_class,
        text(content, "title")
    ));
    ctx.add_line(&format!(
        "<p class=\"text-xl {}\">{}</p>",
        subtitle_class,
        text(content, "subtitle")
    ));
    ctx.close("div");
}

/// A button link, omitted entirely when its label is empty
fn cta_link(content: &Content, text_key: &str, href_key: &str, class: &str, ctx: &mut Context) {
    let label = text(content, text_key);
    if label.is_empty() {
        return;
    }
    let href = text(content, href_key);
    ctx.add_line(&format!(
        "<a href=\"{}\" class=\"{}\">{}</a>",
        if href.is_empty() { "#".to_string() } else { href },
        class,
        label
    ));
}

fn role_line(testimonial: &Value) -> String {
    let role = text(testimonial, "role");
    let company = text(testimonial, "company");
    match (role.is_empty(), company.is_empty()) {
        (false, false) => format!("{} at {}", role, company),
        (false, true) => role,
        (true, false) => company,
        (true, true) => String::new(),
    }
}

/// Escaped text of a string or number field; anything else renders as empty
fn text<V: FieldSource + ?Sized>(source: &V, key: &str) -> String {
    source.field(key).map(value_text).unwrap_or_default()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => escape_html(s),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn list<'v, V: FieldSource + ?Sized>(source: &'v V, key: &str) -> &'v [Value] {
    source
        .field(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Field lookup shared by top-level content maps and nested JSON items
trait FieldSource {
    fn field(&self, key: &str) -> Option<&Value>;
}

impl FieldSource for Content {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl FieldSource for Value {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
