//! Built-in section catalog and the default content of every variation.

use serde_json::{json, Value};

use crate::registry::{SectionDefinition, SectionVariation};
use crate::types::{Content, SectionType};

fn object(value: Value) -> Content {
    match value {
        Value::Object(map) => map,
        _ => Content::new(),
    }
}

fn variation(id: &str, name: &str, description: &str, defaults: Value) -> SectionVariation {
    SectionVariation {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        default_content: object(defaults),
    }
}

fn definition(
    section_type: SectionType,
    name: &str,
    icon: &str,
    variations: Vec<SectionVariation>,
) -> SectionDefinition {
    SectionDefinition {
        section_type,
        name: name.to_string(),
        icon: icon.to_string(),
        variations,
    }
}

fn nav_items() -> Value {
    json!([
        { "label": "Home", "href": "#" },
        { "label": "About", "href": "#" },
        { "label": "Services", "href": "#" },
        { "label": "Contact", "href": "#" }
    ])
}

fn pricing_plans() -> Value {
    json!([
        {
            "name": "Starter",
            "price": "$9",
            "period": "per month",
            "description": "Perfect for individuals and small projects",
            "features": ["Up to 5 pages", "Basic templates", "Email support", "SSL certificate"],
            "ctaText": "Get Started",
            "ctaHref": "#"
        },
        {
            "name": "Professional",
            "price": "$29",
            "period": "per month",
            "description": "Best for growing businesses",
            "features": [
                "Unlimited pages",
                "Premium templates",
                "Priority support",
                "Custom domain",
                "Analytics dashboard",
                "A/B testing"
            ],
            "ctaText": "Start Free Trial",
            "ctaHref": "#",
            "popular": true
        },
        {
            "name": "Enterprise",
            "price": "$99",
            "period": "per month",
            "description": "For large organizations",
            "features": [
                "Everything in Professional",
                "White-label solution",
                "Dedicated support",
                "Custom integrations",
                "Advanced analytics",
                "Team collaboration"
            ],
            "ctaText": "Contact Sales",
            "ctaHref": "#"
        }
    ])
}

pub(crate) fn builtin_definitions() -> Vec<SectionDefinition> {
    vec![
        definition(SectionType::Header, "Header", "🏠", vec![
            variation("header-simple", "Simple Navigation", "Header with logo and navigation menu", json!({
                "logo": "🚀",
                "logoText": "Brand",
                "navItems": nav_items()
            })),
            variation(
                "header-with-cta",
                "Navigation with CTA",
                "Header with logo, navigation menu, and call-to-action button",
                json!({
                    "logo": "🚀",
                    "logoText": "Brand",
                    "navItems": nav_items(),
                    "ctaText": "Get Started",
                    "ctaHref": "#"
                }),
            ),
        ]),
        definition(SectionType::Hero, "Hero", "🎯", vec![
            variation("hero-centered", "Centered Hero", "Hero with centered text and CTA button", json!({
                "title": "Build Beautiful Landing Pages",
                "subtitle": "Create stunning marketing pages in minutes with our drag-and-drop builder. No coding required.",
                "ctaText": "Get Started Free",
                "ctaHref": "#",
                "secondaryCtaText": "Watch Demo",
                "secondaryCtaHref": "#"
            })),
            variation("hero-split", "Split Hero", "Hero with left text and right image", json!({
                "title": "Build Beautiful Landing Pages",
                "subtitle": "Create stunning marketing pages in minutes with our drag-and-drop builder. No coding required.",
                "ctaText": "Get Started Free",
                "ctaHref": "#",
                "secondaryCtaText": "Watch Demo",
                "secondaryCtaHref": "#",
                "imageUrl": "https://images.unsplash.com/photo-1551434678-e076c223a692?auto=format&fit=crop&w=2850&q=80",
                "imageAlt": "Hero image"
            })),
        ]),
        definition(SectionType::Features, "Features", "✨", vec![
            variation("features-grid", "3-Column Grid", "3-column feature grid with icons", json!({
                "title": "Everything you need",
                "subtitle": "Our platform provides all the tools you need to build amazing landing pages.",
                "features": [
                    { "icon": "⚡", "title": "Lightning Fast", "description": "Built for speed with modern technologies and optimized performance." },
                    { "icon": "🎨", "title": "Beautiful Design", "description": "Stunning pre-built components that look great on any device." },
                    { "icon": "🔧", "title": "Easy to Use", "description": "Drag and drop interface makes building pages simple and intuitive." },
                    { "icon": "📱", "title": "Mobile Ready", "description": "All components are fully responsive and mobile-optimized." },
                    { "icon": "🔒", "title": "Secure", "description": "Built with security best practices and regular updates." },
                    { "icon": "💰", "title": "Great Value", "description": "Affordable pricing with no hidden fees or surprise charges." }
                ]
            })),
            variation("features-list", "Alternating List", "Feature list with alternating image/text", json!({
                "title": "Powerful Features",
                "subtitle": "Everything you need to create amazing landing pages.",
                "features": [
                    { "icon": "🎨", "title": "Drag & Drop Builder", "description": "Build pages visually with our intuitive drag and drop interface. No coding required." },
                    { "icon": "📱", "title": "Mobile Responsive", "description": "All templates are fully responsive and look great on desktop, tablet, and mobile devices." },
                    { "icon": "⚡", "title": "Fast Performance", "description": "Optimized for speed with modern web technologies and best practices." }
                ]
            })),
        ]),
        definition(SectionType::Pricing, "Pricing", "💰", vec![
            variation("pricing-cards", "3-Tier Cards", "3-tier pricing cards", json!({
                "title": "Simple, transparent pricing",
                "subtitle": "Choose the plan that's right for you",
                "plans": pricing_plans()
            })),
            variation("pricing-simple", "Simple Table", "Simple pricing table", json!({
                "title": "Choose your plan",
                "subtitle": "Select the perfect plan for your needs",
                "plans": pricing_plans()
            })),
        ]),
        definition(SectionType::Testimonials, "Testimonials", "💬", vec![
            variation("testimonials-grid", "Grid of Cards", "Grid of testimonial cards", json!({
                "title": "What our customers say",
                "subtitle": "Don't just take our word for it - see what our customers have to say about us.",
                "testimonials": [
                    {
                        "name": "Sarah Johnson",
                        "role": "Marketing Director",
                        "company": "TechCorp",
                        "content": "This platform has revolutionized how we create landing pages. The drag-and-drop interface is incredibly intuitive.",
                        "avatar": "https://images.unsplash.com/photo-1494790108755-2616b612b4e0?auto=format&fit=crop&w=256&q=80"
                    },
                    {
                        "name": "Michael Chen",
                        "role": "Startup Founder",
                        "company": "InnovateLab",
                        "content": "We went from concept to live landing page in under an hour. The templates are beautiful and professional.",
                        "avatar": "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=256&q=80"
                    },
                    {
                        "name": "Emily Rodriguez",
                        "role": "Product Manager",
                        "company": "DesignStudio",
                        "content": "The best landing page builder we've used. Clean, fast, and the results speak for themselves.",
                        "avatar": "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&w=256&q=80"
                    }
                ]
            })),
        ]),
        definition(SectionType::Cta, "Call to Action", "🎯", vec![
            variation("cta-simple", "Simple CTA", "Simple centered CTA with button", json!({
                "title": "Ready to get started?",
                "subtitle": "Join thousands of users who are already building amazing landing pages.",
                "ctaText": "Start Building Today",
                "ctaHref": "#",
                "secondaryCtaText": "Contact Sales",
                "secondaryCtaHref": "#"
            })),
        ]),
        definition(SectionType::Footer, "Footer", "📄", vec![
            variation("footer-simple", "Links + Social", "Footer with links and social icons", json!({
                "logo": "🚀",
                "logoText": "Brand",
                "description": "Building amazing landing pages made simple.",
                "sections": [
                    {
                        "title": "Product",
                        "links": [
                            { "label": "Features", "href": "#" },
                            { "label": "Pricing", "href": "#" },
                            { "label": "Templates", "href": "#" },
                            { "label": "Integrations", "href": "#" }
                        ]
                    },
                    {
                        "title": "Company",
                        "links": [
                            { "label": "About", "href": "#" },
                            { "label": "Blog", "href": "#" },
                            { "label": "Careers", "href": "#" },
                            { "label": "Contact", "href": "#" }
                        ]
                    },
                    {
                        "title": "Support",
                        "links": [
                            { "label": "Help Center", "href": "#" },
                            { "label": "Documentation", "href": "#" },
                            { "label": "Community", "href": "#" },
                            { "label": "Status", "href": "#" }
                        ]
                    }
                ],
                "socialLinks": [
                    { "name": "Twitter", "href": "#", "icon": "🐦" },
                    { "name": "Facebook", "href": "#", "icon": "📘" },
                    { "name": "LinkedIn", "href": "#", "icon": "💼" },
                    { "name": "Instagram", "href": "#", "icon": "📷" }
                ],
                "copyright": "© 2024 Brand. All rights reserved."
            })),
        ]),
        definition(SectionType::About, "About", "👥", vec![
            variation("about-team", "Team Grid", "Team member grid with photos and bios", json!({
                "title": "Meet Our Team",
                "subtitle": "The passionate people behind our success",
                "members": []
            })),
            variation("about-story", "Company Story", "Company story with mission and values", json!({
                "title": "Our Story",
                "subtitle": "Building the future of productivity, one innovation at a time",
                "values": [
                    { "title": "Focus on Impact", "description": "Everything we build is designed to create meaningful value for our users." },
                    { "title": "Customer First", "description": "Our customers' success is our success. We listen, learn, and deliver." }
                ]
            })),
        ]),
        definition(SectionType::Faq, "FAQ", "❓", vec![
            variation("faq-accordion", "Accordion Style", "Expandable FAQ accordion", json!({
                "title": "Frequently Asked Questions",
                "subtitle": "Find answers to common questions about our product and services",
                "faqs": [],
                "contact": {
                    "title": "Still have questions?",
                    "description": "Can't find the answer you're looking for? Please chat to our friendly team.",
                    "buttonText": "Get in touch"
                }
            })),
            variation("faq-grid", "Categorized Grid", "FAQ organized by categories", json!({
                "title": "How can we help you?",
                "subtitle": "Everything you need to know about our product and services",
                "categories": []
            })),
        ]),
        definition(SectionType::Newsletter, "Newsletter", "📧", vec![
            variation("newsletter-simple", "Newsletter Signup", "Newsletter signup with benefits", json!({
                "title": "Stay in the Loop",
                "subtitle": "Get the latest updates, insights, and exclusive content delivered straight to your inbox.",
                "placeholder": "Enter your email address",
                "buttonText": "Subscribe Now"
            })),
        ]),
        definition(SectionType::Stats, "Social Proof & Stats", "📊", vec![
            variation("stats-counters", "Animated Counters", "Social proof with animated counter stats", json!({
                "title": "Trusted by Industry Leaders",
                "subtitle": "Join thousands of companies that rely on our platform for their success",
                "stats": []
            })),
        ]),
    ]
}
