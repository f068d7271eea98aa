//! The audit record: every field produced for one audited page.

use serde::Serialize;

use crate::audit::ImageDetail;
use crate::pagespeed::PageSpeedReport;
use crate::whois::WhoisReport;

/// The complete set of fields produced for one audited page.
///
/// Built in one pass by the audit pipeline, consumed exactly once by the
/// renderer, never mutated in between. Absent values are typed as `Option`
/// (or empty collections) here; the renderer substitutes the report's literal
/// markers ("No title", "N/A", "Null", ...) so no rendered document ever
/// contains an empty placeholder.
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    /// The audited page URL.
    pub url: String,
    /// Absolute favicon URL; renders "No favicon link" when absent.
    pub favicon_link: Option<String>,
    /// Page title; renders "No title" when absent.
    pub title: Option<String>,
    /// Meta description; renders "No description" when absent.
    pub description: Option<String>,
    /// `<h1>` texts in document order; renders "No H1 tags" when empty.
    pub h1_texts: Vec<String>,
    /// Exact `<h1>`..`<h6>` counts.
    pub heading_counts: [usize; 6],
    /// Canonical link; renders "No canonical tag" when absent.
    pub canonical: Option<String>,
    /// Robots meta content; renders "No robots tag" when absent.
    pub robots_tag: Option<String>,
    /// At least one `og:` meta property exists.
    pub og_tags: bool,
    /// At least one JSON-LD script exists.
    pub schema_markup: bool,
    /// Page served over HTTPS.
    pub https: bool,
    /// robots.txt available at the origin.
    pub robots_txt: bool,
    /// sitemap.xml available at the origin.
    pub sitemap_xml: bool,
    /// The site serves a custom 404 page.
    pub custom_404: bool,
    /// Per-iframe "src"-like attributes; renders the one-element literal
    /// sequence `["Great! No iframes"]` when empty.
    pub iframes: Vec<Vec<(String, String)>>,
    /// Social media anchor hrefs; renders "No social media links" when empty.
    pub social_links: Vec<String>,
    /// Broken anchor URLs; renders "All links well good" when empty.
    pub broken_links: Vec<String>,
    /// Total `<img>` tag count.
    pub image_count: usize,
    /// `<img>` tags with non-empty alt text.
    pub images_with_alt: usize,
    /// Per-image details (src, alt, payload size).
    pub images: Vec<ImageDetail>,
    /// Same-origin resolved anchor URLs.
    pub internal_links: Vec<String>,
    /// Other-origin resolved anchor URLs.
    pub external_links: Vec<String>,
    /// Top keywords: at most 15 (word, count) pairs, descending count.
    pub top_keywords: Vec<(String, usize)>,
    /// PageSpeed metrics for the mobile strategy.
    pub pagespeed_mobile: PageSpeedReport,
    /// PageSpeed metrics for the desktop strategy.
    pub pagespeed_desktop: PageSpeedReport,
    /// WHOIS section.
    pub whois: WhoisReport,
}

impl AuditRecord {
    /// Title as displayed, with the literal fallback.
    pub fn display_title(&self) -> String {
        self.title.clone().unwrap_or_else(|| "No title".to_string())
    }

    /// Description as displayed, with the literal fallback.
    pub fn display_description(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| "No description".to_string())
    }

    /// Favicon link as displayed, with the literal fallback.
    pub fn display_favicon(&self) -> String {
        self.favicon_link
            .clone()
            .unwrap_or_else(|| "No favicon link".to_string())
    }

    /// Canonical tag as displayed, with the literal fallback.
    pub fn display_canonical(&self) -> String {
        self.canonical
            .clone()
            .unwrap_or_else(|| "No canonical tag".to_string())
    }

    /// Robots tag as displayed, with the literal fallback.
    pub fn display_robots_tag(&self) -> String {
        self.robots_tag
            .clone()
            .unwrap_or_else(|| "No robots tag".to_string())
    }
}

/// "Yes"/"No" marker used by the technical fields.
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
