//! Markup extraction.
//!
//! Parses a fetched HTML body and derives every markup-based field of the
//! audit in one synchronous pass. The parsed `scraper::Html` tree is not
//! `Send`, so [`PageSnapshot::from_html`] consumes it entirely before the
//! async fetch stages run.

mod html;
mod keywords;
mod links;
mod structural;

#[cfg(test)]
mod tests;

pub use html::{
    extract_canonical, extract_description, extract_favicon, extract_h1_texts,
    extract_robots_meta, extract_title, heading_counts,
};
pub use keywords::{extract_top_keywords, top_keywords_from_text};
pub use links::{classify_links, collect_anchor_urls, collect_images, netloc, ImageInventory, ImageRef};
pub use structural::{extract_iframes, extract_social_links, has_og_tags, has_schema_markup};

use scraper::Html;
use url::Url;

/// Everything derivable from the page markup alone, extracted in one pass.
///
/// Owned data only; safe to carry across await points.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    /// Page title, if a `<title>` exists.
    pub title: Option<String>,
    /// Meta description, if present.
    pub description: Option<String>,
    /// Canonical link href, if present.
    pub canonical: Option<String>,
    /// Robots meta content, if present.
    pub robots_tag: Option<String>,
    /// Absolute favicon URL, if a favicon link exists.
    pub favicon: Option<String>,
    /// Text of every `<h1>`, in document order.
    pub h1_texts: Vec<String>,
    /// Exact counts of `<h1>`..`<h6>`.
    pub heading_counts: [usize; 6],
    /// Whether any `og:`-prefixed meta property exists.
    pub og_tags: bool,
    /// Whether any JSON-LD script tag exists.
    pub schema_markup: bool,
    /// Per-iframe map of "src"-like attributes.
    pub iframes: Vec<Vec<(String, String)>>,
    /// Anchor hrefs matching the social domain list, as written.
    pub social_links: Vec<String>,
    /// Resolved same-origin anchor URLs.
    pub internal_links: Vec<String>,
    /// Resolved other-origin anchor URLs.
    pub external_links: Vec<String>,
    /// Every resolved anchor URL, in document order (for the broken-link scan).
    pub anchor_urls: Vec<String>,
    /// `<img>` inventory (counts plus resolved refs).
    pub images: ImageInventory,
    /// Top keywords ranked by frequency.
    pub top_keywords: Vec<(String, usize)>,
}

impl PageSnapshot {
    /// Parses `body` and extracts all markup-derived fields.
    ///
    /// Relative links and image sources are resolved against `base`.
    pub fn from_html(body: &str, base: &Url) -> Self {
        let document = Html::parse_document(body);
        let (internal_links, external_links) = classify_links(&document, base);
        PageSnapshot {
            title: extract_title(&document),
            description: extract_description(&document),
            canonical: extract_canonical(&document),
            robots_tag: extract_robots_meta(&document),
            favicon: extract_favicon(&document, base),
            h1_texts: extract_h1_texts(&document),
            heading_counts: heading_counts(&document),
            og_tags: has_og_tags(&document),
            schema_markup: has_schema_markup(&document),
            iframes: extract_iframes(&document),
            social_links: extract_social_links(&document),
            internal_links,
            external_links,
            anchor_urls: collect_anchor_urls(&document, base),
            images: collect_images(&document, base),
            top_keywords: extract_top_keywords(&document),
        }
    }
}
