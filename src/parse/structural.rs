//! Structural markup detection.
//!
//! Open Graph / schema markup presence, iframe inventory, and social media
//! link detection.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::config::SOCIAL_DOMAINS;
use crate::utils::parse_selector_unsafe;

static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta", "og tag detection"));

static SCHEMA_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        "script[type='application/ld+json']",
        "schema markup detection",
    )
});

static IFRAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("iframe", "iframe detection"));

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a[href]", "social link detection"));

/// Whether any meta tag's `property` attribute starts with `og:`.
pub fn has_og_tags(document: &Html) -> bool {
    document.select(&META_SELECTOR).any(|element| {
        element
            .value()
            .attr("property")
            .is_some_and(|property| property.starts_with("og:"))
    })
}

/// Whether at least one `<script type="application/ld+json">` exists.
pub fn has_schema_markup(document: &Html) -> bool {
    document.select(&SCHEMA_SELECTOR).next().is_some()
}

/// Collects, per `<iframe>`, every attribute whose name contains "src".
///
/// Covers `src`, `data-src`, and similar lazy-loading variants. Attribute
/// order within each map follows the document.
pub fn extract_iframes(document: &Html) -> Vec<Vec<(String, String)>> {
    document
        .select(&IFRAME_SELECTOR)
        .map(|iframe| {
            iframe
                .value()
                .attrs()
                .filter(|(name, _)| name.contains("src"))
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect()
        })
        .collect()
}

/// Collects anchor hrefs pointing at one of the known social domains.
///
/// Hrefs are returned as written in the markup, in document order.
pub fn extract_social_links(document: &Html) -> Vec<String> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| SOCIAL_DOMAINS.iter().any(|domain| href.contains(domain)))
        .map(|href| href.to_string())
        .collect()
}
