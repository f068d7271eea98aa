//! Anchor and image reference extraction.
//!
//! Resolves every `<a href>` and `<img src>` against the page URL and
//! classifies anchors as internal or external by comparing network locations.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::utils::parse_selector_unsafe;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a[href]", "link extraction"));

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img", "image extraction"));

/// The network location of a URL: `host` or `host:port`.
///
/// Mirrors the authority component used for internal/external classification;
/// comparison is a case-sensitive exact match.
pub fn netloc(url: &Url) -> String {
    let host = url.host_str().unwrap_or("");
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

/// Resolves every anchor href against the page URL, in document order.
///
/// Unresolvable hrefs are skipped. Duplicates are kept: the broken-link scan
/// probes each occurrence, matching the audited page's own link list.
pub fn collect_anchor_urls(document: &Html, base: &Url) -> Vec<String> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(|href| base.join(href).ok())
        .map(|resolved| resolved.to_string())
        .collect()
}

/// Splits resolved anchor URLs into internal and external lists.
///
/// A link is internal iff its network location equals the page's exactly.
pub fn classify_links(document: &Html, base: &Url) -> (Vec<String>, Vec<String>) {
    let page_netloc = netloc(base);
    let mut internal = Vec::new();
    let mut external = Vec::new();
    for href in document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
    {
        let Ok(resolved) = base.join(href) else {
            continue;
        };
        if netloc(&resolved) == page_netloc {
            internal.push(resolved.to_string());
        } else {
            external.push(resolved.to_string());
        }
    }
    (internal, external)
}

/// Image references found in the document: resolved src plus alt text.
#[derive(Debug, Clone)]
pub struct ImageRef {
    /// Absolute image URL.
    pub src: String,
    /// Alt text, if the attribute is present.
    pub alt: Option<String>,
}

/// Inventory of `<img>` tags in a document.
#[derive(Debug, Clone, Default)]
pub struct ImageInventory {
    /// Total `<img>` tag count.
    pub count: usize,
    /// Tags with a non-empty alt attribute.
    pub with_alt: usize,
    /// References with a resolvable src, in document order.
    pub refs: Vec<ImageRef>,
}

/// Collects every `<img>`: total count, alt-text count, and resolved refs.
pub fn collect_images(document: &Html, base: &Url) -> ImageInventory {
    let mut inventory = ImageInventory::default();
    for img in document.select(&IMG_SELECTOR) {
        inventory.count += 1;
        let alt = img.value().attr("alt");
        if alt.is_some_and(|a| !a.is_empty()) {
            inventory.with_alt += 1;
        }
        let Some(resolved) = img.value().attr("src").and_then(|src| base.join(src).ok()) else {
            continue;
        };
        inventory.refs.push(ImageRef {
            src: resolved.to_string(),
            alt: alt.map(|a| a.to_string()),
        });
    }
    inventory
}
