//! Basic HTML extraction utilities.
//!
//! This module provides functions to extract basic on-page elements:
//! - Page title and meta description
//! - Canonical link and robots meta tag
//! - Favicon link
//! - Heading tag counts and H1 text

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::utils::parse_selector_unsafe;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("title", "title extraction"));

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta[name='description']", "description extraction"));

static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("link[rel='canonical']", "canonical extraction"));

static META_ROBOTS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta[name='robots']", "robots meta extraction"));

static FAVICON_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("link[rel='icon']", "favicon extraction"));

static SHORTCUT_FAVICON_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("link[rel='shortcut icon']", "favicon extraction"));

static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("h1", "h1 extraction"));

static HEADING_SELECTORS: LazyLock<[Selector; 6]> = LazyLock::new(|| {
    ["h1", "h2", "h3", "h4", "h5", "h6"]
        .map(|tag| parse_selector_unsafe(tag, "heading count extraction"))
});

/// Extracts the page title: the first `<title>` element's text, trimmed.
///
/// Returns `None` when the document has no title element; the renderer maps
/// that to the literal "No title".
pub fn extract_title(document: &Html) -> Option<String> {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// Extracts the meta description: the first `<meta name="description">`
/// content attribute.
pub fn extract_description(document: &Html) -> Option<String> {
    document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.to_string())
}

/// Extracts the canonical URL from the first `<link rel="canonical">`.
pub fn extract_canonical(document: &Html) -> Option<String> {
    document
        .select(&CANONICAL_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(|href| href.to_string())
}

/// Extracts the robots directive from the first `<meta name="robots">`.
pub fn extract_robots_meta(document: &Html) -> Option<String> {
    document
        .select(&META_ROBOTS_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.to_string())
}

/// Extracts the favicon link, resolved to an absolute URL against the page.
///
/// Checks `<link rel="icon">` first, then `<link rel="shortcut icon">`.
pub fn extract_favicon(document: &Html, base: &Url) -> Option<String> {
    let href = document
        .select(&FAVICON_SELECTOR)
        .next()
        .or_else(|| document.select(&SHORTCUT_FAVICON_SELECTOR).next())
        .and_then(|element| element.value().attr("href"))?;
    base.join(href).ok().map(|resolved| resolved.to_string())
}

/// Counts `<h1>`..`<h6>` tags, independent of nesting or visibility.
pub fn heading_counts(document: &Html) -> [usize; 6] {
    let mut counts = [0usize; 6];
    for (i, selector) in HEADING_SELECTORS.iter().enumerate() {
        counts[i] = document.select(selector).count();
    }
    counts
}

/// Collects the whitespace-stripped text of every `<h1>` in document order.
pub fn extract_h1_texts(document: &Html) -> Vec<String> {
    document
        .select(&H1_SELECTOR)
        .map(|element| {
            element
                .text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
