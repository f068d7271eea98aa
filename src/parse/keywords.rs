//! Keyword extraction.
//!
//! Tokenizes the document's text, drops English stop-words, and ranks the
//! most frequent terms.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::config::TOP_KEYWORD_LIMIT;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w+").unwrap_or_else(|e| panic!("word regex failed to compile: {}", e))
});

static STOP_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    stop_words::get(stop_words::LANGUAGE::English)
        .into_iter()
        .collect()
});

/// Extracts the top keywords from a document's text content.
pub fn extract_top_keywords(document: &Html) -> Vec<(String, usize)> {
    let text = document.root_element().text().collect::<Vec<_>>().join(" ");
    top_keywords_from_text(&text)
}

/// Ranks the most frequent non-stop-word tokens in `text`.
///
/// Tokens are lowercased alphanumeric runs (`\w+`). Returns at most
/// [`TOP_KEYWORD_LIMIT`] (word, count) pairs sorted by descending count; ties
/// keep first-seen order.
pub fn top_keywords_from_text(text: &str) -> Vec<(String, usize)> {
    let lowered = text.to_lowercase();
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in WORD_RE.find_iter(&lowered) {
        let word = token.as_str();
        if STOP_WORDS.contains(word) {
            continue;
        }
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word.to_string(), counts.len());
                counts.push((word.to_string(), 1));
            }
        }
    }

    // Stable sort: equal counts keep first-encountered order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_KEYWORD_LIMIT);
    counts
}
