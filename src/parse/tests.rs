//! Unit tests for markup extraction.

use super::*;
use scraper::Html;
use url::Url;

fn page_url() -> Url {
    Url::parse("https://example.com/blog/post").expect("test URL should parse")
}

#[test]
fn test_extract_title_and_description() {
    let document = Html::parse_document(
        r#"<html><head>
            <title> Hello World </title>
            <meta name="description" content="A fine page">
        </head><body></body></html>"#,
    );
    assert_eq!(extract_title(&document), Some("Hello World".to_string()));
    assert_eq!(
        extract_description(&document),
        Some("A fine page".to_string())
    );
}

#[test]
fn test_missing_title_and_description_are_none() {
    let document = Html::parse_document("<html><head></head><body><p>hi</p></body></html>");
    assert_eq!(extract_title(&document), None);
    assert_eq!(extract_description(&document), None);
}

#[test]
fn test_first_matching_meta_wins() {
    let document = Html::parse_document(
        r#"<head>
            <meta name="description" content="first">
            <meta name="description" content="second">
        </head>"#,
    );
    assert_eq!(extract_description(&document), Some("first".to_string()));
}

#[test]
fn test_canonical_and_robots_meta() {
    let document = Html::parse_document(
        r#"<head>
            <link rel="canonical" href="https://example.com/post">
            <meta name="robots" content="noindex, nofollow">
        </head>"#,
    );
    assert_eq!(
        extract_canonical(&document),
        Some("https://example.com/post".to_string())
    );
    assert_eq!(
        extract_robots_meta(&document),
        Some("noindex, nofollow".to_string())
    );
}

#[test]
fn test_favicon_resolves_relative_href() {
    let document =
        Html::parse_document(r#"<head><link rel="icon" href="/static/favicon.ico"></head>"#);
    assert_eq!(
        extract_favicon(&document, &page_url()),
        Some("https://example.com/static/favicon.ico".to_string())
    );
}

#[test]
fn test_favicon_shortcut_icon_fallback() {
    let document = Html::parse_document(
        r#"<head><link rel="shortcut icon" href="https://cdn.example.com/fav.png"></head>"#,
    );
    assert_eq!(
        extract_favicon(&document, &page_url()),
        Some("https://cdn.example.com/fav.png".to_string())
    );
}

#[test]
fn test_no_favicon_is_none() {
    let document = Html::parse_document("<head></head>");
    assert_eq!(extract_favicon(&document, &page_url()), None);
}

#[test]
fn test_heading_counts_exact() {
    let document = Html::parse_document(
        r#"<body>
            <h1>a</h1><h1>b</h1>
            <div><h2>nested</h2></div>
            <h6 style="display:none">hidden</h6>
        </body>"#,
    );
    assert_eq!(heading_counts(&document), [2, 1, 0, 0, 0, 1]);
}

#[test]
fn test_heading_counts_all_zero_without_headings() {
    let document = Html::parse_document("<body><p>no headings here</p></body>");
    assert_eq!(heading_counts(&document), [0; 6]);
}

#[test]
fn test_h1_texts_stripped() {
    let document = Html::parse_document("<body><h1>  First \n Post </h1><h1><b>Bold</b> one</h1></body>");
    assert_eq!(
        extract_h1_texts(&document),
        vec!["First Post".to_string(), "Bold one".to_string()]
    );
}

#[test]
fn test_og_tag_detection() {
    let with_og =
        Html::parse_document(r#"<head><meta property="og:title" content="t"></head>"#);
    assert!(has_og_tags(&with_og));

    let without_og =
        Html::parse_document(r#"<head><meta property="twitter:title" content="t"></head>"#);
    assert!(!has_og_tags(&without_og));
}

#[test]
fn test_schema_markup_detection() {
    let with_schema = Html::parse_document(
        r#"<head><script type="application/ld+json">{"@type":"Article"}</script></head>"#,
    );
    assert!(has_schema_markup(&with_schema));

    let without_schema =
        Html::parse_document(r#"<head><script type="text/javascript">1</script></head>"#);
    assert!(!has_schema_markup(&without_schema));
}

#[test]
fn test_iframe_src_like_attributes() {
    let document = Html::parse_document(
        r#"<body>
            <iframe src="https://a.example/embed" data-src="lazy.html" width="100"></iframe>
            <iframe title="no source"></iframe>
        </body>"#,
    );
    let iframes = extract_iframes(&document);
    assert_eq!(iframes.len(), 2);
    assert!(iframes[0].contains(&("src".to_string(), "https://a.example/embed".to_string())));
    assert!(iframes[0].contains(&("data-src".to_string(), "lazy.html".to_string())));
    assert_eq!(iframes[0].len(), 2); // width is not src-like
    assert!(iframes[1].is_empty());
}

#[test]
fn test_social_link_detection() {
    let document = Html::parse_document(
        r#"<body>
            <a href="https://www.facebook.com/acme">fb</a>
            <a href="https://twitter.com/acme">tw</a>
            <a href="https://example.com/about">about</a>
        </body>"#,
    );
    assert_eq!(
        extract_social_links(&document),
        vec![
            "https://www.facebook.com/acme".to_string(),
            "https://twitter.com/acme".to_string()
        ]
    );
}

#[test]
fn test_no_social_links_is_empty() {
    let document = Html::parse_document(r#"<body><a href="/contact">contact</a></body>"#);
    assert!(extract_social_links(&document).is_empty());
}

#[test]
fn test_link_classification_relative_is_internal() {
    let document = Html::parse_document(
        r#"<body>
            <a href="/pricing">pricing</a>
            <a href="other">sibling</a>
            <a href="https://example.com/docs">docs</a>
            <a href="https://other.example.net/">away</a>
        </body>"#,
    );
    let (internal, external) = classify_links(&document, &page_url());
    assert_eq!(
        internal,
        vec![
            "https://example.com/pricing".to_string(),
            "https://example.com/blog/other".to_string(),
            "https://example.com/docs".to_string(),
        ]
    );
    assert_eq!(external, vec!["https://other.example.net/".to_string()]);
}

#[test]
fn test_link_classification_port_is_part_of_netloc() {
    let base = Url::parse("http://example.com:8080/").expect("test URL should parse");
    let document = Html::parse_document(
        r#"<body>
            <a href="/same">same</a>
            <a href="http://example.com/other-port">other</a>
        </body>"#,
    );
    let (internal, external) = classify_links(&document, &base);
    assert_eq!(internal, vec!["http://example.com:8080/same".to_string()]);
    assert_eq!(external, vec!["http://example.com/other-port".to_string()]);
}

#[test]
fn test_anchor_urls_keep_duplicates_and_order() {
    let document = Html::parse_document(
        r#"<body><a href="/a">1</a><a href="/b">2</a><a href="/a">3</a></body>"#,
    );
    assert_eq!(
        collect_anchor_urls(&document, &page_url()),
        vec![
            "https://example.com/a".to_string(),
            "https://example.com/b".to_string(),
            "https://example.com/a".to_string(),
        ]
    );
}

#[test]
fn test_image_inventory_counts_and_refs() {
    let document = Html::parse_document(
        r#"<body>
            <img src="/img/logo.png" alt="Logo">
            <img src="banner.jpg" alt="">
            <img alt="no source">
        </body>"#,
    );
    let inventory = collect_images(&document, &page_url());
    assert_eq!(inventory.count, 3);
    assert_eq!(inventory.with_alt, 1); // empty alt does not count
    assert_eq!(inventory.refs.len(), 2);
    assert_eq!(inventory.refs[0].src, "https://example.com/img/logo.png");
    assert_eq!(inventory.refs[0].alt.as_deref(), Some("Logo"));
    assert_eq!(inventory.refs[1].src, "https://example.com/blog/banner.jpg");
}

#[test]
fn test_top_keywords_limit_and_order() {
    // "rust" x3, "audit" x2, everything else once; stop-words dropped.
    let text = "Rust audit rust the and audit a rust page seo tool";
    let keywords = top_keywords_from_text(text);
    assert!(keywords.len() <= 15);
    assert_eq!(keywords[0], ("rust".to_string(), 3));
    assert_eq!(keywords[1], ("audit".to_string(), 2));
    // counts never increase down the list
    for pair in keywords.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }
    // stop words are gone
    assert!(keywords.iter().all(|(w, _)| w != "the" && w != "and" && w != "a"));
}

#[test]
fn test_top_keywords_ties_keep_first_seen_order() {
    let keywords = top_keywords_from_text("zebra yak zebra yak walrus walrus");
    assert_eq!(
        keywords,
        vec![
            ("zebra".to_string(), 2),
            ("yak".to_string(), 2),
            ("walrus".to_string(), 2),
        ]
    );
}

#[test]
fn test_top_keywords_truncates_to_fifteen() {
    let words: Vec<String> = (0..30).map(|i| format!("kw{}", i)).collect();
    let keywords = top_keywords_from_text(&words.join(" "));
    assert_eq!(keywords.len(), 15);
}

#[test]
fn test_page_snapshot_end_to_end() {
    let body = r#"<html><head>
            <title>Snapshot</title>
            <meta property="og:type" content="website">
        </head><body>
            <h1>Header</h1>
            <a href="/in">in</a>
            <a href="https://away.example/">out</a>
            <img src="/pic.png" alt="pic">
        </body></html>"#;
    let snapshot = PageSnapshot::from_html(body, &page_url());
    assert_eq!(snapshot.title.as_deref(), Some("Snapshot"));
    assert!(snapshot.og_tags);
    assert!(!snapshot.schema_markup);
    assert_eq!(snapshot.heading_counts[0], 1);
    assert_eq!(snapshot.internal_links, vec!["https://example.com/in"]);
    assert_eq!(snapshot.external_links, vec!["https://away.example/"]);
    assert_eq!(snapshot.anchor_urls.len(), 2);
    assert_eq!(snapshot.images.count, 1);
    assert!(snapshot
        .top_keywords
        .iter()
        .any(|(word, _)| word == "snapshot" || word == "header"));
}
