//! HTML report rendering.
//!
//! Serializes an [`AuditRecord`] into a fixed-layout standalone HTML document.
//! Rendering is pure: the same record and timestamp always produce the same
//! document. [`write_report`] overwrites any previous file at the target path.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::audit::ImageDetail;
use crate::pagespeed::{PageSpeedMetrics, PageSpeedReport};
use crate::report::record::{yes_no, AuditRecord};
use crate::whois::WhoisReport;

/// Timestamp format shown in the report header: 12-hour time + day-month-year.
const TIMESTAMP_FORMAT: &str = "%I:%M %p %d-%m-%y";

const STYLE: &str = r#"
            body { font-family: Poppins, sans-serif; margin: 50px; }
            h1 { font-size: 35px; color: #00B899; }
            h2 { font-size: 30px; color: #00B899; margin-top: 50px }
            h3 { font-size: 25px; color: #545454; }
            p { font-size: 18px; margin: 5px 0px 5px 0px; }
            table { width: 100%; border-collapse: collapse; margin-top: 20px; }
            th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
            th { background-color: #f2f2f2; }
            .tabsplit { width: 48% !important; }
            .tabspace th, .tabspace td { padding: 20px 5px !important; text-align: center; }
"#;

/// Renders the record with the current local time as generation timestamp.
pub fn render(record: &AuditRecord) -> String {
    render_with_timestamp(record, &Local::now().format(TIMESTAMP_FORMAT).to_string())
}

/// Renders the record with a caller-supplied timestamp string.
///
/// Rendering the same record twice with the same timestamp yields identical
/// documents.
pub fn render_with_timestamp(record: &AuditRecord, timestamp: &str) -> String {
    let title = record.display_title();
    let description = record.display_description();
    let (iframe_count, iframe_srcs) = iframe_summary(record);

    format!(
        r##"<html>
    <head>
        <title>Report - Website & SEO Audit</title>
        <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.2.1/dist/css/bootstrap.min.css" rel="stylesheet">
        <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.2.1/dist/js/bootstrap.bundle.min.js"></script>
        <style>{style}</style>
    </head>
    <body>
        <div class="d-flex justify-content-between">
            <div>
                <h1>Website & SEO Audit Report</h1>
                <p><strong>URL:</strong> {url}</p>
                <p><strong>Generated on:</strong> {timestamp}</p>
            </div>
            <div class="my-auto">
                <img src="{favicon}" width="100px" height="100px"/>
            </div>
        </div>

        <h2>On-Page SEO Metrics</h2>
        <div class="card p-4">
            <div class="card-body">
                <h3>Title</h3>
                <div class="d-flex flex-row justify-content-between">
                    <p class="w-75 text-justify">{title}</p>
                    <p><span class="badge text-bg-secondary p-2 text-center">{title_len} char</span></p>
                </div>
            </div>
            <div class="card-body">
                <h3>Description</h3>
                <div class="d-flex flex-row justify-content-between">
                    <p class="w-75 text-justify">{description}</p>
                    <p><span class="badge text-bg-secondary p-2 text-center">{description_len} char</span></p>
                </div>
            </div>
            <div class="card-body">
                <h3>H1 Tags</h3>
                <div>{h1_block}</div>
            </div>
            <div class="card">
                <div class="d-flex justify-content-around card-body">{heading_counters}</div>
            </div>
        </div>

        <h2>Image & Links</h2>
        <div class="accordion accordion-flush" id="imageLinksAccordion">
            <div class="accordion-item">
              <h2 class="accordion-header">
                <button class="accordion-button collapsed" type="button" data-bs-toggle="collapse" data-bs-target="#flush-collapseOne" aria-expanded="false" aria-controls="flush-collapseOne">
                  List of Image Details
                </button>
              </h2>
              <div id="flush-collapseOne" class="accordion-collapse collapse" data-bs-parent="#imageLinksAccordion">
                <table class="accordion-body tabspace table-striped table-hover">
                    <tr><th>Source</th><th>Alt Text</th><th>Size (KB)</th></tr>
                    {image_rows}
                </table>
              </div>
            </div>
            <div class="accordion-item">
              <h2 class="accordion-header">
                <button class="accordion-button collapsed" type="button" data-bs-toggle="collapse" data-bs-target="#flush-collapseTwo" aria-expanded="false" aria-controls="flush-collapseTwo">
                  List of Links Details
                </button>
              </h2>
              <div id="flush-collapseTwo" class="accordion-collapse collapse" data-bs-parent="#imageLinksAccordion">
                <table class="accordion-body tabspace table-striped table-hover">
                    <tr><th>Internal Links</th><th>External Links</th></tr>
                    {link_rows}
                </table>
              </div>
            </div>
        </div>

        <div class="card mt-5">
            <div class="d-flex justify-content-around card-body">
                    <div class="text-center">
                        <h3>{image_count}</h3>
                        <p>Img Count</p>
                    </div>
                    <div class="text-center">
                        <h3>{images_with_alt}</h3>
                        <p>Img With Alt</p>
                    </div>
                    <div class="text-center">
                        <h3>{internal_count}</h3>
                        <p>Internal Links</p>
                    </div>
                    <div class="text-center">
                        <h3>{external_count}</h3>
                        <p>External Links</p>
                    </div>
            </div>
        </div>

        <h2>Technical SEO Metrics</h2>
        <div class="d-flex justify-content-between">
            <table class="table tabspace tabsplit table-striped table-hover">
                <tbody>
                <tr><th scope="row">Canonical Tag</th><td>{canonical}</td></tr>
                <tr><th scope="row">Robots Tag</th><td>{robots_tag}</td></tr>
                <tr><th scope="row">OG Tags</th><td>{og_tags}</td></tr>
                <tr><th scope="row">Schema Markup Tags</th><td>{schema_markup}</td></tr>
                </tbody>
            </table>
            <table class="table tabspace tabsplit table-striped table-hover">
                <tbody>
                <tr><th scope="row">HTTPS</th><td>{https}</td></tr>
                <tr><th scope="row">Custom 404 Page</th><td>{custom_404}</td></tr>
                <tr><th scope="row">Robots.txt</th><td>{robots_txt}</td></tr>
                <tr><th scope="row">Sitemap.xml</th><td>{sitemap_xml}</td></tr>
                </tbody>
            </table>
        </div>

        <h2>PageSpeed Insights</h2>
        <table class="table tabspace table-striped table-hover w-100">
            <thead>
                <tr>
                  <th scope="col">Metrics</th>
                  <th scope="col">Mobile</th>
                  <th scope="col">Desktop</th>
                </tr>
            </thead>
            <tbody>
            <tr><th scope="row">Performance Score</th><td>{ps_score_mobile}</td><td>{ps_score_desktop}</td></tr>
            <tr><th scope="row">First Contentful Paint</th><td>{fcp_mobile}</td><td>{fcp_desktop}</td></tr>
            <tr><th scope="row">Largest Contentful Paint</th><td>{lcp_mobile}</td><td>{lcp_desktop}</td></tr>
            <tr><th scope="row">Cumulative Layout Shift</th><td>{cls_mobile}</td><td>{cls_desktop}</td></tr>
            <tr><th scope="row">Speed Index</th><td>{si_mobile}</td><td>{si_desktop}</td></tr>
            <tr><th scope="row">Total Blocking Time</th><td>{tbt_mobile}</td><td>{tbt_desktop}</td></tr>
            </tbody>
        </table>

        <h2>Top 15 Keywords</h2>
            {keyword_badges}

        <h2>Other Links</h2>
        <div class="d-flex justify-content-between">
                <table class="table tabspace table-striped table-hover text-start">
                    <tbody>
                    <tr><th scope="row" class="text-start">Social Media Links: {social_count}</th></tr>
                    <tr><td class="text-start">{social_cell}</td></tr>
                    <tr><th scope="row" class="text-start">Broken Links: {broken_count}</th></tr>
                    <tr><td class="text-start">{broken_cell}</td></tr>
                    <tr><th scope="row" class="text-start">iFrame Detection: {iframe_count}</th></tr>
                    <tr><td class="text-start">{iframe_srcs}</td></tr>
                    </tbody>
                </table>
        </div>

        <h2>WHOIS Domain Information</h2>
            <table class="table tabspace table-striped table-hover">
                <tbody>
                {whois_rows}
                </tbody>
            </table>

    </body>
    </html>
"##,
        style = STYLE,
        url = record.url,
        timestamp = timestamp,
        favicon = record.display_favicon(),
        title_len = title.chars().count(),
        title = title,
        description_len = description.chars().count(),
        description = description,
        h1_block = h1_block(&record.h1_texts),
        heading_counters = heading_counters(&record.heading_counts),
        image_rows = image_rows(&record.images),
        link_rows = link_rows(&record.internal_links, &record.external_links),
        image_count = record.image_count,
        images_with_alt = record.images_with_alt,
        internal_count = record.internal_links.len(),
        external_count = record.external_links.len(),
        canonical = record.display_canonical(),
        robots_tag = record.display_robots_tag(),
        og_tags = yes_no(record.og_tags),
        schema_markup = yes_no(record.schema_markup),
        https = yes_no(record.https),
        custom_404 = yes_no(record.custom_404),
        robots_txt = yes_no(record.robots_txt),
        sitemap_xml = yes_no(record.sitemap_xml),
        ps_score_mobile = ps_score(&record.pagespeed_mobile),
        ps_score_desktop = ps_score(&record.pagespeed_desktop),
        fcp_mobile = ps_display(&record.pagespeed_mobile, |m| &m.first_contentful_paint),
        fcp_desktop = ps_display(&record.pagespeed_desktop, |m| &m.first_contentful_paint),
        lcp_mobile = ps_display(&record.pagespeed_mobile, |m| &m.largest_contentful_paint),
        lcp_desktop = ps_display(&record.pagespeed_desktop, |m| &m.largest_contentful_paint),
        cls_mobile = ps_display(&record.pagespeed_mobile, |m| &m.cumulative_layout_shift),
        cls_desktop = ps_display(&record.pagespeed_desktop, |m| &m.cumulative_layout_shift),
        si_mobile = ps_display(&record.pagespeed_mobile, |m| &m.speed_index),
        si_desktop = ps_display(&record.pagespeed_desktop, |m| &m.speed_index),
        tbt_mobile = ps_display(&record.pagespeed_mobile, |m| &m.total_blocking_time),
        tbt_desktop = ps_display(&record.pagespeed_desktop, |m| &m.total_blocking_time),
        keyword_badges = keyword_badges(&record.top_keywords),
        social_count = record.social_links.len(),
        social_cell = list_cell(&record.social_links, "No social media links"),
        broken_count = record.broken_links.len(),
        broken_cell = list_cell(&record.broken_links, "All links well good"),
        iframe_count = iframe_count,
        iframe_srcs = iframe_srcs,
        whois_rows = whois_rows(&record.whois),
    )
}

/// Renders the record and writes it to `path`, overwriting any existing file.
pub fn write_report(record: &AuditRecord, path: &Path) -> std::io::Result<PathBuf> {
    let html = render(record);
    std::fs::write(path, html)?;
    log::info!("Report written to {}", path.display());
    Ok(path.to_path_buf())
}

fn h1_block(h1_texts: &[String]) -> String {
    if h1_texts.is_empty() {
        return "<p>No H1 tags</p>".to_string();
    }
    h1_texts
        .iter()
        .map(|text| format!("<p>{}</p>", text))
        .collect()
}

fn heading_counters(counts: &[usize; 6]) -> String {
    counts
        .iter()
        .enumerate()
        .map(|(i, count)| {
            format!(
                r#"
                        <div class="text-center">
                            <h3>{}</h3>
                            <p>H{} Tags</p>
                        </div>"#,
                count,
                i + 1
            )
        })
        .collect()
}

fn image_rows(images: &[ImageDetail]) -> String {
    images
        .iter()
        .map(|image| {
            let alt = image.alt.as_deref().unwrap_or("N/A");
            let size = image
                .size_kb
                .map(|kb| kb.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                image.src, alt, size
            )
        })
        .collect()
}

// Internal and external links sit side by side; the shorter column is padded
// with empty cells so both reach the same row count.
fn link_rows(internal: &[String], external: &[String]) -> String {
    let rows = internal.len().max(external.len());
    (0..rows)
        .map(|i| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                internal.get(i).map(String::as_str).unwrap_or(""),
                external.get(i).map(String::as_str).unwrap_or("")
            )
        })
        .collect()
}

fn keyword_badges(keywords: &[(String, usize)]) -> String {
    keywords
        .iter()
        .map(|(word, count)| {
            format!(
                r#"<span class="badge text-bg-secondary p-2 my-2">{} {}</span>"#,
                word, count
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn list_cell(items: &[String], empty_literal: &str) -> String {
    if items.is_empty() {
        empty_literal.to_string()
    } else {
        items.join(", ")
    }
}

// The empty case is the literal one-element sequence ["Great! No iframes"].
fn iframe_summary(record: &AuditRecord) -> (usize, String) {
    if record.iframes.is_empty() {
        return (1, "Great! No iframes".to_string());
    }
    let srcs: Vec<&str> = record
        .iframes
        .iter()
        .filter_map(|attrs| {
            attrs
                .iter()
                .find(|(name, _)| name == "src")
                .map(|(_, value)| value.as_str())
        })
        .collect();
    (record.iframes.len(), srcs.join(", "))
}

fn ps_score(report: &PageSpeedReport) -> String {
    match report {
        PageSpeedReport::Metrics(metrics) => metrics
            .performance_score
            .map(|score| score.to_string())
            .unwrap_or_else(|| "Null".to_string()),
        PageSpeedReport::Error(message) => message.clone(),
    }
}

fn ps_display(
    report: &PageSpeedReport,
    pick: fn(&PageSpeedMetrics) -> &Option<String>,
) -> String {
    match report {
        PageSpeedReport::Metrics(metrics) => pick(metrics)
            .clone()
            .unwrap_or_else(|| "Null".to_string()),
        PageSpeedReport::Error(message) => message.clone(),
    }
}

fn whois_rows(report: &WhoisReport) -> String {
    let fields = match report {
        WhoisReport::Fields(fields) => fields,
        WhoisReport::Error(message) => {
            return format!(
                r#"<tr><th scope="row">Error</th><td colspan="3">{}</td></tr>"#,
                message
            );
        }
    };
    let na = |value: &Option<String>| value.clone().unwrap_or_else(|| "N/A".to_string());
    let na_list = |value: &Option<Vec<String>>| {
        value
            .as_ref()
            .map(|items| items.join(", "))
            .unwrap_or_else(|| "N/A".to_string())
    };
    format!(
        r#"<tr>
                    <th scope="row">Domain Name</th><td>{}</td>
                    <th scope="row">Registrar</th><td>{}</td>
                </tr>
                <tr>
                    <th scope="row">Creation Date</th><td>{}</td>
                    <th scope="row">Expiration Date</th><td>{}</td>
                </tr>
                <tr>
                    <th scope="row" colspan="3">Last Updated</th><td>{}</td>
                </tr>
                <tr>
                    <th scope="row">Name Servers</th><td>{}</td>
                    <th scope="row">Status</th><td>{}</td>
                </tr>"#,
        na(&fields.domain_name),
        na(&fields.registrar),
        na(&fields.creation_date),
        na(&fields.expiration_date),
        na(&fields.last_updated),
        na_list(&fields.name_servers),
        na_list(&fields.status),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagespeed::PageSpeedMetrics;
    use crate::whois::{WhoisFields, WhoisReport};

    fn empty_record() -> AuditRecord {
        AuditRecord {
            url: "https://example.com/".to_string(),
            favicon_link: None,
            title: None,
            description: None,
            h1_texts: Vec::new(),
            heading_counts: [0; 6],
            canonical: None,
            robots_tag: None,
            og_tags: false,
            schema_markup: false,
            https: true,
            robots_txt: false,
            sitemap_xml: false,
            custom_404: false,
            iframes: Vec::new(),
            social_links: Vec::new(),
            broken_links: Vec::new(),
            image_count: 0,
            images_with_alt: 0,
            images: Vec::new(),
            internal_links: Vec::new(),
            external_links: Vec::new(),
            top_keywords: Vec::new(),
            pagespeed_mobile: PageSpeedReport::Metrics(PageSpeedMetrics::default()),
            pagespeed_desktop: PageSpeedReport::Metrics(PageSpeedMetrics::default()),
            whois: WhoisReport::Fields(WhoisFields::default()),
        }
    }

    #[test]
    fn test_render_fallback_literals_present() {
        let html = render_with_timestamp(&empty_record(), "01:02 PM 03-04-25");
        assert!(html.contains("No title"));
        assert!(html.contains("No description"));
        assert!(html.contains("No favicon link"));
        assert!(html.contains("No canonical tag"));
        assert!(html.contains("No robots tag"));
        assert!(html.contains("No H1 tags"));
        assert!(html.contains("Great! No iframes"));
        assert!(html.contains("No social media links"));
        assert!(html.contains("All links well good"));
        assert!(html.contains("N/A")); // WHOIS fields
    }

    #[test]
    fn test_render_absent_metrics_become_null() {
        let html = render_with_timestamp(&empty_record(), "01:02 PM 03-04-25");
        // score plus five display strings for each strategy
        assert_eq!(html.matches("Null").count(), 12);
        assert!(!html.contains("<td></td>") || html.contains("Null"));
    }

    #[test]
    fn test_render_is_deterministic_for_fixed_timestamp() {
        let mut record = empty_record();
        record.title = Some("Fixed".to_string());
        let first = render_with_timestamp(&record, "11:59 PM 31-12-24");
        let second = render_with_timestamp(&record, "11:59 PM 31-12-24");
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_differs_only_in_timestamp() {
        let record = empty_record();
        let first = render_with_timestamp(&record, "01:00 AM 01-01-25");
        let second = render_with_timestamp(&record, "02:00 AM 01-01-25");
        assert_ne!(first, second);
        let normalized = second.replace("02:00 AM 01-01-25", "01:00 AM 01-01-25");
        assert_eq!(first, normalized);
    }

    #[test]
    fn test_link_rows_padded_to_equal_length() {
        let internal = vec!["https://a/1".to_string(), "https://a/2".to_string()];
        let external = vec!["https://b/1".to_string()];
        let rows = link_rows(&internal, &external);
        assert_eq!(rows.matches("<tr>").count(), 2);
        assert!(rows.contains("<tr><td>https://a/2</td><td></td></tr>"));
    }

    #[test]
    fn test_pagespeed_error_message_rendered() {
        let mut record = empty_record();
        record.pagespeed_mobile = PageSpeedReport::Error(
            "Failed to fetch PageSpeed data. Status code: 403".to_string(),
        );
        let html = render_with_timestamp(&record, "01:02 PM 03-04-25");
        assert!(html.contains("Failed to fetch PageSpeed data. Status code: 403"));
    }

    #[test]
    fn test_whois_error_rendered_as_single_row() {
        let mut record = empty_record();
        record.whois = WhoisReport::Error("connection refused".to_string());
        let html = render_with_timestamp(&record, "01:02 PM 03-04-25");
        assert!(html.contains("connection refused"));
        assert!(!html.contains("Registrar</th>"));
    }

    #[test]
    fn test_image_rows_degraded_size_is_na() {
        let mut record = empty_record();
        record.images.push(ImageDetail {
            src: "https://example.com/x.png".to_string(),
            alt: None,
            size_kb: Some(12.34),
        });
        record.images.push(ImageDetail {
            src: "https://example.com/y.png".to_string(),
            alt: Some("y".to_string()),
            size_kb: None,
        });
        let html = render_with_timestamp(&record, "01:02 PM 03-04-25");
        assert!(html.contains("<tr><td>https://example.com/x.png</td><td>N/A</td><td>12.34</td></tr>"));
        assert!(html.contains("<tr><td>https://example.com/y.png</td><td>y</td><td>N/A</td></tr>"));
    }

    #[test]
    fn test_keyword_badges_rendered_in_order() {
        let mut record = empty_record();
        record.top_keywords = vec![("rust".to_string(), 5), ("audit".to_string(), 2)];
        let html = render_with_timestamp(&record, "01:02 PM 03-04-25");
        let rust_pos = html.find("rust 5").expect("rust badge present");
        let audit_pos = html.find("audit 2").expect("audit badge present");
        assert!(rust_pos < audit_pos);
    }
}
