//! Configuration constants.
//!
//! Defaults for timeouts, concurrency, endpoints, and the fixed probe/domain
//! lists used by the audit pipeline.

/// Per-request HTTP timeout in seconds.
///
/// Applies to every fetch: the primary page, link/image probes, robots.txt,
/// sitemap.xml, the 404 probe, and the PageSpeed API calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Maximum in-flight link/image probe requests.
///
/// Link and image sub-fetches fan out concurrently up to this cap while
/// preserving document order in the results.
pub const DEFAULT_LINK_CONCURRENCY: usize = 8;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Google PageSpeed Insights v5 endpoint.
///
/// Overridable in [`crate::Config`] so tests can point the collector at a
/// mock server.
pub const PAGESPEED_ENDPOINT: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// Path fetched from the page origin to detect a custom 404 page.
pub const MISSING_PAGE_PROBE: &str = "nonexistentpage12345";

/// Default output path for the rendered HTML report.
pub const DEFAULT_REPORT_PATH: &str = "seo_audit_report.html";

/// Domains that mark an anchor as a social media link.
pub const SOCIAL_DOMAINS: [&str; 5] = [
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "linkedin.com",
    "youtube.com",
];

/// Number of keywords reported by the keyword extractor.
pub const TOP_KEYWORD_LIMIT: usize = 15;
