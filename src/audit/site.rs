//! Site-level technical checks: HTTPS, robots.txt, sitemap.xml, custom 404.

use url::Url;

use crate::config::MISSING_PAGE_PROBE;
use crate::fetch::Fetcher;

/// Presence of site-level technical signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteChecks {
    /// Page served over HTTPS.
    pub https: bool,
    /// `/robots.txt` answered HTTP 200.
    pub robots_txt: bool,
    /// `/sitemap.xml` answered HTTP 200.
    pub sitemap_xml: bool,
}

/// Checks HTTPS plus robots.txt and sitemap.xml availability.
///
/// The robots/sitemap probes are origin-rooted. Any fetch failure counts as
/// unavailable; these checks never abort the audit.
pub async fn check_robots_sitemap_https(fetcher: &dyn Fetcher, page: &Url) -> SiteChecks {
    let mut checks = SiteChecks {
        https: page.scheme() == "https",
        ..Default::default()
    };
    checks.robots_txt = origin_path_available(fetcher, page, "/robots.txt").await;
    checks.sitemap_xml = origin_path_available(fetcher, page, "/sitemap.xml").await;
    checks
}

async fn origin_path_available(fetcher: &dyn Fetcher, page: &Url, path: &str) -> bool {
    let Ok(probe) = page.join(path) else {
        return false;
    };
    match fetcher.fetch(probe.as_str()).await {
        Ok(response) => response.status == 200,
        Err(e) => {
            log::debug!("probe failed for {}: {}", probe, e);
            false
        }
    }
}

/// Detects a custom 404 page.
///
/// Fetches a synthetic nonexistent path at the page origin; the site has a
/// custom 404 page iff the response status is 404 and the body mentions
/// "404" (case-insensitively).
pub async fn check_custom_404(fetcher: &dyn Fetcher, page: &Url) -> bool {
    let Ok(probe) = page.join(&format!("/{}", MISSING_PAGE_PROBE)) else {
        return false;
    };
    match fetcher.fetch(probe.as_str()).await {
        Ok(response) => {
            response.status == 404 && response.text().to_lowercase().contains("404")
        }
        Err(e) => {
            log::debug!("404 probe failed for {}: {}", probe, e);
            false
        }
    }
}
