//! seo_audit library: single-page SEO auditing.
//!
//! This library fetches one web page, derives a fixed set of on-page,
//! technical, and structural SEO fields from its markup and from auxiliary
//! lookups (WHOIS, robots.txt/sitemap.xml presence, PageSpeed Insights), and
//! renders the findings as a standalone HTML report.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::{run_audit, report, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://example.com".into(),
//!     api_key: "my-pagespeed-key".into(),
//!     ..Default::default()
//! };
//!
//! let record = run_audit(&config).await?;
//! report::write_report(&record, &config.output)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Failure policy
//!
//! Only a failure of the primary page fetch (network error or non-2xx
//! status) aborts an audit. WHOIS and PageSpeed failures degrade to `Error`
//! fields inside the record; individual link/image/robots/sitemap failures
//! degrade to per-item markers. See [`error_handling::AuditError`].

#![warn(missing_docs)]

pub mod audit;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod pagespeed;
pub mod parse;
pub mod report;
mod utils;
pub mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::AuditError;
pub use report::AuditRecord;
pub use run::{run_audit, Auditor};

// Internal run module (contains the main audit pipeline)
mod run {
    use std::sync::Arc;
    use std::time::Duration;

    use log::info;
    use url::Url;

    use crate::audit::{
        check_custom_404, check_robots_sitemap_https, find_broken_links, measure_images,
    };
    use crate::config::Config;
    use crate::error_handling::{AuditError, InitializationError};
    use crate::fetch::{Fetcher, HttpFetcher};
    use crate::pagespeed::{self, Strategy};
    use crate::parse::PageSnapshot;
    use crate::report::AuditRecord;
    use crate::whois::{self, DomainLookup, WhoisReport, WhoisServiceLookup};

    /// The audit pipeline with its injected capabilities.
    ///
    /// Tests construct one with [`Auditor::with_parts`] to supply fake
    /// fetcher/lookup implementations; production code uses
    /// [`Auditor::from_config`].
    pub struct Auditor {
        fetcher: Arc<dyn Fetcher>,
        domain_lookup: Arc<dyn DomainLookup>,
        link_concurrency: usize,
        pagespeed_endpoint: String,
    }

    impl Auditor {
        /// Builds the production pipeline from a configuration.
        pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
            let fetcher = HttpFetcher::new(
                Duration::from_secs(config.timeout_seconds),
                &config.user_agent,
            )?;
            Ok(Self {
                fetcher: Arc::new(fetcher),
                domain_lookup: Arc::new(WhoisServiceLookup),
                link_concurrency: config.link_concurrency,
                pagespeed_endpoint: config.pagespeed_endpoint.clone(),
            })
        }

        /// Builds a pipeline from explicit capabilities (for tests).
        pub fn with_parts(
            fetcher: Arc<dyn Fetcher>,
            domain_lookup: Arc<dyn DomainLookup>,
            link_concurrency: usize,
            pagespeed_endpoint: String,
        ) -> Self {
            Self {
                fetcher,
                domain_lookup,
                link_concurrency,
                pagespeed_endpoint,
            }
        }

        /// Audits one page and returns the populated record.
        ///
        /// Steps run in a fixed order: primary fetch, markup extraction,
        /// WHOIS, robots/sitemap/HTTPS, broken links, image sizes, PageSpeed
        /// (mobile then desktop), custom 404 probe. Link and image probes
        /// fan out concurrently up to the configured cap; every other stage
        /// is sequential.
        ///
        /// # Errors
        ///
        /// Fails only when `url` is unparsable or the primary page fetch
        /// fails (network error or non-2xx status). Auxiliary failures
        /// degrade into the record per the failure policy.
        pub async fn run_audit(&self, url: &str, api_key: &str) -> Result<AuditRecord, AuditError> {
            let page_url = Url::parse(url).map_err(|source| AuditError::InvalidUrl {
                url: url.to_string(),
                source,
            })?;

            info!("Auditing {}", page_url);
            let response = self
                .fetcher
                .fetch(page_url.as_str())
                .await
                .map_err(|source| AuditError::PrimaryFetch {
                    url: url.to_string(),
                    source,
                })?;
            if !response.is_success() {
                return Err(AuditError::PrimaryStatus {
                    url: url.to_string(),
                    status: response.status,
                });
            }

            // One synchronous pass over the markup; the parsed tree is not
            // Send and must not be held across the fetch stages below.
            let snapshot = PageSnapshot::from_html(&response.text(), &page_url);
            info!(
                "Extracted markup: {} anchors, {} images",
                snapshot.anchor_urls.len(),
                snapshot.images.count
            );

            let whois = match whois::registrable_domain(&page_url) {
                Some(domain) => whois::domain_report(self.domain_lookup.as_ref(), &domain).await,
                None => WhoisReport::Error(format!("no host in URL {}", page_url)),
            };

            let site = check_robots_sitemap_https(self.fetcher.as_ref(), &page_url).await;

            let broken_links = find_broken_links(
                self.fetcher.as_ref(),
                &snapshot.anchor_urls,
                self.link_concurrency,
            )
            .await;
            let images = measure_images(
                self.fetcher.as_ref(),
                &snapshot.images.refs,
                self.link_concurrency,
            )
            .await;

            let pagespeed_mobile = pagespeed::collect(
                self.fetcher.as_ref(),
                &self.pagespeed_endpoint,
                page_url.as_str(),
                api_key,
                Strategy::Mobile,
            )
            .await;
            let pagespeed_desktop = pagespeed::collect(
                self.fetcher.as_ref(),
                &self.pagespeed_endpoint,
                page_url.as_str(),
                api_key,
                Strategy::Desktop,
            )
            .await;

            let custom_404 = check_custom_404(self.fetcher.as_ref(), &page_url).await;

            info!(
                "Audit complete for {}: {} broken links, {} keywords",
                page_url,
                broken_links.len(),
                snapshot.top_keywords.len()
            );

            Ok(AuditRecord {
                url: page_url.to_string(),
                favicon_link: snapshot.favicon,
                title: snapshot.title,
                description: snapshot.description,
                h1_texts: snapshot.h1_texts,
                heading_counts: snapshot.heading_counts,
                canonical: snapshot.canonical,
                robots_tag: snapshot.robots_tag,
                og_tags: snapshot.og_tags,
                schema_markup: snapshot.schema_markup,
                https: site.https,
                robots_txt: site.robots_txt,
                sitemap_xml: site.sitemap_xml,
                custom_404,
                iframes: snapshot.iframes,
                social_links: snapshot.social_links,
                broken_links,
                image_count: snapshot.images.count,
                images_with_alt: snapshot.images.with_alt,
                images,
                internal_links: snapshot.internal_links,
                external_links: snapshot.external_links,
                top_keywords: snapshot.top_keywords,
                pagespeed_mobile,
                pagespeed_desktop,
                whois,
            })
        }
    }

    /// Audits the page named by `config.url` with the production pipeline.
    ///
    /// Convenience wrapper over [`Auditor::from_config`] +
    /// [`Auditor::run_audit`].
    pub async fn run_audit(config: &Config) -> anyhow::Result<AuditRecord> {
        let auditor = Auditor::from_config(config)?;
        Ok(auditor.run_audit(&config.url, &config.api_key).await?)
    }
}
