// Shared test helpers: fake WHOIS lookups and auditor construction.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use seo_audit::fetch::HttpFetcher;
use seo_audit::whois::{DomainLookup, WhoisFields};
use seo_audit::Auditor;

/// WHOIS lookup that always returns the same fields.
pub struct StaticWhois(pub WhoisFields);

#[async_trait]
impl DomainLookup for StaticWhois {
    async fn lookup(&self, _domain: &str) -> Result<WhoisFields> {
        Ok(self.0.clone())
    }
}

/// WHOIS lookup that always fails with the given message.
#[allow(dead_code)] // Used by some test files
pub struct FailingWhois(pub String);

#[async_trait]
impl DomainLookup for FailingWhois {
    async fn lookup(&self, _domain: &str) -> Result<WhoisFields> {
        Err(anyhow::anyhow!(self.0.clone()))
    }
}

/// Auditor backed by the real HTTP fetcher and a static WHOIS fake.
#[allow(dead_code)] // Used by other test files
pub fn test_auditor(pagespeed_endpoint: String) -> Auditor {
    test_auditor_with_whois(
        pagespeed_endpoint,
        Arc::new(StaticWhois(WhoisFields::default())),
    )
}

/// Auditor with an explicit WHOIS fake.
#[allow(dead_code)] // Used by other test files
pub fn test_auditor_with_whois(
    pagespeed_endpoint: String,
    whois: Arc<dyn DomainLookup>,
) -> Auditor {
    let fetcher =
        HttpFetcher::new(Duration::from_secs(5), "seo_audit_test/1.0").expect("client builds");
    Auditor::with_parts(Arc::new(fetcher), whois, 4, pagespeed_endpoint)
}

/// A PageSpeed v5 response body with the fixed metric subset populated.
#[allow(dead_code)] // Used by other test files
pub fn pagespeed_body(score: f64, fcp: &str) -> serde_json::Value {
    serde_json::json!({
        "lighthouseResult": {
            "categories": { "performance": { "score": score } },
            "audits": {
                "first-contentful-paint": { "displayValue": fcp },
                "largest-contentful-paint": { "displayValue": "2.5 s" },
                "cumulative-layout-shift": { "displayValue": "0.02" },
                "speed-index": { "displayValue": "3.1 s" },
                "total-blocking-time": { "displayValue": "40 ms" }
            }
        }
    })
}
