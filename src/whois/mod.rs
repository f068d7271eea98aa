//! WHOIS/RDAP domain lookup.
//!
//! The lookup sits behind the [`DomainLookup`] trait so tests can supply a
//! fake. The production implementation uses the `whois-service` crate, which
//! tries RDAP first, falls back to WHOIS, and handles IANA bootstrap for TLD
//! discovery.
//!
//! Failure of the whole lookup degrades to [`WhoisReport::Error`]; the audit
//! continues with the remaining sections.

mod parse;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use url::Url;
use whois_service::WhoisClient;

use parse::convert_response;

/// Flat WHOIS field set for the report.
///
/// Every field is optional; absent values render as "N/A".
#[derive(Debug, Clone, Default, Serialize)]
pub struct WhoisFields {
    /// Registered domain name.
    pub domain_name: Option<String>,
    /// Registrar name.
    pub registrar: Option<String>,
    /// Domain creation date, as reported upstream.
    pub creation_date: Option<String>,
    /// Domain expiration date, as reported upstream.
    pub expiration_date: Option<String>,
    /// Last update date, as reported upstream.
    pub last_updated: Option<String>,
    /// Nameservers.
    pub name_servers: Option<Vec<String>>,
    /// Domain status codes (e.g. "clientTransferProhibited").
    pub status: Option<Vec<String>>,
}

/// WHOIS section of the audit record.
#[derive(Debug, Clone, Serialize)]
pub enum WhoisReport {
    /// Lookup succeeded; individual fields may still be absent.
    Fields(WhoisFields),
    /// The whole lookup failed with this message.
    Error(String),
}

/// The capability abstraction over domain-registration lookups.
#[async_trait]
pub trait DomainLookup: Send + Sync {
    /// Looks up registration data for a registrable domain.
    async fn lookup(&self, domain: &str) -> Result<WhoisFields>;
}

/// Production [`DomainLookup`] backed by the `whois-service` crate.
pub struct WhoisServiceLookup;

#[async_trait]
impl DomainLookup for WhoisServiceLookup {
    async fn lookup(&self, domain: &str) -> Result<WhoisFields> {
        log::info!("Starting WHOIS lookup for domain: {}", domain);
        let client = WhoisClient::new()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create WHOIS client: {}", e))?;
        let response = client
            .lookup(domain)
            .await
            .map_err(|e| anyhow::anyhow!("WHOIS lookup failed for {}: {}", domain, e))?;
        Ok(convert_response(domain, &response))
    }
}

/// The domain queried for WHOIS data: the page host with a leading `www.`
/// stripped. TLD/RDAP server routing is handled by the lookup client itself.
pub fn registrable_domain(page: &Url) -> Option<String> {
    let host = page.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

/// Runs the lookup and folds any failure into the degraded report variant.
pub async fn domain_report(lookup: &dyn DomainLookup, domain: &str) -> WhoisReport {
    match lookup.lookup(domain).await {
        Ok(fields) => WhoisReport::Fields(fields),
        Err(e) => {
            log::warn!("WHOIS lookup degraded for {}: {}", domain, e);
            WhoisReport::Error(e.to_string())
        }
    }
}
