//! HTTP retrieval capability.
//!
//! The whole pipeline talks to the network through the [`Fetcher`] trait so
//! tests can supply a deterministic fake without live network access. The
//! production implementation, [`HttpFetcher`], wraps a `reqwest::Client`
//! configured with a per-request timeout and standard redirect following.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::ClientBuilder;
use thiserror::Error;

/// Errors raised by a [`Fetcher`].
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request timed out.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Any other transport-level failure (DNS, connect, TLS, body read).
    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

/// A fetched HTTP response: status, raw body, and headers.
#[derive(Debug, Clone)]
pub struct Fetched {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
    /// Response headers.
    pub headers: HeaderMap,
}

impl Fetched {
    /// Returns the body decoded as UTF-8, lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body size in kilobytes, rounded to two decimals.
    pub fn size_kb(&self) -> f64 {
        (self.body.len() as f64 / 1024.0 * 100.0).round() / 100.0
    }
}

/// The capability abstraction over HTTP retrieval.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Performs a GET request, following standard redirects.
    async fn fetch(&self, url: &str) -> Result<Fetched, FetchError>;
}

/// Production [`Fetcher`] backed by `reqwest`.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds a client with the given timeout and User-Agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(user_agent.to_string())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Fetched, FetchError> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(Fetched {
            status,
            body,
            headers,
        })
    }
}
