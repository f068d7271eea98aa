//! Error taxonomy for the audit pipeline.
//!
//! Only a failure of the primary page fetch crosses the pipeline boundary as
//! an error. Every other failure is absorbed into the report as a degraded
//! field value: the WHOIS and PageSpeed sections carry their own `Error`
//! variants, and individual link/image/robots/sitemap failures map to
//! per-item "broken"/"N/A"/"No" markers.

use thiserror::Error;

use crate::fetch::FetchError;

/// Fatal errors that abort the whole audit.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The supplied URL could not be parsed.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        /// The URL as supplied by the caller.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The primary page could not be retrieved at all.
    #[error("failed to fetch {url}: {source}")]
    PrimaryFetch {
        /// The page URL.
        url: String,
        /// The underlying fetch failure.
        #[source]
        source: FetchError,
    },

    /// The primary page answered with a non-success status.
    #[error("primary page {url} returned HTTP {status}")]
    PrimaryStatus {
        /// The page URL.
        url: String,
        /// The HTTP status code returned.
        status: u16,
    },
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}
