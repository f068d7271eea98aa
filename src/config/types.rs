//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_LINK_CONCURRENCY, DEFAULT_REPORT_PATH, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    PAGESPEED_ENDPOINT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Audit configuration.
///
/// Usable both as the CLI surface (via `clap::Parser`) and programmatically
/// (via `Default` plus struct update syntax).
///
/// # Examples
///
/// ```no_run
/// use seo_audit::Config;
///
/// let config = Config {
///     url: "https://example.com".into(),
///     api_key: "my-pagespeed-key".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seo_audit",
    about = "Audit a web page's on-page SEO and technical signals and write an HTML report"
)]
pub struct Config {
    /// URL of the page to audit
    pub url: String,

    /// Google PageSpeed Insights API key.
    ///
    /// An absent or invalid key degrades the PageSpeed section of the report;
    /// it never fails the audit.
    #[arg(long, default_value = "")]
    pub api_key: String,

    /// Path the HTML report is written to (overwritten if it exists)
    #[arg(long, default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Maximum concurrent link/image probe requests
    #[arg(long, default_value_t = DEFAULT_LINK_CONCURRENCY)]
    pub link_concurrency: usize,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// PageSpeed API endpoint (override for testing)
    #[arg(long, default_value = PAGESPEED_ENDPOINT, hide = true)]
    pub pagespeed_endpoint: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            output: PathBuf::from(DEFAULT_REPORT_PATH),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            link_concurrency: DEFAULT_LINK_CONCURRENCY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pagespeed_endpoint: PAGESPEED_ENDPOINT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
