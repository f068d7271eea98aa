//! PageSpeed Insights collection.
//!
//! Queries the performance API once per strategy (mobile, desktop) through
//! the [`Fetcher`] and extracts a fixed subset of Lighthouse metrics. Every
//! failure mode degrades to [`PageSpeedReport::Error`]; this collector never
//! returns an error to the pipeline.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::fetch::Fetcher;

/// PageSpeed strategy parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Mobile emulation.
    Mobile,
    /// Desktop emulation.
    Desktop,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Mobile => "mobile",
            Strategy::Desktop => "desktop",
        })
    }
}

/// The fixed metric subset extracted from a Lighthouse result.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageSpeedMetrics {
    /// Performance score scaled to 0-100; `None` renders as "Null".
    pub performance_score: Option<f64>,
    /// First Contentful Paint display string, verbatim.
    pub first_contentful_paint: Option<String>,
    /// Largest Contentful Paint display string, verbatim.
    pub largest_contentful_paint: Option<String>,
    /// Cumulative Layout Shift display string, verbatim.
    pub cumulative_layout_shift: Option<String>,
    /// Speed Index display string, verbatim.
    pub speed_index: Option<String>,
    /// Total Blocking Time display string, verbatim.
    pub total_blocking_time: Option<String>,
}

/// One strategy's section of the audit record.
#[derive(Debug, Clone, Serialize)]
pub enum PageSpeedReport {
    /// The API answered 200 and was parsed.
    Metrics(PageSpeedMetrics),
    /// The call failed; the message replaces the metric values.
    Error(String),
}

/// Fetches PageSpeed metrics for one strategy.
///
/// On a non-200 response the report carries
/// `"Failed to fetch PageSpeed data. Status code: <code>"`. Network and JSON
/// parse failures degrade the same way with their own messages.
pub async fn collect(
    fetcher: &dyn Fetcher,
    endpoint: &str,
    url: &str,
    api_key: &str,
    strategy: Strategy,
) -> PageSpeedReport {
    let api_url = format!(
        "{}?url={}&strategy={}&key={}",
        endpoint, url, strategy, api_key
    );
    log::info!("Fetching PageSpeed metrics ({}) for {}", strategy, url);

    let response = match fetcher.fetch(&api_url).await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("PageSpeed fetch degraded ({}): {}", strategy, e);
            return PageSpeedReport::Error(format!("Failed to fetch PageSpeed data. {}", e));
        }
    };
    if response.status != 200 {
        return PageSpeedReport::Error(format!(
            "Failed to fetch PageSpeed data. Status code: {}",
            response.status
        ));
    }

    let data: Value = match serde_json::from_slice(&response.body) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("PageSpeed response parse degraded ({}): {}", strategy, e);
            return PageSpeedReport::Error(format!("Failed to parse PageSpeed data. {}", e));
        }
    };

    PageSpeedReport::Metrics(extract_metrics(&data))
}

fn extract_metrics(data: &Value) -> PageSpeedMetrics {
    let lighthouse = &data["lighthouseResult"];
    PageSpeedMetrics {
        performance_score: lighthouse["categories"]["performance"]["score"]
            .as_f64()
            .map(|score| score * 100.0),
        first_contentful_paint: audit_display(lighthouse, "first-contentful-paint"),
        largest_contentful_paint: audit_display(lighthouse, "largest-contentful-paint"),
        cumulative_layout_shift: audit_display(lighthouse, "cumulative-layout-shift"),
        speed_index: audit_display(lighthouse, "speed-index"),
        total_blocking_time: audit_display(lighthouse, "total-blocking-time"),
    }
}

fn audit_display(lighthouse: &Value, audit: &str) -> Option<String> {
    lighthouse["audits"][audit]["displayValue"]
        .as_str()
        .map(|display| display.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_metrics_scales_score() {
        let data: Value = serde_json::json!({
            "lighthouseResult": {
                "categories": { "performance": { "score": 0.87 } },
                "audits": {
                    "first-contentful-paint": { "displayValue": "1.2 s" },
                    "total-blocking-time": { "displayValue": "30 ms" }
                }
            }
        });
        let metrics = extract_metrics(&data);
        assert_eq!(metrics.performance_score, Some(87.0));
        assert_eq!(metrics.first_contentful_paint.as_deref(), Some("1.2 s"));
        assert_eq!(metrics.total_blocking_time.as_deref(), Some("30 ms"));
        assert_eq!(metrics.largest_contentful_paint, None);
        assert_eq!(metrics.cumulative_layout_shift, None);
        assert_eq!(metrics.speed_index, None);
    }

    #[test]
    fn test_extract_metrics_missing_score_is_none() {
        let data: Value = serde_json::json!({ "lighthouseResult": {} });
        let metrics = extract_metrics(&data);
        assert_eq!(metrics.performance_score, None);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Mobile.to_string(), "mobile");
        assert_eq!(Strategy::Desktop.to_string(), "desktop");
    }
}
