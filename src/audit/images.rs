//! Image payload measurement.

use futures::stream::{self, StreamExt};
use serde::Serialize;

use crate::fetch::Fetcher;
use crate::parse::ImageRef;

/// One row of the report's image table.
#[derive(Debug, Clone, Serialize)]
pub struct ImageDetail {
    /// Absolute image URL.
    pub src: String,
    /// Alt text; rendered "N/A" when the attribute was missing.
    pub alt: Option<String>,
    /// Payload size in KB (two decimals); `None` when the fetch failed.
    pub size_kb: Option<f64>,
}

/// Fetches every image to measure its payload size.
///
/// Fetches run concurrently up to `concurrency`; results keep document order.
/// A failed fetch degrades that image's size to `None` ("N/A" in the report),
/// never the whole audit.
pub async fn measure_images(
    fetcher: &dyn Fetcher,
    refs: &[ImageRef],
    concurrency: usize,
) -> Vec<ImageDetail> {
    stream::iter(refs.iter().cloned())
        .map(|image| async move {
            let size_kb = match fetcher.fetch(&image.src).await {
                Ok(response) if response.is_success() => Some(response.size_kb()),
                Ok(response) => {
                    log::debug!(
                        "image size fetch for {} returned HTTP {}",
                        image.src,
                        response.status
                    );
                    None
                }
                Err(e) => {
                    log::debug!("image size fetch failed for {}: {}", image.src, e);
                    None
                }
            };
            ImageDetail {
                src: image.src,
                alt: image.alt,
                size_kb,
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}
