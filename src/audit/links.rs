//! Broken-link scanning.

use futures::stream::{self, StreamExt};

use crate::fetch::Fetcher;

/// Probes every anchor URL and returns the broken ones.
///
/// A link is broken when its GET returns 404 or fails with a network error.
/// Each URL is fetched with a full GET (not HEAD) so the result matches what
/// a visitor would see. Probes run concurrently up to `concurrency` — a
/// deliberate departure from a sequential scan — but the returned list keeps
/// the original document order.
pub async fn find_broken_links(
    fetcher: &dyn Fetcher,
    urls: &[String],
    concurrency: usize,
) -> Vec<String> {
    let results: Vec<(String, bool)> = stream::iter(urls.iter().cloned())
        .map(|url| async move {
            let broken = match fetcher.fetch(&url).await {
                Ok(response) => response.status == 404,
                Err(e) => {
                    log::debug!("link probe failed for {}: {}", url, e);
                    true
                }
            };
            (url, broken)
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    results
        .into_iter()
        .filter_map(|(url, broken)| broken.then_some(url))
        .collect()
}
