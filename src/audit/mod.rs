//! Link/resource auditing.
//!
//! Broken-link scanning, image payload measurement, and site-level probes
//! (robots.txt, sitemap.xml, HTTPS, custom 404). All sub-fetches degrade
//! per-item on failure; none of them can abort the audit.

mod images;
mod links;
mod site;

pub use images::{measure_images, ImageDetail};
pub use links::find_broken_links;
pub use site::{check_custom_404, check_robots_sitemap_https, SiteChecks};
