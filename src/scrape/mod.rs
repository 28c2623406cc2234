// src/scrape/mod.rs
use tracing::warn;
use url::Url;

use crate::core::{ Fetch, Page };
use crate::error::{ Result, ScrapeError };

mod download;
mod latest_versions;
mod peps;
mod whats_new;

pub use download::download_archives;
pub use latest_versions::collect_latest_versions;
pub use peps::{ check_row, collect_pep, StatusTally };
pub use whats_new::collect_whats_new;

pub(crate) fn parse_url(s: &str) -> Result<Url> {
    Url::parse(s).map_err(|source| ScrapeError::Url { url: s!(s), source })
}

pub(crate) fn join(base: &Url, href: &str) -> Result<Url> {
    base.join(href).map_err(|source| ScrapeError::Url { url: s!(href), source })
}

/// GET a page for a mode. Error statuses are passed through to the markup
/// queries, with a warning.
pub(crate) fn fetch(session: &dyn Fetch, url: &Url) -> Result<Page> {
    let page = session.get_page(url)?;
    if !(200..300).contains(&page.status) {
        warn!("{} answered with HTTP {}", page.url, page.status);
    }
    Ok(page)
}
