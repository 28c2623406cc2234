// src/scrape/whats_new.rs
use tracing::debug;
use url::Url;

use crate::config::consts::{ WHATS_NEW_HEADERS, WHATS_NEW_URL };
use crate::core::Fetch;
use crate::error::Result;
use crate::progress::Progress;
use crate::specs::whats_new;
use crate::store::DataSet;

use super::{ fetch, join, parse_url };

/// One row per What's New article: link, title, editor/author byline.
/// Articles that fail to load or parse are reported after the loop.
pub fn collect_whats_new(session: &dyn Fetch, progress: &mut dyn Progress) -> Result<DataSet> {
    let index_url = parse_url(WHATS_NEW_URL)?;
    let index = fetch(session, &index_url)?;
    let hrefs = whats_new::parse_index(&index.body)?;
    debug!("What's New: {} articles listed", hrefs.len());

    let mut out = DataSet::new(WHATS_NEW_HEADERS);
    let mut failures = Vec::new();

    progress.begin("What's New", hrefs.len());
    for href in &hrefs {
        match scrape_article(session, &index_url, href) {
            Ok(row) => out.push(row),
            Err(e) => failures.push(format!("Skipped article {href}: {e}")),
        }
        progress.item_done();
    }
    progress.finish();

    for msg in &failures {
        progress.log(msg);
    }
    Ok(out)
}

fn scrape_article(session: &dyn Fetch, base: &Url, href: &str) -> Result<Vec<String>> {
    let link = join(base, href)?;
    let page = fetch(session, &link)?;
    let article = whats_new::parse_article(&page.body)?;
    Ok(row![link, article.title, article.byline])
}
