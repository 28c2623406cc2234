// src/scrape/latest_versions.rs
use crate::config::consts::{ LATEST_VERSIONS_HEADERS, MAIN_DOC_URL };
use crate::core::Fetch;
use crate::error::Result;
use crate::progress::Progress;
use crate::specs::latest_versions;
use crate::store::DataSet;

use super::{ fetch, parse_url };

/// Documentation link, version and status for every release in the sidebar.
pub fn collect_latest_versions(session: &dyn Fetch, progress: &mut dyn Progress) -> Result<DataSet> {
    let url = parse_url(MAIN_DOC_URL)?;
    let page = fetch(session, &url)?;
    let mut out = DataSet::new(LATEST_VERSIONS_HEADERS);

    let Some(links) = latest_versions::parse_sidebar(&page.body)? else {
        progress.log(&format!("No \"All versions\" list in the sidebar of {url}"));
        return Ok(out);
    };

    progress.begin("Versions", links.len());
    for link in links {
        out.push(row![link.href, link.version, link.status]);
        progress.item_done();
    }
    progress.finish();
    Ok(out)
}
