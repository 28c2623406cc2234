// src/specs/downloads.rs
//! "Download Python documentation" page: a `table.docutils` whose cells link
//! the documentation archives.

use crate::config::consts::ARCHIVE_EXT;
use crate::core::html::Document;
use crate::error::QueryError;

/// Hrefs (as written in the page, usually relative) of every archive link in
/// the results tables. Fails if the page has no results table at all.
pub fn parse_archive_links(html_doc: &str) -> Result<Vec<String>, QueryError> {
    let doc = Document::parse(html_doc);
    doc.find_tag("table", &[("class", "docutils")])?;

    let css = format!("table.docutils a[href$=\"{ARCHIVE_EXT}\"]");
    let hrefs = doc
        .select_all(&css)?
        .into_iter()
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect();
    Ok(hrefs)
}
