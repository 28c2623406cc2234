// src/specs/latest_versions.rs
//! Version list in the docs.python.org sidebar.
//!
//! `div.sphinxsidebarwrapper` holds several `<ul>`s; the one whose text mentions
//! "All versions" links every documented release as "Python 3.12 (stable)".

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::{ ALL_VERSIONS_MARKER, VERSION_PATTERN };
use crate::core::html::{ select_all, text_of, Document };
use crate::error::QueryError;

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VERSION_PATTERN).expect("version pattern is a valid regex"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionLink {
    pub href: String,
    pub version: String,
    pub status: String,
}

/// `("3.12", "stable")` for "Python 3.12 (stable)"; `None` when the text has
/// no minor version or no status.
pub fn match_version(text: &str) -> Option<(String, String)> {
    let caps = VERSION_RE.captures(text)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

/// Links of the first sidebar list mentioning "All versions".
/// `Ok(None)` if the sidebar has no such list.
pub fn parse_sidebar(html_doc: &str) -> Result<Option<Vec<VersionLink>>, QueryError> {
    let doc = Document::parse(html_doc);
    let sidebar = doc.find_tag("div", &[("class", "sphinxsidebarwrapper")])?;

    for ul in select_all(sidebar, "ul")? {
        if !text_of(ul).contains(ALL_VERSIONS_MARKER) {
            continue;
        }
        let mut links = Vec::new();
        for a in select_all(ul, "a")? {
            let Some((version, status)) = match_version(&text_of(a)) else { continue };
            let Some(href) = a.value().attr("href") else { continue };
            links.push(VersionLink { href: s!(href), version, status });
        }
        return Ok(Some(links));
    }
    Ok(None)
}
