// src/specs/whats_new.rs
//! What's New index and articles on docs.python.org.
//!
//! Index: `#what-s-new-in-python div.toctree-wrapper li.toctree-l1 > a`, one
//! entry per release. Article: first `<section>`, its `<h1>` (with a trailing
//! permalink `¶`) and its `<dl>` holding the Editor/Author byline.

use crate::core::html::{ find_tag, first, select_all, selector, text_of, Document };
use crate::core::sanitize::{ normalize_ws, strip_pilcrow };
use crate::error::QueryError;

pub const TOC_ROOT: &str = "#what-s-new-in-python";
pub const TOC_ITEMS: &str = "div.toctree-wrapper li.toctree-l1";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub byline: String,
}

/// Hrefs of the top-level table-of-contents entries, in page order.
/// Entries without a link are skipped.
pub fn parse_index(html_doc: &str) -> Result<Vec<String>, QueryError> {
    let doc = Document::parse(html_doc);
    let root = doc.select_first(TOC_ROOT)?;
    let a = selector("a")?;

    let hrefs = select_all(root, TOC_ITEMS)?
        .into_iter()
        .filter_map(|li| first(li, &a))
        .filter_map(|link| link.value().attr("href"))
        .map(str::to_string)
        .collect();
    Ok(hrefs)
}

pub fn parse_article(html_doc: &str) -> Result<Article, QueryError> {
    let doc = Document::parse(html_doc);
    let section = doc.find_tag("section", &[])?;
    let h1 = find_tag(section, "h1", &[])?;
    let dl = find_tag(section, "dl", &[])?;
    Ok(Article {
        title: strip_pilcrow(&text_of(h1)),
        byline: normalize_ws(&text_of(dl)),
    })
}
