// src/specs/peps.rs
//! PEP index tables and PEP article headers on peps.python.org.
//!
//! Index rows look like:
//! ```text
//! <tr><td><abbr title="Standards Track, Final">SF</abbr></td>
//!     <td><a href="pep-0008/">8</a></td><td>Style Guide…</td>…</tr>
//! ```
//! The abbreviation is the PEP type letter followed by an optional status
//! letter. Article pages carry a header `<dl>` with `<dt>Status:</dt><dd>Final</dd>`.
//!
//! Queries only see the `table` / `dl` elements, so navigation and footer
//! markup elsewhere on the page can never match.

use scraper::ElementRef;

use crate::config::consts::STATUS_TERM;
use crate::core::html::{ first, next_element_sibling, select_all, selector, text_of, Document };
use crate::error::QueryError;

/// One `<tr>` of an index table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexRow {
    /// Header or spacer row: nothing links to a PEP.
    NoLink,
    /// Links a PEP but carries no status abbreviation.
    MissingStatus { pep: String },
    /// A PEP with its index abbreviation, e.g. `SF`.
    Entry { href: String, abbr: String },
}

/// Every index table, each as its rows in page order.
pub fn parse_index(html_doc: &str) -> Result<Vec<Vec<IndexRow>>, QueryError> {
    let doc = Document::parse_only(html_doc, "table")?;
    let tr = selector("tr")?;
    let abbr = selector("abbr")?;
    let a = selector("a")?;

    let tables = doc
        .select_all("table")?
        .into_iter()
        .map(|table| {
            table
                .select(&tr)
                .map(|row| classify_row(row, &abbr, &a))
                .collect()
        })
        .collect();
    Ok(tables)
}

fn classify_row(row: ElementRef<'_>, abbr: &scraper::Selector, a: &scraper::Selector) -> IndexRow {
    let Some(link) = first(row, a) else { return IndexRow::NoLink };
    let Some(href) = link.value().attr("href") else { return IndexRow::NoLink };
    match first(row, abbr) {
        Some(status) => IndexRow::Entry { href: s!(href), abbr: text_of(status).trim().to_string() },
        None => IndexRow::MissingStatus { pep: text_of(link).trim().to_string() },
    }
}

/// Status from a PEP article's header field list. `Ok(None)` when the header
/// has no `Status:` term (or the term has no value).
pub fn parse_article_status(html_doc: &str) -> Result<Option<String>, QueryError> {
    let doc = Document::parse_only(html_doc, "dl")?;
    let Ok(header) = doc.select_first("dl") else { return Ok(None) };

    for dt in select_all(header, "dt")? {
        if text_of(dt).trim() == STATUS_TERM {
            return Ok(next_element_sibling(dt).map(|dd| text_of(dd).trim().to_string()));
        }
    }
    Ok(None)
}
