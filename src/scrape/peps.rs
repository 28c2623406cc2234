// src/scrape/peps.rs
//! PEP status tally.
//!
//! Two passes per index row: the index abbreviation says which statuses are
//! acceptable, the PEP article says which one actually holds. Disagreements are
//! reported but the article's status is what gets counted.

use indexmap::IndexMap;
use tracing::debug;
use url::Url;

use crate::config::consts::{ expected_status, PEPS_URL, PEP_HEADERS, TOTAL_LABEL };
use crate::core::Fetch;
use crate::core::sanitize::status_code;
use crate::error::{ PepError, Result, ScrapeError };
use crate::progress::Progress;
use crate::specs::peps::{ self, IndexRow };
use crate::store::DataSet;

use super::{ fetch, join, parse_url };

/// Occurrences of each article status, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusTally {
    counts: IndexMap<String, usize>,
}

impl StatusTally {
    pub fn add(&mut self, status: impl Into<String>) {
        *self.counts.entry(status.into()).or_insert(0) += 1;
    }

    pub fn get(&self, status: &str) -> usize {
        self.counts.get(status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `Статус, Количество` rows plus the trailing total.
    pub fn into_dataset(self) -> DataSet {
        let total = self.total();
        let mut out = DataSet::new(PEP_HEADERS);
        for (status, count) in self.counts {
            out.push(row![status, count]);
        }
        out.push(row![TOTAL_LABEL, total]);
        out
    }
}

pub fn collect_pep(session: &dyn Fetch, progress: &mut dyn Progress) -> Result<DataSet> {
    let base = parse_url(PEPS_URL)?;
    let index = fetch(session, &base)?;
    let tables = peps::parse_index(&index.body)?;
    debug!("PEP index: {} tables", tables.len());

    let mut tally = StatusTally::default();
    for (num, rows) in tables.iter().enumerate() {
        // diagnostics are flushed once the table is done
        let mut diagnostics = Vec::new();

        progress.begin(&format!("Processing table {}", num + 1), rows.len());
        for row in rows {
            let counted = check_row(session, &base, row, &mut diagnostics);
            progress.item_done();
            if let Some(status) = counted? {
                tally.add(status);
            }
        }
        progress.finish();

        for msg in &diagnostics {
            progress.log(msg);
        }
    }
    Ok(tally.into_dataset())
}

/// Check one index row against its article.
///
/// `Ok(Some(status))` is the article status to count, `Ok(None)` a row that is
/// skipped (with a diagnostic pushed when it is worth one). An abbreviation with
/// no expected-status entry is an error: the index format has changed.
pub fn check_row(
    session: &dyn Fetch,
    base: &Url,
    row: &IndexRow,
    diagnostics: &mut Vec<String>,
) -> Result<Option<String>> {
    let (href, abbr) = match row {
        IndexRow::NoLink => return Ok(None),
        IndexRow::MissingStatus { pep } => {
            diagnostics.push(format!("No status found in the index table for PEP {pep}"));
            return Ok(None);
        }
        IndexRow::Entry { href, abbr } => (href, abbr),
    };

    let code = status_code(abbr);
    let expected = expected_status(code).ok_or_else(|| ScrapeError::UnknownStatus {
        code: s!(code),
        abbr: abbr.clone(),
    })?;

    let actual = match article_status(session, base, href) {
        Ok(status) => status,
        Err(e) => {
            diagnostics.push(e.to_string());
            return Ok(None);
        }
    };

    if !expected.contains(&actual.as_str()) {
        diagnostics.push(format!(
            "Status mismatch for PEP {href}. Expected: {}, actual: {actual}",
            expected.join(" / ")
        ));
    }
    Ok(Some(actual))
}

fn article_status(session: &dyn Fetch, base: &Url, href: &str) -> Result<String> {
    let url = join(base, href)?;
    let page = fetch(session, &url)?;
    peps::parse_article_status(&page.body)?
        .ok_or_else(|| PepError::StatusMissing { url: url.to_string() }.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_keeps_first_seen_order_and_total() {
        let mut tally = StatusTally::default();
        for s in ["Final", "Draft", "Final", "Final"] {
            tally.add(s);
        }
        assert_eq!(tally.get("Final"), 3);
        assert_eq!(tally.get("Rejected"), 0);

        let ds = tally.into_dataset();
        assert_eq!(ds.headers, ["Статус", "Количество"]);
        assert_eq!(
            ds.rows,
            vec![row!["Final", 3], row!["Draft", 1], row!["Все PEP", 4]]
        );
    }

    #[test]
    fn empty_tally_still_has_total_row() {
        let ds = StatusTally::default().into_dataset();
        assert_eq!(ds.rows, vec![row!["Все PEP", 0]]);
    }
}
