// tests/pep_mode.rs
mod common;

use common::{ pep_article, FixtureSession, RecordingProgress };
use pydocs_scrape::config::consts::PEPS_URL;
use pydocs_scrape::error::ScrapeError;
use pydocs_scrape::scrape::{ check_row, collect_pep };
use pydocs_scrape::specs::peps::IndexRow;
use url::Url;

const INDEX: &str = include_str!("fixtures/pep_index.html");

fn pep(n: &str) -> String {
    format!("{PEPS_URL}pep-{n}/")
}

fn session() -> FixtureSession {
    FixtureSession::default()
        .with(PEPS_URL, INDEX)
        .with(&pep("0001"), pep_article("Active"))
        .with(&pep("0002"), pep_article("Rejected"))
        .with(&pep("0008"), pep_article("Final"))
        .with(&pep("0750"), pep_article("Draft"))
        .with(&pep("0009"), "<dl><dt>Author:</dt><dd>Barry Warsaw</dd></dl>")
    // pep-0010 is unreachable
}

fn entry(href: &str, abbr: &str) -> IndexRow {
    IndexRow::Entry { href: href.into(), abbr: abbr.into() }
}

#[test]
fn tally_counts_article_statuses_in_first_seen_order() {
    let mut progress = RecordingProgress::default();
    let data = collect_pep(&session(), &mut progress).unwrap();

    assert_eq!(data.headers, ["Статус", "Количество"]);
    let rows: Vec<(&str, &str)> = data.rows.iter().map(|r| (r[0].as_str(), r[1].as_str())).collect();
    assert_eq!(
        rows,
        vec![("Active", "1"), ("Rejected", "1"), ("Final", "1"), ("Draft", "1"), ("Все PEP", "4")]
    );
}

#[test]
fn diagnostics_are_flushed_after_each_table() {
    let mut progress = RecordingProgress::default();
    collect_pep(&session(), &mut progress).unwrap();

    let mut expected = vec![s("begin:Processing table 1 (4)")];
    expected.extend(std::iter::repeat_n(s("done"), 4));
    expected.extend([
        s("finish"),
        s("log:Status mismatch for PEP pep-0002/. Expected: Active / Accepted, actual: Rejected"),
        s("log:No status found in the index table for PEP 42"),
        s("begin:Processing table 2 (5)"),
    ]);
    expected.extend(std::iter::repeat_n(s("done"), 5));
    expected.extend([
        s("finish"),
        s("log:no status found in PEP article https://peps.python.org/pep-0009/"),
        s("log:connection failed while loading https://peps.python.org/pep-0010/"),
    ]);
    assert_eq!(progress.events, expected);
}

#[test]
fn accepted_article_for_active_code_is_silent() {
    let session = FixtureSession::default().with(&pep("0001"), pep_article("Accepted"));
    let base = Url::parse(PEPS_URL).unwrap();
    let mut diagnostics = Vec::new();

    let counted = check_row(&session, &base, &entry("pep-0001/", "PA"), &mut diagnostics).unwrap();
    assert_eq!(counted.as_deref(), Some("Accepted"));
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
}

#[test]
fn mismatch_is_reported_but_still_counted() {
    let session = FixtureSession::default().with(&pep("0002"), pep_article("Rejected"));
    let base = Url::parse(PEPS_URL).unwrap();
    let mut diagnostics = Vec::new();

    let counted = check_row(&session, &base, &entry("pep-0002/", "SA"), &mut diagnostics).unwrap();
    assert_eq!(counted.as_deref(), Some("Rejected"));
    assert_eq!(
        diagnostics,
        ["Status mismatch for PEP pep-0002/. Expected: Active / Accepted, actual: Rejected"]
    );
}

#[test]
fn rows_without_link_or_abbreviation_fetch_nothing() {
    let session = FixtureSession::default();
    let base = Url::parse(PEPS_URL).unwrap();
    let mut diagnostics = Vec::new();

    assert_eq!(check_row(&session, &base, &IndexRow::NoLink, &mut diagnostics).unwrap(), None);
    assert!(diagnostics.is_empty());

    let missing = IndexRow::MissingStatus { pep: "42".into() };
    assert_eq!(check_row(&session, &base, &missing, &mut diagnostics).unwrap(), None);
    assert_eq!(diagnostics, ["No status found in the index table for PEP 42"]);
    assert!(session.requested().is_empty());
}

#[test]
fn unknown_status_code_stops_the_run() {
    let index = r#"<table><tr><td><abbr>SX</abbr></td><td><a href="pep-0999/">999</a></td></tr></table>"#;
    let session = FixtureSession::default().with(PEPS_URL, index);
    let mut progress = RecordingProgress::default();

    let err = collect_pep(&session, &mut progress).unwrap_err();
    match err {
        ScrapeError::UnknownStatus { code, abbr } => {
            assert_eq!(code, "X");
            assert_eq!(abbr, "SX");
        }
        other => panic!("unexpected error: {other}"),
    }
    // the article is never requested
    assert_eq!(session.requested(), [PEPS_URL]);
}

#[test]
fn unreachable_index_fails() {
    let mut progress = RecordingProgress::default();
    let err = collect_pep(&FixtureSession::default(), &mut progress).unwrap_err();
    assert!(matches!(err, ScrapeError::Fetch(_)));
}

fn s(v: &str) -> String {
    v.to_string()
}
