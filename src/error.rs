// src/error.rs
//! Error types for the parser.
//!
//! Per-item failures (`FetchError`, `QueryError`, `PepError`) are caught inside the
//! mode loops and reported as diagnostics. Anything that escapes a mode surfaces as
//! a `ScrapeError` and is logged once at the top level.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The host could not be reached at all.
    #[error("connection failed while loading {url}")]
    Connection { url: String },

    /// Any other transport failure.
    #[error("failed to load page {url}: {source}")]
    Loading {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Copying a streamed body to its destination failed.
    #[error("failed to stream body of {url}: {source}")]
    Stream {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Expected markup is missing: the page structure changed.
    #[error("tag {tag} {attrs} not found")]
    TagNotFound { tag: String, attrs: String },

    #[error("invalid selector {0}")]
    Selector(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PepError {
    #[error("no status found in PEP article {url}")]
    StatusMissing { url: String },
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Pep(#[from] PepError),

    /// The PEP index used a status code with no entry in the expected-status table.
    #[error("unknown PEP status code {code:?} (abbreviation {abbr:?})")]
    UnknownStatus { code: String, abbr: String },

    #[error("invalid URL {url}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
