// src/core/net.rs
// Blocking HTTP GET through a caching session.

use std::io::{ self, Write };

use reqwest::blocking::Client;
use tracing::{ debug, warn };
use url::Url;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;
use crate::store::ResponseCache;

/// A fetched page. The body is always UTF-8 text; invalid bytes are replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub url: Url,
    pub status: u16,
    pub body: String,
}

/// What every mode handler needs from the network.
pub trait Fetch {
    /// GET `url` and decode the body as UTF-8.
    fn get_page(&self, url: &Url) -> Result<Page, FetchError>;

    /// GET `url` and copy the raw body into `out`. Returns the number of bytes written.
    /// A non-2xx status is a `FetchError::Loading` and nothing is written.
    fn download(&self, url: &Url, out: &mut dyn Write) -> Result<u64, FetchError>;
}

/// Process-wide HTTP session backed by the on-disk response cache.
pub struct CachedSession {
    client: Client,
    cache: ResponseCache,
}

impl CachedSession {
    pub fn new(cache: ResponseCache) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, cache })
    }
}

impl Fetch for CachedSession {
    fn get_page(&self, url: &Url) -> Result<Page, FetchError> {
        match self.cache.load(url.as_str()) {
            Ok(Some((status, bytes))) => {
                debug!("cache hit {url}");
                return Ok(Page { url: url.clone(), status, body: decode_utf8(&bytes) });
            }
            Ok(None) => {}
            Err(e) => warn!("Unreadable cache entry for {url}: {e}"),
        }

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| classify(url, e))?;
        let status = response.status();
        let bytes = response.bytes().map_err(|e| classify(url, e))?;
        debug!("GET {url} -> {status} ({} bytes)", bytes.len());

        if status.is_success() {
            // best-effort: a cache we cannot write only costs a refetch next run
            if let Err(e) = self.cache.save(url.as_str(), status.as_u16(), &bytes) {
                warn!("Could not cache {url}: {e}");
            }
        }

        Ok(Page { url: url.clone(), status: status.as_u16(), body: decode_utf8(&bytes) })
    }

    fn download(&self, url: &Url, out: &mut dyn Write) -> Result<u64, FetchError> {
        // an error page must not end up in the archive file
        let mut response = self
            .client
            .get(url.clone())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| classify(url, e))?;
        io::copy(&mut response, out).map_err(|source| FetchError::Stream {
            url: url.to_string(),
            source,
        })
    }
}

/// Split transport failures into "could not connect" and everything else.
pub fn classify(url: &Url, e: reqwest::Error) -> FetchError {
    if e.is_connect() {
        FetchError::Connection { url: url.to_string() }
    } else {
        FetchError::Loading { url: url.to_string(), source: e }
    }
}

pub fn decode_utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
