// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;

use pydocs_scrape::core::{ Fetch, Page };
use pydocs_scrape::error::FetchError;
use pydocs_scrape::progress::Progress;
use url::Url;

/// Serves canned bodies by absolute URL. Anything else fails like an
/// unreachable host.
#[derive(Default)]
pub struct FixtureSession {
    pages: HashMap<String, Vec<u8>>,
    requested: RefCell<Vec<String>>,
}

impl FixtureSession {
    pub fn with(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }

    fn lookup(&self, url: &Url) -> Result<&[u8], FetchError> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages
            .get(url.as_str())
            .map(Vec::as_slice)
            .ok_or_else(|| FetchError::Connection { url: url.to_string() })
    }
}

impl Fetch for FixtureSession {
    fn get_page(&self, url: &Url) -> Result<Page, FetchError> {
        let body = self.lookup(url)?;
        Ok(Page { url: url.clone(), status: 200, body: String::from_utf8_lossy(body).into_owned() })
    }

    fn download(&self, url: &Url, out: &mut dyn Write) -> Result<u64, FetchError> {
        let body = self.lookup(url)?;
        out.write_all(body)
            .map_err(|source| FetchError::Stream { url: url.to_string(), source })?;
        Ok(body.len() as u64)
    }
}

/// Records every progress call in order, e.g. `begin:Processing table 1 (3)`,
/// `done`, `finish`, `log:<message>`.
#[derive(Default)]
pub struct RecordingProgress {
    pub events: Vec<String>,
}

impl RecordingProgress {
    pub fn logs(&self) -> Vec<&str> {
        self.events.iter().filter_map(|e| e.strip_prefix("log:")).collect()
    }
}

impl Progress for RecordingProgress {
    fn begin(&mut self, label: &str, total: usize) {
        self.events.push(format!("begin:{label} ({total})"));
    }
    fn log(&mut self, msg: &str) {
        self.events.push(format!("log:{msg}"));
    }
    fn item_done(&mut self) {
        self.events.push("done".into());
    }
    fn finish(&mut self) {
        self.events.push("finish".into());
    }
}

/// A PEP article page whose header field list carries `status`.
pub fn pep_article(status: &str) -> String {
    format!(
        r#"<html><body><article>
        <dl class="rfc2822 field-list simple">
          <dt class="field-odd">Author<span class="colon">:</span></dt>
          <dd class="field-odd">Someone</dd>
          <dt class="field-even">Status<span class="colon">:</span></dt>
          <dd class="field-even"><abbr title="">{status}</abbr></dd>
        </dl>
        </article></body></html>"#
    )
}
