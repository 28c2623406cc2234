// src/store.rs
use std::{ fs, io, path::{ Path, PathBuf } };

use sha2::{ Digest, Sha256 };

use crate::file::ensure_directory;

/// Header plus rows, as produced by a mode and consumed once by the output.
/// Every row has the header's arity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len(), "row arity differs from header: {row:?}");
        self.rows.push(row);
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Header first, then the data rows.
    pub fn lines(&self) -> impl Iterator<Item = &[String]> {
        std::iter::once(self.headers.as_slice()).chain(self.rows.iter().map(Vec::as_slice))
    }
}

/* ---------------- HTTP response cache ---------------- */

/// On-disk response cache keyed by request URL.
/// One file per URL: `<status>\n<body bytes>`.
#[derive(Clone, Debug)]
pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, url: &str) -> PathBuf {
        self.dir.join(hex::encode(Sha256::digest(url.as_bytes())))
    }

    pub fn load(&self, url: &str) -> io::Result<Option<(u16, Vec<u8>)>> {
        let raw = match fs::read(self.entry_path(url)) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let split = raw
            .iter()
            .position(|&b| b == b'\n')
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "cache entry without status line"))?;
        let status = std::str::from_utf8(&raw[..split])
            .ok()
            .and_then(|s| s.trim().parse::<u16>().ok())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "bad status line in cache entry"))?;
        Ok(Some((status, raw[split + 1..].to_vec())))
    }

    pub fn save(&self, url: &str, status: u16, body: &[u8]) -> io::Result<()> {
        ensure_directory(&self.dir)?;
        let mut buf = Vec::with_capacity(body.len() + 4);
        buf.extend_from_slice(status.to_string().as_bytes());
        buf.push(b'\n');
        buf.extend_from_slice(body);
        fs::write(self.entry_path(url), buf)
    }

    /// Drop every cached response. Fine to call when nothing is cached.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_dir_all(&self.dir) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
