// src/scrape/download.rs
use std::{
    fs::{ self, File },
    io::{ BufWriter, Write },
    path::{ Path, PathBuf },
};

use url::Url;

use crate::config::consts::DOWNLOADS_URL;
use crate::core::Fetch;
use crate::core::sanitize::file_name_from_url;
use crate::error::{ Result, ScrapeError };
use crate::file::ensure_directory;
use crate::progress::Progress;
use crate::specs::downloads;

use super::{ fetch, join, parse_url };

/// Save every documentation archive into `dir`. Returns the paths written.
/// An archive that fails to download is reported and its partial file removed.
pub fn download_archives(
    session: &dyn Fetch,
    dir: &Path,
    progress: &mut dyn Progress,
) -> Result<Vec<PathBuf>> {
    let page_url = parse_url(DOWNLOADS_URL)?;
    let page = fetch(session, &page_url)?;
    let links = downloads::parse_archive_links(&page.body)?;

    ensure_directory(dir).map_err(|source| ScrapeError::Io { path: dir.to_path_buf(), source })?;

    let mut saved = Vec::with_capacity(links.len());
    progress.begin("Downloads", links.len());
    for href in &links {
        let url = join(&page_url, href)?;
        let Some(name) = file_name_from_url(&url) else {
            progress.log(&format!("No file name in archive link {url}"));
            progress.item_done();
            continue;
        };
        let path = dir.join(name);
        match save(session, &url, &path) {
            Ok(()) => {
                progress.log(&format!("Archive saved to {}", path.display()));
                saved.push(path);
            }
            Err(e) => {
                let _ = fs::remove_file(&path);
                progress.log(&format!("Archive {url} not saved: {e}"));
            }
        }
        progress.item_done();
    }
    progress.finish();
    Ok(saved)
}

fn save(session: &dyn Fetch, url: &Url, path: &Path) -> Result<()> {
    let io_err = |source| ScrapeError::Io { path: path.to_path_buf(), source };
    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    session.download(url, &mut out)?;
    out.flush().map_err(io_err)?;
    Ok(())
}
