// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::{
    config::options::{ AppOptions, Dirs, Mode },
    core::Fetch,
    error::Result,
    output,
    progress::Progress,
    scrape,
    store::DataSet,
};

/// What a mode produced.
#[derive(Debug)]
pub enum Outcome {
    /// A result set for the output dispatcher.
    Table(DataSet),
    /// Files written by the mode itself; nothing to render.
    Saved(Vec<PathBuf>),
}

impl Mode {
    /// Run this mode's handler.
    pub fn collect(
        self,
        session: &dyn Fetch,
        dirs: &Dirs,
        progress: &mut dyn Progress,
    ) -> Result<Outcome> {
        match self {
            Mode::WhatsNew => scrape::collect_whats_new(session, progress).map(Outcome::Table),
            Mode::LatestVersions => scrape::collect_latest_versions(session, progress).map(Outcome::Table),
            Mode::Download => scrape::download_archives(session, &dirs.downloads, progress).map(Outcome::Saved),
            Mode::Pep => scrape::collect_pep(session, progress).map(Outcome::Table),
        }
    }
}

/// Top-level runner: run the selected mode, then render its result.
/// Returns the results file, when one was written.
pub fn run(
    opts: &AppOptions,
    session: &dyn Fetch,
    progress: &mut dyn Progress,
) -> Result<Option<PathBuf>> {
    match opts.mode.collect(session, &opts.dirs(), progress)? {
        Outcome::Table(data) => output::render(&data, opts),
        Outcome::Saved(paths) => {
            info!("{} archive(s) downloaded", paths.len());
            Ok(None)
        }
    }
}
