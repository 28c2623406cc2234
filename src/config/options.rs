// src/config/options.rs
use std::fmt;
use std::path::{ Path, PathBuf };

use clap::ValueEnum;

use super::consts::*;

/// The four things the parser knows how to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    WhatsNew,
    LatestVersions,
    Download,
    Pep,
}

impl Mode {
    /// Name as typed on the command line; also the stem of result files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::WhatsNew => "whats-new",
            Mode::LatestVersions => "latest-versions",
            Mode::Download => "download",
            Mode::Pep => "pep",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a result set is rendered. `Console` is what you get without `--output`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    #[default]
    #[value(skip)]
    Console,
    Pretty,
    File,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub mode: Mode,
    pub clear_cache: bool,
    pub output: OutputKind,
    pub base_dir: PathBuf,
}

impl AppOptions {
    pub fn new(mode: Mode, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            clear_cache: false,
            output: OutputKind::Console,
            base_dir: base_dir.into(),
        }
    }

    pub fn dirs(&self) -> Dirs {
        Dirs::new(&self.base_dir)
    }
}

/// Every on-disk location the parser touches, rooted at one base directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dirs {
    pub cache: PathBuf,
    pub downloads: PathBuf,
    pub results: PathBuf,
    pub logs: PathBuf,
}

impl Dirs {
    pub fn new(base: &Path) -> Self {
        Self {
            cache: base.join(CACHE_DIR),
            downloads: base.join(DOWNLOADS_DIR),
            results: base.join(RESULTS_DIR),
            logs: base.join(LOG_DIR),
        }
    }
}
