// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use indicatif::{ ProgressBar, ProgressStyle };
use tracing::{ error, info };

use crate::config::options::{ AppOptions, Mode, OutputKind };
use crate::core::CachedSession;
use crate::error::{ Result, ScrapeError };
use crate::progress::Progress;
use crate::runner;
use crate::store::ResponseCache;

#[derive(Parser, Debug)]
#[command(name = "pydocs_scrape", version, about = "Python documentation parser")]
pub struct Cli {
    /// Parser mode
    #[arg(value_enum)]
    pub mode: Mode,

    /// Clear the HTTP response cache before running
    #[arg(short = 'c', long)]
    pub clear_cache: bool,

    /// Extra output: a formatted table or a CSV file
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputKind>,
}

impl Cli {
    pub fn into_options(self, base_dir: impl Into<PathBuf>) -> AppOptions {
        AppOptions {
            mode: self.mode,
            clear_cache: self.clear_cache,
            output: self.output.unwrap_or_default(),
            base_dir: base_dir.into(),
        }
    }
}

/// Terminal progress: one bar per loop, diagnostics routed to the log.
#[derive(Default)]
pub struct BarProgress {
    bar: Option<ProgressBar>,
}

impl Progress for BarProgress {
    fn begin(&mut self, label: &str, total: usize) {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_message(s!(label));
        self.bar = Some(bar);
    }

    fn log(&mut self, msg: &str) {
        match &self.bar {
            Some(bar) => bar.suspend(|| info!("{msg}")),
            None => info!("{msg}"),
        }
    }

    fn item_done(&mut self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Run one parser invocation. A failure is logged here and does not propagate:
/// the run always ends with "Parser finished".
pub fn run(opts: &AppOptions) {
    info!("Parser started");
    info!(
        "Command line arguments: mode={}, clear_cache={}, output={:?}",
        opts.mode, opts.clear_cache, opts.output
    );

    let mut progress = BarProgress::default();
    if let Err(e) = execute(opts, &mut progress) {
        progress.finish();
        error!("Failure while running mode {}: {e}", opts.mode);
    }
    info!("Parser finished");
}

fn execute(opts: &AppOptions, progress: &mut dyn Progress) -> Result<()> {
    let cache = ResponseCache::new(opts.dirs().cache);
    if opts.clear_cache {
        cache
            .clear()
            .map_err(|source| ScrapeError::Io { path: cache.dir().to_path_buf(), source })?;
        info!("Response cache cleared");
    }
    let session = CachedSession::new(cache)?;
    runner::run(opts, &session, progress)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_console_output() {
        let opts = Cli::try_parse_from(["pydocs_scrape", "whats-new"]).unwrap().into_options("/tmp/p");
        assert_eq!(opts, AppOptions::new(Mode::WhatsNew, "/tmp/p"));
        assert_eq!(opts.output, OutputKind::Console);
    }

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from(["pydocs_scrape", "pep", "-c", "-o", "file"]).unwrap();
        assert_eq!(cli.mode, Mode::Pep);
        assert!(cli.clear_cache);
        assert_eq!(cli.output, Some(OutputKind::File));
    }

    #[test]
    fn long_flags() {
        let cli = Cli::try_parse_from(["pydocs_scrape", "latest-versions", "--output", "pretty"]).unwrap();
        assert_eq!(cli.mode, Mode::LatestVersions);
        assert!(!cli.clear_cache);
        assert_eq!(cli.output, Some(OutputKind::Pretty));
    }

    #[test]
    fn progress_without_a_bar_is_harmless() {
        let mut progress = BarProgress::default();
        progress.item_done();
        progress.log("nothing running");
        progress.finish();
        progress.begin("Downloads", 2);
        progress.item_done();
        progress.finish();
    }
}
