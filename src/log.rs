// src/log.rs
//! Logging setup.
//!
//! Lines look like `16.10.2026 14:03:12 - [INFO] - Parser started` and go to
//! stderr and to `logs/parser.log`, which rotates at ~1 MB keeping 5 backups.
//! Nothing is installed globally: `Logger` owns its dispatch and the run
//! executes inside `Logger::in_scope`.

use std::fmt;
use std::fs::{ self, File, OpenOptions };
use std::io::{ self, Write };
use std::path::{ Path, PathBuf };

use chrono::Local;
use tracing::{ Dispatch, Event, Subscriber };
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{ FmtContext, FormatEvent, FormatFields };
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{ EnvFilter, Registry };

use crate::config::consts::{ LOG_BACKUPS, LOG_DEFAULT_FILTER, LOG_DT_FORMAT, LOG_FILE, LOG_MAX_BYTES };
use crate::file::ensure_directory;

/// `timestamp - [LEVEL] - message`
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let level = event.metadata().level();
        write!(writer, "{} - [{}] - ", Local::now().format(LOG_DT_FORMAT), level)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/* ---------------- Size-rotated log file ---------------- */

/// Append-only file that moves itself to `<name>.1` once it would grow past
/// `max_bytes`, shifting older backups up and dropping the oldest.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: File,
    written: u64,
}

impl RotatingFile {
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, backups: usize) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        let file = open_append(&path)?;
        let written = file.metadata()?.len();
        Ok(Self { path, max_bytes, backups, file, written })
    }

    pub fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.backups == 0 {
            self.file = File::create(&self.path)?;
        } else {
            let _ = fs::remove_file(self.backup_path(self.backups));
            for n in (1..self.backups).rev() {
                let from = self.backup_path(n);
                if from.exists() {
                    fs::rename(&from, self.backup_path(n + 1))?;
                }
            }
            fs::rename(&self.path, self.backup_path(1))?;
            self.file = open_append(&self.path)?;
        }
        self.written = 0;
        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/* ---------------- Logger ---------------- */

#[derive(Clone, Debug)]
pub struct LogConfig {
    pub dir: PathBuf,
    pub file_name: String,
    pub max_bytes: u64,
    pub backups: usize,
    /// Also write to stderr.
    pub console: bool,
}

impl LogConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_name: s!(LOG_FILE),
            max_bytes: LOG_MAX_BYTES,
            backups: LOG_BACKUPS,
            console: true,
        }
    }
}

pub struct Logger {
    dispatch: Dispatch,
    // flushes the file writer on drop
    _guard: WorkerGuard,
}

impl Logger {
    pub fn new(config: &LogConfig) -> io::Result<Self> {
        let file = RotatingFile::open(
            config.dir.join(&config.file_name),
            config.max_bytes,
            config.backups,
        )?;
        let (file_writer, guard) = tracing_appender::non_blocking(file);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(LOG_DEFAULT_FILTER));

        let console = config.console.then(|| {
            tracing_subscriber::fmt::layer()
                .event_format(LineFormat)
                .with_writer(io::stderr)
        });
        let file_layer = tracing_subscriber::fmt::layer()
            .event_format(LineFormat)
            .with_writer(file_writer)
            .with_ansi(false);

        let subscriber = Registry::default().with(filter).with(console).with(file_layer);
        Ok(Self { dispatch: Dispatch::new(subscriber), _guard: guard })
    }

    /// Run `f` with this logger receiving every `tracing` event.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotates_and_keeps_a_bounded_number_of_backups() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("logs").join("parser.log");
        let mut file = RotatingFile::open(&path, 10, 2).unwrap();

        for line in ["aaaaaaaa\n", "bbbbbbbb\n", "cccccccc\n", "dddddddd\n"] {
            file.write_all(line.as_bytes()).unwrap();
        }
        file.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "dddddddd\n");
        assert_eq!(fs::read_to_string(file.backup_path(1)).unwrap(), "cccccccc\n");
        assert_eq!(fs::read_to_string(file.backup_path(2)).unwrap(), "bbbbbbbb\n");
        assert!(!file.backup_path(3).exists());
    }

    #[test]
    fn reopening_continues_the_size_count() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("parser.log");
        fs::write(&path, "0123456789").unwrap();

        let mut file = RotatingFile::open(&path, 12, 1).unwrap();
        file.write_all(b"abc").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "abc");
        assert_eq!(fs::read_to_string(file.backup_path(1)).unwrap(), "0123456789");
    }

    #[test]
    fn logger_writes_formatted_lines_to_file() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = LogConfig::new(tmp.path());
        config.console = false;
        {
            let logger = Logger::new(&config).unwrap();
            logger.in_scope(|| tracing::info!("Parser started"));
        } // guard flushes here
        let text = fs::read_to_string(tmp.path().join(LOG_FILE)).unwrap();
        let line = text.lines().next().unwrap();
        assert!(line.ends_with(" - [INFO] - Parser started"), "{line}");
    }
}
