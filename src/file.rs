// src/file.rs

use std::{
    fs::{ self, File },
    io::{ self, BufWriter },
    path::{ Path, PathBuf },
};

use chrono::{ DateTime, Local };

use crate::config::consts::FILE_DT_FORMAT;
use crate::config::options::Mode;
use crate::csv::{ write_rows, SEP };
use crate::store::DataSet;

/// Create `dir` (and parents) unless it already exists.
pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// `<mode>_<YYYY-MM-DD_HH-MM-SS>.csv`
pub fn results_file_name(mode: Mode, at: &DateTime<Local>) -> String {
    format!("{}_{}.csv", mode.as_str(), at.format(FILE_DT_FORMAT))
}

/// Write `data` as CSV to `<dir>/<mode>_<timestamp>.csv`. Returns the path written.
pub fn write_results(
    dir: &Path,
    mode: Mode,
    at: &DateTime<Local>,
    data: &DataSet,
) -> io::Result<PathBuf> {
    ensure_directory(dir)?;
    let path = dir.join(results_file_name(mode, at));
    let out = BufWriter::new(File::create(&path)?);
    write_rows(out, data.lines(), SEP)?;
    Ok(path)
}
