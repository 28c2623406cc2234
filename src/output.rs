// src/output.rs
//! Rendering a mode's `DataSet`: plain console lines, a bordered table, or a
//! CSV file under the results directory. Rendering never touches the data.

use std::io::{ self, Write };
use std::path::PathBuf;

use chrono::Local;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::config::options::{ AppOptions, OutputKind };
use crate::error::{ Result, ScrapeError };
use crate::file::write_results;
use crate::store::DataSet;

/// Render `data` the way `opts.output` asks. Returns the file written, if any.
pub fn render(data: &DataSet, opts: &AppOptions) -> Result<Option<PathBuf>> {
    let stdout_err = |source| ScrapeError::Io { path: PathBuf::from("<stdout>"), source };
    match opts.output {
        OutputKind::Console => {
            write_console(io::stdout().lock(), data).map_err(stdout_err)?;
            Ok(None)
        }
        OutputKind::Pretty => {
            write_pretty(io::stdout().lock(), data).map_err(stdout_err)?;
            Ok(None)
        }
        OutputKind::File => {
            let dir = opts.dirs().results;
            let path = write_results(&dir, opts.mode, &Local::now(), data)
                .map_err(|source| ScrapeError::Io { path: dir.clone(), source })?;
            info!("Results saved to {}", path.display());
            Ok(Some(path))
        }
    }
}

/// One line per row, cells separated by a single space.
pub fn write_console<W: Write>(mut w: W, data: &DataSet) -> io::Result<()> {
    for line in data.lines() {
        writeln!(w, "{}", line.join(" "))?;
    }
    w.flush()
}

/// Left-aligned table with `+---+` borders and a rule under the header.
pub fn write_pretty<W: Write>(mut w: W, data: &DataSet) -> io::Result<()> {
    let widths: Vec<usize> = (0..data.width())
        .map(|i| {
            data.lines()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.as_str().width())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = {
        let segments: Vec<String> = widths.iter().map(|n| "-".repeat(n + 2)).collect();
        format!("+{}+", segments.join("+"))
    };

    writeln!(w, "{rule}")?;
    write_cells(&mut w, &data.headers, &widths)?;
    writeln!(w, "{rule}")?;
    for row in &data.rows {
        write_cells(&mut w, row, &widths)?;
    }
    writeln!(w, "{rule}")?;
    w.flush()
}

fn write_cells<W: Write>(w: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
    write!(w, "|")?;
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width.saturating_sub(cell.as_str().width());
        write!(w, " {cell}{} |", " ".repeat(pad))?;
    }
    writeln!(w)
}
