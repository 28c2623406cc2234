// src/csv.rs
// Unix-dialect CSV: every field double-quoted, quotes doubled, "\n" line ends.
use std::io::{ self, Write };

pub const SEP: char = ',';

/// Write a single row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
    }
    w.write_all(b"\n")
}

/// Write every row, in order.
pub fn write_rows<'a, W, I>(mut w: W, rows: I, sep: char) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a [String]>,
{
    for row in rows {
        write_row(&mut w, row, sep)?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_everything_and_doubles_quotes() {
        let mut buf = Vec::new();
        write_row(&mut buf, &row!["Editor, Author", "say \"hi\"", 3], SEP).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"Editor, Author\",\"say \"\"hi\"\"\",\"3\"\n");
    }

    #[test]
    fn empty_row_is_just_a_newline() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[], SEP).unwrap();
        assert_eq!(buf, b"\n");
    }
}
