//! File I/O for caching the pattern database between runs.
//!
//! Text format of `data-<cells>-v<version>`:
//! - line 1: the row table, values separated by single spaces, in index order
//! - line 2: the column table, same layout
//!
//! There is no header; the expected entry count is derived from the board
//! size by the caller. The format version is part of the file name so a
//! cache written with a different table layout is never read back.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Bumped whenever the meaning or layout of table entries changes.
pub const FORMAT_VERSION: u32 = 1;

/// File name of the cache for a board with `cells` cells.
pub fn cache_file_name(cells: usize) -> String {
    format!("data-{}-v{}", cells, FORMAT_VERSION)
}

/// Writes both tables to `path`, replacing any existing file.
pub fn save(path: &Path, rows: &[u8], cols: &[u8]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_table(&mut file, rows)?;
    write_table(&mut file, cols)?;
    file.flush()
}

fn write_table(out: &mut impl Write, table: &[u8]) -> std::io::Result<()> {
    for (i, value) in table.iter().enumerate() {
        if i > 0 {
            out.write_all(b" ")?;
        }
        write!(out, "{}", value)?;
    }
    out.write_all(b"\n")
}

/// Reads both tables back, each expected to hold `entries` values.
///
/// Returns `None` if the file is missing or does not hold exactly
/// `2 * entries` integers in range.
pub fn load(path: &Path, entries: usize) -> Option<(Vec<u8>, Vec<u8>)> {
    let contents = fs::read_to_string(path).ok()?;

    let mut values = Vec::with_capacity(2 * entries);
    for token in contents.split_ascii_whitespace() {
        values.push(token.parse::<u8>().ok()?);
        if values.len() > 2 * entries {
            return None;
        }
    }
    if values.len() != 2 * entries {
        return None;
    }

    let cols = values.split_off(entries);
    Some((values, cols))
}
