//! Summary report: team counts per competition as CSV.
//!
//! RFC 4180 layout: quoted fields where needed, CRLF line endings.

use crate::error::Result;
use crate::storage::{SummaryRow, Warehouse};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;


pub const SUMMARY_HEADER: [&str; 2] = ["Competition", "Number of Teams"];

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer. Rows end in CRLF.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    write!(w, "\r\n")
}

/// Render the header plus one line per summary row.
pub fn write_summary_csv<W: Write>(mut w: W, rows: &[SummaryRow]) -> io::Result<()> {
    write_row(&mut w, &SUMMARY_HEADER[..])?;
    for row in rows {
        let count = row.num_teams.to_string();
        write_row(&mut w, &[row.competition.as_str(), count.as_str()][..])?;
    }
    w.flush()
}

/// Query the warehouse and write the summary to `path`, creating parent
/// directories as needed. Returns the number of data rows written.
pub fn write_summary(warehouse: &Warehouse, path: &Path) -> Result<usize> {
    let rows = warehouse.summary_rows()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    write_summary_csv(BufWriter::new(file), &rows)?;

    info!(path = %path.display(), rows = rows.len(), "summary written");
    Ok(rows.len())
}
