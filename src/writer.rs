//! CSV output for joined rows.

use log::{debug, info};
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::rows::{Row, AUTHOR_COLUMNS, PLACE_COLUMNS, POST_COLUMNS};

/// Which optional column groups appear in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSet {
    pub author: bool,
    pub place: bool,
}

impl ColumnSet {
    /// Includes a column group when at least one row carries it.
    pub fn for_rows(rows: &[Row]) -> Self {
        ColumnSet {
            author: rows.iter().any(|r| r.author.is_some()),
            place: rows.iter().any(|r| r.place.is_some()),
        }
    }

    pub fn header(&self) -> Vec<&'static str> {
        let mut header = POST_COLUMNS.to_vec();
        if self.author {
            header.extend_from_slice(&AUTHOR_COLUMNS);
        }
        if self.place {
            header.extend_from_slice(&PLACE_COLUMNS);
        }
        header
    }

    /// Field values of `row` for this column set; missing groups are blank.
    pub fn record(&self, row: &Row) -> Vec<String> {
        let mut record = row.post.fields();
        if self.author {
            match &row.author {
                Some(author) => record.extend(author.fields()),
                None => record.extend(AUTHOR_COLUMNS.iter().map(|_| String::new())),
            }
        }
        if self.place {
            match &row.place {
                Some(place) => record.extend(place.fields()),
                None => record.extend(PLACE_COLUMNS.iter().map(|_| String::new())),
            }
        }
        record
    }
}

/// Writes rows as CSV (header line, one line per row, no index column) to any writer.
pub fn write_rows<W: Write>(rows: &[Row], out: W) -> Result<()> {
    let columns = ColumnSet::for_rows(rows);
    debug!("Writing CSV with columns: {:?}", columns.header());

    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(columns.header())?;
    for row in rows {
        writer.write_record(columns.record(row))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes rows to a UTF-8 CSV file at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `Error::Io` or `Error::Csv` if the file cannot be created or written.
pub fn write_csv(rows: &[Row], path: &Path) -> Result<()> {
    info!("Writing {} rows to {}", rows.len(), path.display());
    let file = std::fs::File::create(path)?;
    write_rows(rows, std::io::BufWriter::new(file))?;
    info!("Saved {} rows to {}", rows.len(), path.display());
    Ok(())
}
