//! CSV import of dated observations.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::series::SeriesPoint;

/// Failure while reading a series file.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("cannot open \"{}\": {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid series CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Data row `row` (1-based, header excluded) holds NaN or an infinity.
    #[error("non-finite value in row {row} (date {date:?})")]
    NonFinite { row: usize, date: String },
}

/// Reads a `date,value` CSV file with a header row.
///
/// # Errors
///
/// Returns a `SeriesError` if the file cannot be opened or a row does not
/// parse.
pub fn read_series_csv(path: &Path) -> Result<Vec<SeriesPoint>, SeriesError> {
    let file = File::open(path).map_err(|source| SeriesError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_series(file)
}

/// Reads `date,value` rows from any reader.
///
/// Rows are returned in file order. Surrounding whitespace in fields is
/// ignored.
///
/// # Errors
///
/// Returns `SeriesError::Csv` on a malformed row or non-numeric value and
/// `SeriesError::NonFinite` on `NaN` or `inf`.
pub fn read_series(reader: impl Read) -> Result<Vec<SeriesPoint>, SeriesError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    for (i, row) in rdr.deserialize().enumerate() {
        let point: SeriesPoint = row?;
        if !point.value.is_finite() {
            return Err(SeriesError::NonFinite {
                row: i + 1,
                date: point.date,
            });
        }
        points.push(point);
    }
    Ok(points)
}
