//! CSV export of forecast results.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Column header for forecast CSV export.
const HEADER: [&str; 2] = ["step", "forecast"];

/// Exports a forecast to a CSV file at the given path.
///
/// Writes a header row followed by one row per forecast step, numbered from 1.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(forecast: &[f64], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(forecast, buf)
}

/// Writes a forecast as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(forecast: &[f64], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER)?;
    for (i, value) in forecast.iter().enumerate() {
        wtr.write_record(&[(i + 1).to_string(), value.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
