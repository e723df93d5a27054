//! Export generated series to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts:
//! one row per `(task, method, iteration)`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::domain::Figure;
use crate::error::AppError;

pub const CSV_HEADER: &str = "task,method,color,iteration,mean,std";

/// Write every point of the figure to a CSV file.
pub fn write_figure_csv(path: &Path, figure: &Figure) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::runtime(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);

    write_csv(&mut out, figure)
        .and_then(|rows| out.flush().map(|()| rows))
        .map(|rows| info!(path = %path.display(), rows, "CSV export written"))
        .map_err(|e| AppError::runtime(format!("Failed to write export CSV '{}': {e}", path.display())))
}

/// Write the CSV body to any writer; returns the number of data rows.
pub fn write_csv<W: Write>(out: &mut W, figure: &Figure) -> std::io::Result<usize> {
    writeln!(out, "{CSV_HEADER}")?;

    let mut rows = 0;
    for panel in &figure.panels {
        for s in &panel.series {
            for (j, (m, sd)) in s.mean.iter().zip(s.std.iter()).enumerate() {
                writeln!(
                    out,
                    "{},{},{},{},{:.6},{:.6}",
                    csv_field(&panel.title),
                    csv_field(&s.method),
                    s.color.to_hex(),
                    j,
                    m,
                    sd
                )?;
                rows += 1;
            }
        }
    }
    Ok(rows)
}

/// Quote a field when it contains a delimiter, quote or newline.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
