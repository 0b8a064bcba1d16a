use crate::types::ProbeResult;
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Column order of the report, matching the `ProbeResult` field order.
pub const CSV_HEADERS: [&str; 8] = [
    "domain",
    "tried_url",
    "final_url",
    "status_code",
    "alive",
    "powered_by_boatsgroup",
    "status_label",
    "error",
];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),
}

pub fn write_csv<W: Write>(writer: W, results: &[ProbeResult]) -> Result<(), ReportError> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;

    for result in results {
        wtr.write_record([
            &result.domain,
            &result.tried_url,
            &result.final_url,
            &result.status_code_text(),
            &result.alive.to_string(),
            &result.powered_by_boatsgroup.to_string(),
            &result.status_label.to_string(),
            &result.error,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the report to `path`, overwriting any existing file.
pub fn write_csv_file(path: &Path, results: &[ProbeResult]) -> Result<(), ReportError> {
    let file = File::create(path)?;
    write_csv(file, results)?;
    info!(rows = results.len(), path = %path.display(), "report written");
    Ok(())
}
