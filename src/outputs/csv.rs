//! CSV export of aggregated job records.
//!
//! The export mirrors the table column-for-column with a fixed header of
//! `Title,Company,Summary,Link,Source` and no index column, so downstream
//! spreadsheets can re-import it without cleanup. Quoting is left to the
//! `csv` crate's defaults.

use crate::models::JobRecord;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize job records to CSV; the header row comes from the record
/// fields, so it appears once before the first record.
pub fn to_csv_string(jobs: &[JobRecord]) -> Result<String, Box<dyn Error>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for job in jobs {
        writer.serialize(job)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Write job records to a CSV file at `path`.
///
/// # Arguments
///
/// * `jobs` - The aggregated records, already in display order
/// * `path` - Destination file, overwritten if it exists
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn write_csv(jobs: &[JobRecord], path: &str) -> Result<(), Box<dyn Error>> {
    let csv = to_csv_string(jobs)?;
    fs::write(path, csv).await?;
    info!(%path, count = jobs.len(), "Wrote CSV export");
    Ok(())
}
