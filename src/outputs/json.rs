//! JSON export of aggregated job records.
//!
//! Serializes the records as one pretty-printed array using the same field
//! names as the CSV header, for scripts that want structured output instead
//! of a spreadsheet.

use crate::models::JobRecord;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Write job records as a pretty-printed JSON array at `path`.
///
/// # Arguments
///
/// * `jobs` - The aggregated records, already in display order
/// * `path` - Destination file, overwritten if it exists
///
/// # Returns
///
/// `Ok(())` on success, or an error if serialization or the write fails.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn write_json(jobs: &[JobRecord], path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(jobs)?;
    fs::write(path, json).await?;
    info!(%path, count = jobs.len(), "Wrote JSON export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobSource;

    fn jobs() -> Vec<JobRecord> {
        vec![JobRecord {
            title: "Voice Engineer".to_string(),
            company: "Acme".to_string(),
            summary: "SIP trunking".to_string(),
            link: "https://www.indeed.com/rc/1".to_string(),
            source: JobSource::Indeed,
        }]
    }

    #[tokio::test]
    async fn test_write_json_round_trips() {
        let path = std::env::temp_dir().join("telejobs_write_json_test.json");
        let path = path.to_string_lossy().into_owned();

        write_json(&jobs(), &path).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<JobRecord> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, jobs());
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_write_json_uses_display_field_names() {
        let path = std::env::temp_dir().join("telejobs_json_fields_test.json");
        let path = path.to_string_lossy().into_owned();

        write_json(&jobs(), &path).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"Title\""));
        assert!(contents.contains("\"Source\": \"Indeed\""));
        let _ = std::fs::remove_file(&path);
    }
}
