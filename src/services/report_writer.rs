use crate::config::constants::REPORT_FILE_PREFIX;
use crate::errors::AnalyzerResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the report once, to one new file named with a
/// second-resolution timestamp. Returns the path written.
pub fn save_report(report: &str, directory: &Path) -> AnalyzerResult<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("{}_{}.txt", REPORT_FILE_PREFIX, timestamp);
    let path = directory.join(filename);

    fs::write(&path, report)?;
    Ok(path)
}
