use crate::constants::failure_patterns::{COMPILED_CATALOG, SUCCESS_INDICATORS};
use crate::services::file_extractor::extract_affected_files;
use crate::structs::detected_issue::DetectedIssue;

/// Classifies raw deployment log text against the failure catalog.
///
/// Total over all inputs: empty text maps to a single `no_logs` issue,
/// unrecognized text to `unknown_failure`, and recognized text to at most
/// one issue per catalog category (first matching signature wins; later
/// signatures in that category are skipped).
pub fn classify_logs(logs: &str) -> Vec<DetectedIssue> {
    if logs.trim().is_empty() {
        return vec![DetectedIssue::no_logs()];
    }

    // Lowercased copy for matching; extraction keeps the original case.
    let logs_lower = logs.to_lowercase();
    let mut issues = Vec::new();

    for entry in COMPILED_CATALOG.iter() {
        if entry.signatures.iter().any(|signature| signature.is_match(&logs_lower)) {
            issues.push(DetectedIssue {
                issue_type: entry.category.key.to_string(),
                severity: entry.category.severity,
                description: format!("Detected {} issue", entry.category.key.replace('_', " ")),
                remediation: entry.category.remediation.to_string(),
                affected_files: extract_affected_files(logs),
            });
        }
    }

    if issues.is_empty() {
        let has_success = SUCCESS_INDICATORS
            .iter()
            .any(|indicator| logs_lower.contains(indicator));

        if !has_success {
            issues.push(DetectedIssue::unknown_failure());
        }
    }

    issues
}
