use crate::enums::severity::Severity;
use serde::Serialize;

/// One classified problem found in deployment logs. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedIssue {
    pub issue_type: String,
    pub severity: Severity,
    pub description: String,
    pub remediation: String,
    pub affected_files: Vec<String>,
}

impl DetectedIssue {
    /// Reserved category for empty or whitespace-only log input.
    pub fn no_logs() -> Self {
        Self {
            issue_type: "no_logs".to_string(),
            severity: Severity::Warning,
            description: "No deployment logs available".to_string(),
            remediation: "Check Railway dashboard or ensure proper authentication".to_string(),
            affected_files: Vec::new(),
        }
    }

    /// Reserved category for logs with no catalog match and no success phrase.
    pub fn unknown_failure() -> Self {
        Self {
            issue_type: "unknown_failure".to_string(),
            severity: Severity::Warning,
            description: "No clear success or failure indicators found".to_string(),
            remediation: "Review logs manually in Railway dashboard".to_string(),
            affected_files: Vec::new(),
        }
    }

    /// Reserved category for repositories without a matching Railway project.
    pub fn no_railway_project() -> Self {
        Self {
            issue_type: "no_railway_project".to_string(),
            severity: Severity::Info,
            description: "No matching Railway project found".to_string(),
            remediation: "Deploy this repository to Railway or check project naming".to_string(),
            affected_files: Vec::new(),
        }
    }

    /// Reserved category for an unexpected per-repository analysis failure.
    pub fn analysis_error(reason: &str) -> Self {
        Self {
            issue_type: "analysis_error".to_string(),
            severity: Severity::Warning,
            description: format!("Error during analysis: {}", reason),
            remediation: "Check repository access and try again".to_string(),
            affected_files: Vec::new(),
        }
    }
}
