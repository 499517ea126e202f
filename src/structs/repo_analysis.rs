use crate::enums::deployment_status::DeploymentStatus;
use crate::structs::detected_issue::DetectedIssue;

/// Analysis outcome for one repository/project pair.
#[derive(Debug, Clone)]
pub struct RepoAnalysis {
    pub repo_name: String,
    pub status: DeploymentStatus,
    pub issues: Vec<DetectedIssue>,
    pub last_deployment: Option<String>,
    pub logs_preview: String,
}

impl RepoAnalysis {
    /// Result for a repository with no matching Railway project.
    /// The classifier is never invoked for these.
    pub fn unmatched(repo_name: &str) -> Self {
        Self {
            repo_name: repo_name.to_string(),
            status: DeploymentStatus::Unknown,
            issues: vec![DetectedIssue::no_railway_project()],
            last_deployment: None,
            logs_preview: "No Railway project found".to_string(),
        }
    }

    /// Synthetic result for a repository whose analysis failed unexpectedly,
    /// so one bad subject never aborts the batch.
    pub fn analysis_failure(repo_name: &str, reason: &str) -> Self {
        Self {
            repo_name: repo_name.to_string(),
            status: DeploymentStatus::Unknown,
            issues: vec![DetectedIssue::analysis_error(reason)],
            last_deployment: None,
            logs_preview: String::new(),
        }
    }
}
