use crate::enums::deployment_status::DeploymentStatus;
use crate::enums::severity::Severity;
use crate::structs::detected_issue::DetectedIssue;

/// Reduces a subject's issue list to one health verdict. Pure function of
/// the issues; `Unknown` is never produced here, it is assigned directly
/// when a repository has no matching Railway project.
pub fn aggregate_status(issues: &[DetectedIssue]) -> DeploymentStatus {
    if issues.is_empty() || issues.iter().all(|issue| issue.severity == Severity::Info) {
        DeploymentStatus::Success
    } else if issues.iter().any(|issue| issue.severity == Severity::Critical) {
        DeploymentStatus::Failed
    } else {
        DeploymentStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue_with(severity: Severity) -> DetectedIssue {
        DetectedIssue {
            issue_type: "test".to_string(),
            severity,
            description: "test".to_string(),
            remediation: "test".to_string(),
            affected_files: Vec::new(),
        }
    }

    #[test]
    fn no_issues_is_success() {
        assert_eq!(aggregate_status(&[]), DeploymentStatus::Success);
    }

    #[test]
    fn only_info_issues_is_success() {
        let issues = [issue_with(Severity::Info)];
        assert_eq!(aggregate_status(&issues), DeploymentStatus::Success);
    }

    #[test]
    fn warning_without_critical_is_pending() {
        let issues = [issue_with(Severity::Warning)];
        assert_eq!(aggregate_status(&issues), DeploymentStatus::Pending);
    }

    #[test]
    fn any_critical_is_failed() {
        let issues = [issue_with(Severity::Critical), issue_with(Severity::Info)];
        assert_eq!(aggregate_status(&issues), DeploymentStatus::Failed);
    }

    #[test]
    fn warning_plus_info_is_pending() {
        let issues = [issue_with(Severity::Warning), issue_with(Severity::Info)];
        assert_eq!(aggregate_status(&issues), DeploymentStatus::Pending);
    }
}
