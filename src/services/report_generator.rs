use crate::enums::deployment_status::DeploymentStatus;
use crate::enums::severity::Severity;
use crate::structs::repo_analysis::RepoAnalysis;

/// Renders the full analysis report. Purely a formatting function of the
/// completed result list; persistence is the report writer's concern.
pub fn generate_report(analyses: &[RepoAnalysis]) -> String {
    let mut report: Vec<String> = Vec::new();

    report.push("=".repeat(80));
    report.push("RAILWAY DEPLOYMENT FAILURE ANALYSIS REPORT".to_string());
    report.push("=".repeat(80));
    report.push(format!("Generated: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S")));
    report.push(format!("Total Repositories Analyzed: {}", analyses.len()));
    report.push(String::new());

    let mut critical_issues = 0;
    let mut warning_issues = 0;
    for analysis in analyses {
        for issue in &analysis.issues {
            match issue.severity {
                Severity::Critical => critical_issues += 1,
                Severity::Warning => warning_issues += 1,
                Severity::Info => {}
            }
        }
    }

    report.push("SUMMARY:".to_string());
    report.push("-".repeat(40));
    for status in DeploymentStatus::all() {
        let count = analyses.iter().filter(|a| a.status == *status).count();
        if count > 0 {
            report.push(format!("  {}: {}", status, count));
        }
    }
    report.push(format!("  Critical Issues: {}", critical_issues));
    report.push(format!("  Warning Issues: {}", warning_issues));
    report.push(String::new());

    for analysis in analyses {
        report.push(format!("REPOSITORY: {}", analysis.repo_name));
        report.push("-".repeat(50));
        report.push(format!("Status: {}", analysis.status));

        if let Some(last_deployment) = &analysis.last_deployment {
            report.push(format!("Last Deployment: {}", last_deployment));
        }

        if analysis.issues.is_empty() {
            report.push("No issues detected - deployment appears successful!".to_string());
        } else {
            report.push("\nIssues Found:".to_string());
            for (i, issue) in analysis.issues.iter().enumerate() {
                report.push(format!("  {}. [{}] {}", i + 1, issue.severity, issue.description));
                report.push(format!("     Remediation: {}", issue.remediation));
                if !issue.affected_files.is_empty() {
                    report.push(format!("     Affected Files: {}", issue.affected_files.join(", ")));
                }
            }
        }

        if !analysis.logs_preview.is_empty() {
            report.push("\nLogs Preview:".to_string());
            report.push("```".to_string());
            report.push(analysis.logs_preview.clone());
            report.push("```".to_string());
        }

        report.push(format!("\n{}\n", "=".repeat(80)));
    }

    report.join("\n")
}
