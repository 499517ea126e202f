use async_trait::async_trait;
use deploylyzer_cli::enums::deployment_status::DeploymentStatus;
use deploylyzer_cli::enums::severity::Severity;
use deploylyzer_cli::errors::{AnalyzerError, AnalyzerResult};
use deploylyzer_cli::services::report_generator::generate_report;
use deploylyzer_cli::services::repository_analyzer::RepositoryAnalyzer;
use deploylyzer_cli::structs::github_repo::GithubRepo;
use deploylyzer_cli::structs::railway_project::RailwayProject;
use deploylyzer_cli::traits::deployment_data_source::DeploymentDataSource;

struct StubSource {
    logs: String,
}

#[async_trait]
impl DeploymentDataSource for StubSource {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn fetch_projects(&self) -> AnalyzerResult<Vec<RailwayProject>> {
        Ok(Vec::new())
    }

    async fn fetch_logs(&self, _project: &RailwayProject) -> AnalyzerResult<String> {
        Ok(self.logs.clone())
    }
}

/// Source whose log fetch always fails, to exercise transport degradation.
struct BrokenSource;

#[async_trait]
impl DeploymentDataSource for BrokenSource {
    fn name(&self) -> &'static str {
        "broken"
    }

    async fn fetch_projects(&self) -> AnalyzerResult<Vec<RailwayProject>> {
        Err(AnalyzerError::process_error("railway status --json", "command timed out"))
    }

    async fn fetch_logs(&self, _project: &RailwayProject) -> AnalyzerResult<String> {
        Err(AnalyzerError::process_error("railway logs", "command timed out"))
    }
}

fn repo(name: &str) -> GithubRepo {
    GithubRepo {
        name: name.to_string(),
        updated_at: None,
    }
}

fn project(name: &str) -> RailwayProject {
    RailwayProject {
        name: name.to_string(),
        id: Some("proj-1".to_string()),
        updated_at: Some("2026-08-01T12:00:00Z".to_string()),
    }
}

fn analyzer_with_logs(logs: &str) -> RepositoryAnalyzer {
    RepositoryAnalyzer::new(Box::new(StubSource { logs: logs.to_string() }))
}

#[tokio::test]
async fn repository_without_project_is_unknown() {
    let analyzer = analyzer_with_logs("irrelevant");
    let analysis = analyzer
        .analyze_repository(&repo("api-service"), &[])
        .await
        .expect("analysis");

    assert_eq!(analysis.status, DeploymentStatus::Unknown);
    assert_eq!(analysis.issues.len(), 1);
    assert_eq!(analysis.issues[0].issue_type, "no_railway_project");
    assert_eq!(analysis.issues[0].severity, Severity::Info);
    assert!(analysis.last_deployment.is_none());
}

#[tokio::test]
async fn failing_logs_produce_failed_status_with_both_issues() {
    let analyzer = analyzer_with_logs("Error: DATABASE_URL not found\nError: connection refused");
    let projects = [project("API-Service")];
    let analysis = analyzer
        .analyze_repository(&repo("api-service"), &projects)
        .await
        .expect("analysis");

    assert_eq!(analysis.status, DeploymentStatus::Failed);
    let issue_types: Vec<&str> = analysis.issues.iter().map(|i| i.issue_type.as_str()).collect();
    assert_eq!(issue_types, vec!["missing_env_vars", "database_connection"]);
    assert!(analysis.issues.iter().all(|i| i.severity == Severity::Critical));
    assert_eq!(analysis.last_deployment.as_deref(), Some("2026-08-01T12:00:00Z"));
}

#[tokio::test]
async fn healthy_logs_produce_success_with_no_issues() {
    let analyzer = analyzer_with_logs("Server started\nListening on port 3000");
    let projects = [project("web-app")];
    let analysis = analyzer
        .analyze_repository(&repo("web-app"), &projects)
        .await
        .expect("analysis");

    assert_eq!(analysis.status, DeploymentStatus::Success);
    assert!(analysis.issues.is_empty());
    assert_eq!(analysis.logs_preview, "Server started\nListening on port 3000");
}

#[tokio::test]
async fn log_fetch_failure_degrades_to_no_logs() {
    let analyzer = RepositoryAnalyzer::new(Box::new(BrokenSource));
    let projects = [project("web-app")];
    let analysis = analyzer
        .analyze_repository(&repo("web-app"), &projects)
        .await
        .expect("analysis");

    assert_eq!(analysis.issues.len(), 1);
    assert_eq!(analysis.issues[0].issue_type, "no_logs");
    assert_eq!(analysis.status, DeploymentStatus::Pending);
    assert!(analysis.logs_preview.is_empty());
}

#[tokio::test]
async fn long_logs_are_excerpted_in_the_result() {
    let logs = format!("Build failed\n{}", "x".repeat(600));
    let analyzer = analyzer_with_logs(&logs);
    let projects = [project("big-logs")];
    let analysis = analyzer
        .analyze_repository(&repo("big-logs"), &projects)
        .await
        .expect("analysis");

    assert_eq!(analysis.logs_preview.chars().count(), 503);
    assert!(analysis.logs_preview.ends_with("..."));
}

#[tokio::test]
async fn batch_report_summarizes_all_outcomes() {
    let projects = [project("api-service")];

    let failed = analyzer_with_logs("Build failed")
        .analyze_repository(&repo("api-service"), &projects)
        .await
        .expect("analysis");
    let unknown = analyzer_with_logs("")
        .analyze_repository(&repo("orphan"), &projects)
        .await
        .expect("analysis");

    let report = generate_report(&[failed, unknown]);
    assert!(report.contains("Total Repositories Analyzed: 2"));
    assert!(report.contains("  FAILED: 1"));
    assert!(report.contains("  UNKNOWN: 1"));
    assert!(report.contains("REPOSITORY: api-service"));
    assert!(report.contains("REPOSITORY: orphan"));
}
