use crate::config::constants::LOGS_PREVIEW_MAX_CHARS;
use crate::errors::AnalyzerResult;
use crate::services::log_classifier::classify_logs;
use crate::services::project_matcher::find_matching_project;
use crate::services::status_aggregator::aggregate_status;
use crate::structs::github_repo::GithubRepo;
use crate::structs::railway_project::RailwayProject;
use crate::structs::repo_analysis::RepoAnalysis;
use crate::traits::deployment_data_source::DeploymentDataSource;

pub struct RepositoryAnalyzer {
    source: Box<dyn DeploymentDataSource>,
}

impl RepositoryAnalyzer {
    pub fn new(source: Box<dyn DeploymentDataSource>) -> Self {
        Self { source }
    }

    /// Analyzes one repository against the Railway project list. Log fetch
    /// failures degrade to empty text (classified as `no_logs`); the `Err`
    /// arm of the returned result is the orchestrator's hook for turning an
    /// unexpected failure into a synthetic UNKNOWN result.
    pub async fn analyze_repository(
        &self,
        repo: &GithubRepo,
        projects: &[RailwayProject],
    ) -> AnalyzerResult<RepoAnalysis> {
        log::info!("🔍 Analyzing repository: {}", repo.name);

        let Some(project) = find_matching_project(&repo.name, projects) else {
            return Ok(RepoAnalysis::unmatched(&repo.name));
        };

        let logs = match self.source.fetch_logs(project).await {
            Ok(logs) => logs,
            Err(e) => {
                log::warn!("⚠️ Could not fetch logs for '{}': {}", project.name, e);
                String::new()
            }
        };

        let issues = classify_logs(&logs);
        let status = aggregate_status(&issues);

        Ok(RepoAnalysis {
            repo_name: repo.name.clone(),
            status,
            issues,
            last_deployment: project.updated_at.clone(),
            logs_preview: logs_preview(&logs),
        })
    }
}

/// Length-bounded excerpt of raw log text kept for display. Counted in
/// characters, not bytes, so multi-byte logs never split a codepoint.
pub fn logs_preview(logs: &str) -> String {
    if logs.chars().count() > LOGS_PREVIEW_MAX_CHARS {
        let truncated: String = logs.chars().take(LOGS_PREVIEW_MAX_CHARS).collect();
        format!("{}...", truncated)
    } else {
        logs.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::deployment_status::DeploymentStatus;
    use async_trait::async_trait;

    struct FixedLogsSource(&'static str);

    #[async_trait]
    impl DeploymentDataSource for FixedLogsSource {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn fetch_projects(&self) -> AnalyzerResult<Vec<RailwayProject>> {
            Ok(Vec::new())
        }

        async fn fetch_logs(&self, _project: &RailwayProject) -> AnalyzerResult<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn matched_project_supplies_timestamp_and_logs() {
        let analyzer = RepositoryAnalyzer::new(Box::new(FixedLogsSource("Build failed")));
        let projects = [RailwayProject {
            name: "demo".to_string(),
            id: None,
            updated_at: Some("2026-08-10T09:00:00Z".to_string()),
        }];
        let repo = GithubRepo {
            name: "Demo".to_string(),
            updated_at: None,
        };

        let analysis = tokio_test::block_on(analyzer.analyze_repository(&repo, &projects))
            .expect("analysis");

        assert_eq!(analysis.status, DeploymentStatus::Failed);
        assert_eq!(analysis.last_deployment.as_deref(), Some("2026-08-10T09:00:00Z"));
        assert_eq!(analysis.logs_preview, "Build failed");
    }

    #[test]
    fn short_logs_are_kept_verbatim() {
        assert_eq!(logs_preview("all good"), "all good");
    }

    #[test]
    fn long_logs_are_truncated_with_marker() {
        let logs = "x".repeat(600);
        let preview = logs_preview(&logs);
        assert_eq!(preview.chars().count(), LOGS_PREVIEW_MAX_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let logs = "é".repeat(501);
        let preview = logs_preview(&logs);
        assert_eq!(preview.chars().count(), LOGS_PREVIEW_MAX_CHARS + 3);
    }
}
