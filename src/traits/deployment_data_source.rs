use crate::errors::AnalyzerResult;
use crate::structs::railway_project::RailwayProject;
use async_trait::async_trait;

/// Source of Railway project records and deployment logs. Picked once at
/// startup: the GraphQL API when a Railway token is present, the `railway`
/// CLI otherwise. Callers treat fetch failures as degraded data (empty
/// list, empty log text), never as fatal.
#[async_trait]
pub trait DeploymentDataSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch_projects(&self) -> AnalyzerResult<Vec<RailwayProject>>;

    /// Empty string means "no logs available", not an error.
    async fn fetch_logs(&self, project: &RailwayProject) -> AnalyzerResult<String>;
}
