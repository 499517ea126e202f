use crate::config::constants::{timeout_duration_secs, RAILWAY_API_TIMEOUT_SECS, RAILWAY_GRAPHQL_URL};
use crate::errors::AnalyzerResult;
use crate::structs::railway_project::RailwayProject;
use crate::traits::deployment_data_source::DeploymentDataSource;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const PROJECTS_QUERY: &str = r#"
query {
    me {
        projects {
            id
            name
            createdAt
            updatedAt
        }
    }
}
"#;

const DEPLOYMENTS_QUERY: &str = r#"
query($projectId: String!) {
    project(id: $projectId) {
        deployments {
            id
            status
            createdAt
            logs
        }
    }
}
"#;

/// Railway GraphQL API source, used when a Railway token is available.
pub struct RailwayApiSource {
    client: Client,
    token: String,
}

impl RailwayApiSource {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::new(),
            token,
        }
    }

    async fn graphql(&self, body: Value, timeout: Duration) -> AnalyzerResult<Value> {
        let response = self
            .client
            .post(RAILWAY_GRAPHQL_URL)
            .bearer_auth(&self.token)
            .header("Content-Type", "application/json")
            .timeout(timeout)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[async_trait]
impl DeploymentDataSource for RailwayApiSource {
    fn name(&self) -> &'static str {
        "API"
    }

    async fn fetch_projects(&self) -> AnalyzerResult<Vec<RailwayProject>> {
        let body = json!({ "query": PROJECTS_QUERY });
        let data = self
            .graphql(body, timeout_duration_secs(RAILWAY_API_TIMEOUT_SECS))
            .await?;

        let projects = data
            .pointer("/data/me/projects")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));

        Ok(serde_json::from_value(projects)?)
    }

    async fn fetch_logs(&self, project: &RailwayProject) -> AnalyzerResult<String> {
        let Some(project_id) = project.id.as_deref() else {
            log::warn!("⚠️ Project '{}' has no id, cannot query deployment logs", project.name);
            return Ok(String::new());
        };

        let body = json!({
            "query": DEPLOYMENTS_QUERY,
            "variables": { "projectId": project_id },
        });
        let data = self
            .graphql(body, timeout_duration_secs(RAILWAY_API_TIMEOUT_SECS))
            .await?;

        // Deployments are returned newest-first; the latest one carries the
        // logs we classify.
        let logs = data
            .pointer("/data/project/deployments/0/logs")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        Ok(logs)
    }
}
