use crate::config::constants::{
    timeout_duration_secs, RAILWAY_CLI_LOGS_TIMEOUT_SECS, RAILWAY_CLI_STATUS_TIMEOUT_SECS,
    RAILWAY_LOGS_TAIL_LINES,
};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::railway_project::RailwayProject;
use crate::traits::deployment_data_source::DeploymentDataSource;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Railway CLI source, used when no Railway token was provided. Every
/// invocation is bounded by a timeout; a command that overruns it is
/// treated as failed.
#[derive(Default)]
pub struct RailwayCliSource;

impl RailwayCliSource {
    pub fn new() -> Self {
        Self
    }

    async fn run_railway(&self, args: &[&str], wait: Duration) -> AnalyzerResult<std::process::Output> {
        let command_line = format!("railway {}", args.join(" "));

        let output = timeout(wait, Command::new("railway").args(args).output())
            .await
            .map_err(|_| AnalyzerError::process_error(&command_line, "command timed out"))?
            .map_err(|e| AnalyzerError::process_error(&command_line, &e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AnalyzerError::process_error(&command_line, stderr.trim()));
        }

        Ok(output)
    }
}

#[async_trait]
impl DeploymentDataSource for RailwayCliSource {
    fn name(&self) -> &'static str {
        "CLI"
    }

    async fn fetch_projects(&self) -> AnalyzerResult<Vec<RailwayProject>> {
        let output = self
            .run_railway(
                &["status", "--json"],
                timeout_duration_secs(RAILWAY_CLI_STATUS_TIMEOUT_SECS),
            )
            .await?;

        let data: Value = serde_json::from_slice(&output.stdout)?;
        let projects = data
            .get("projects")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));

        Ok(serde_json::from_value(projects)?)
    }

    async fn fetch_logs(&self, project: &RailwayProject) -> AnalyzerResult<String> {
        let tail = RAILWAY_LOGS_TAIL_LINES.to_string();
        let wait = timeout_duration_secs(RAILWAY_CLI_LOGS_TIMEOUT_SECS);

        match self
            .run_railway(&["logs", "--project", &project.name, "--tail", &tail], wait)
            .await
        {
            Ok(output) => Ok(String::from_utf8_lossy(&output.stdout).to_string()),
            Err(e) => {
                // Some CLI versions only resolve the linked project.
                log::warn!("⚠️ railway logs failed for '{}': {}, falling back to linked project", project.name, e);
                let output = self.run_railway(&["logs", "--tail", &tail], wait).await?;
                Ok(String::from_utf8_lossy(&output.stdout).to_string())
            }
        }
    }
}
