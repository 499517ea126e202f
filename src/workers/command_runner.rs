use crate::config::config_manager::ConfigManager;
use crate::config::constants::{GITHUB_TOKEN_ENV, GITHUB_USERNAME_ENV, RAILWAY_TOKEN_ENV};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::helpers::prompt::resolve_credential;
use crate::services::github_client::GithubClient;
use crate::services::railway::api_source::RailwayApiSource;
use crate::services::railway::cli_source::RailwayCliSource;
use crate::services::report_generator::generate_report;
use crate::services::report_writer::save_report;
use crate::services::repository_analyzer::RepositoryAnalyzer;
use crate::structs::repo_analysis::RepoAnalysis;
use crate::traits::deployment_data_source::DeploymentDataSource;
use std::path::Path;
use std::time::Instant;

struct Credentials {
    github_token: String,
    railway_token: Option<String>,
    github_username: String,
}

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run(&mut self) -> AnalyzerResult<()> {
        self.start_time = Some(Instant::now());

        log::info!("🚂 Railway Deployment Failure Analyzer");
        log::info!("{}", "=".repeat(40));

        let result = self.analyze_command().await;

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Analysis completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn analyze_command(&self) -> AnalyzerResult<()> {
        // Missing required credentials are the only fatal condition,
        // checked before any analysis begins.
        let credentials = self.collect_credentials()?;
        let source = self.select_deployment_source(&credentials);
        log::info!("🚉 Using Railway {} as deployment data source", source.name());

        let github = GithubClient::new(credentials.github_token.clone());
        let repos = github.fetch_user_repos(&credentials.github_username).await;
        if repos.is_empty() {
            log::warn!("⚠️ No repositories found or error occurred.");
            return Ok(());
        }

        let projects = match source.fetch_projects().await {
            Ok(projects) => projects,
            Err(e) => {
                log::warn!("⚠️ Error fetching Railway projects: {}", e);
                Vec::new()
            }
        };
        log::info!("✅ Found {} Railway projects", projects.len());

        let analyzer = RepositoryAnalyzer::new(source);
        let mut analyses: Vec<RepoAnalysis> = Vec::new();

        for repo in &repos {
            match analyzer.analyze_repository(repo, &projects).await {
                Ok(analysis) => analyses.push(analysis),
                Err(e) => {
                    // One subject's failure never aborts the batch.
                    log::error!("❌ Error analyzing {}: {}", repo.name, e);
                    analyses.push(RepoAnalysis::analysis_failure(&repo.name, &e.to_string()));
                }
            }
        }

        let report = generate_report(&analyses);
        println!("\n{}", report);

        match save_report(&report, Path::new(".")) {
            Ok(path) => log::info!("💾 Report saved to: {}", path.display()),
            Err(e) => log::error!("❌ Failed to save report: {}", e),
        }

        Ok(())
    }

    fn collect_credentials(&self) -> AnalyzerResult<Credentials> {
        let config = match ConfigManager::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                return Err(e);
            }
        };

        let github_token = resolve_credential(
            config.github_token,
            GITHUB_TOKEN_ENV,
            "Enter your GitHub Personal Access Token",
        )?;
        if github_token.is_empty() {
            return Err(AnalyzerError::missing_credential(
                "GitHub token",
                "Create a Personal Access Token at https://github.com/settings/tokens",
            ));
        }

        let railway_token = resolve_credential(
            config.railway_token,
            RAILWAY_TOKEN_ENV,
            "Enter your Railway API Token (optional, press Enter to skip)",
        )?;
        let railway_token = if railway_token.is_empty() {
            log::info!("ℹ️ No Railway token provided. Will attempt to use the Railway CLI.");
            None
        } else {
            Some(railway_token)
        };

        let github_username = resolve_credential(
            config.github_username,
            GITHUB_USERNAME_ENV,
            "Enter your GitHub username",
        )?;
        if github_username.is_empty() {
            return Err(AnalyzerError::missing_credential(
                "GitHub username",
                "The analyzer lists repositories owned by this user",
            ));
        }

        Ok(Credentials {
            github_token,
            railway_token,
            github_username,
        })
    }

    /// Capability selection happens once, here: API when a token is
    /// present, CLI otherwise. Callers only ever see the trait.
    fn select_deployment_source(&self, credentials: &Credentials) -> Box<dyn DeploymentDataSource> {
        match &credentials.railway_token {
            Some(token) => Box::new(RailwayApiSource::new(token.clone())),
            None => Box::new(RailwayCliSource::new()),
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
