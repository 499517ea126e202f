use std::time::Duration;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const RAILWAY_GRAPHQL_URL: &str = "https://backboard.railway.app/graphql/v1";

pub const GITHUB_PAGE_SIZE: u32 = 100;
// Stays clear of GitHub rate limits on very large accounts
pub const GITHUB_MAX_REPOS: usize = 1000;

pub const RAILWAY_API_TIMEOUT_SECS: u64 = 30;
pub const RAILWAY_CLI_STATUS_TIMEOUT_SECS: u64 = 30;
pub const RAILWAY_CLI_LOGS_TIMEOUT_SECS: u64 = 60;
pub const RAILWAY_LOGS_TAIL_LINES: u32 = 100;

pub const LOGS_PREVIEW_MAX_CHARS: usize = 500;
pub const REPORT_FILE_PREFIX: &str = "railway_deployment_analysis";

pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const RAILWAY_TOKEN_ENV: &str = "RAILWAY_TOKEN";
pub const GITHUB_USERNAME_ENV: &str = "GITHUB_USERNAME";

pub const USER_AGENT: &str = "deploylyzer-cli";

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
