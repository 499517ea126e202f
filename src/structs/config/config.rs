use serde::{Deserialize, Serialize};

/// Optional credentials file (`~/.deploylyzer/config.toml`). Any field left
/// unset falls back to the environment, then to an interactive prompt.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub github_token: Option<String>,
    #[serde(default)]
    pub railway_token: Option<String>,
    #[serde(default)]
    pub github_username: Option<String>,
}
