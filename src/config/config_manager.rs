use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::config::config::Config;
use std::fs;

pub struct ConfigManager;

impl ConfigManager {
    /// Loads `~/.deploylyzer/config.toml` when it exists; otherwise all
    /// credentials resolve through the environment and interactive prompts.
    pub fn load() -> AnalyzerResult<Config> {
        let config_path = dirs::home_dir().map(|d| d.join(".deploylyzer/config.toml"));

        if let Some(path) = config_path {
            if path.exists() {
                log::info!("📋 Loading config from: {}", path.display());
                let content = fs::read_to_string(&path).map_err(|e| AnalyzerError::ConfigurationFileError {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
                let config: Config = toml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }
}
