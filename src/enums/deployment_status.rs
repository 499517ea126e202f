use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum DeploymentStatus {
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "failed")]
    Failed,
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "unknown")]
    Unknown,
}

impl DeploymentStatus {
    pub fn name(&self) -> &'static str {
        match self {
            DeploymentStatus::Success => "SUCCESS",
            DeploymentStatus::Failed => "FAILED",
            DeploymentStatus::Pending => "PENDING",
            DeploymentStatus::Unknown => "UNKNOWN",
        }
    }

    /// Fixed order used by the report summary.
    pub fn all() -> &'static [DeploymentStatus] {
        &[
            DeploymentStatus::Success,
            DeploymentStatus::Failed,
            DeploymentStatus::Pending,
            DeploymentStatus::Unknown,
        ]
    }
}

impl fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
