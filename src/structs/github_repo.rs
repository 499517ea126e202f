use serde::Deserialize;

/// Repository record from the GitHub REST API. Only the fields the
/// analyzer needs are kept; everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}
