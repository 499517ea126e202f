use serde::{Deserialize, Serialize};

/// Project record normalized from either the Railway GraphQL API or the
/// Railway CLI. Both fetch paths produce this shape before matching.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RailwayProject {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<String>,
}
