use crate::config::constants::{GITHUB_API_BASE, GITHUB_MAX_REPOS, GITHUB_PAGE_SIZE, USER_AGENT};
use crate::structs::github_repo::GithubRepo;
use reqwest::Client;

pub struct GithubClient {
    client: Client,
    token: String,
}

impl GithubClient {
    pub fn new(token: String) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, token }
    }

    /// Fetches all owned repositories for a user, newest-updated first.
    /// Transport or parse errors stop pagination and degrade to whatever
    /// was fetched so far; they are never fatal.
    pub async fn fetch_user_repos(&self, username: &str) -> Vec<GithubRepo> {
        log::info!("📡 Fetching repositories for user: {}", username);

        let url = format!("{}/users/{}/repos", GITHUB_API_BASE, username);
        let mut repos: Vec<GithubRepo> = Vec::new();
        let mut page: u32 = 1;

        loop {
            let request = self
                .client
                .get(&url)
                .header("Authorization", format!("token {}", self.token))
                .header("Accept", "application/vnd.github.v3+json")
                .query(&[
                    ("per_page", GITHUB_PAGE_SIZE.to_string()),
                    ("page", page.to_string()),
                    ("type", "owner".to_string()),
                    ("sort", "updated".to_string()),
                ]);

            let page_repos: Vec<GithubRepo> = match request.send().await {
                Ok(response) => match response.error_for_status() {
                    Ok(response) => match response.json().await {
                        Ok(parsed) => parsed,
                        Err(e) => {
                            log::error!("❌ Error parsing GitHub response: {}", e);
                            break;
                        }
                    },
                    Err(e) => {
                        log::error!("❌ GitHub API error: {}", e);
                        break;
                    }
                },
                Err(e) => {
                    log::error!("❌ Error fetching GitHub repos: {}", e);
                    break;
                }
            };

            if page_repos.is_empty() {
                break;
            }

            repos.extend(page_repos);
            page += 1;

            // GitHub API rate limiting
            if repos.len() >= GITHUB_MAX_REPOS {
                break;
            }
        }

        log::info!("✅ Found {} repositories", repos.len());
        repos
    }
}
