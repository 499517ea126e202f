pub mod cli;
pub mod config;
pub mod detected_issue;
pub mod failure_category;
pub mod github_repo;
pub mod railway_project;
pub mod repo_analysis;
