pub mod file_extractor;
pub mod github_client;
pub mod log_classifier;
pub mod project_matcher;
pub mod railway;
pub mod report_generator;
pub mod report_writer;
pub mod repository_analyzer;
pub mod status_aggregator;
