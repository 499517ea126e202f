pub mod api_source;
pub mod cli_source;
