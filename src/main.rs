use clap::Parser;
use deploylyzer_cli::structs::cli::Cli;
use deploylyzer_cli::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let _cli = Cli::parse();
    let mut runner = CommandRunner::new();
    runner.run().await?;
    Ok(())
}
