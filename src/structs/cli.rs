use clap::Parser;

/// No flags or subcommands: credentials are collected interactively
/// (or picked up from the config file / environment).
#[derive(Parser)]
#[clap(name = "deploylyzer")]
#[clap(about = "Railway deployment failure analyzer", long_about = None)]
#[clap(version)]
pub struct Cli {}
