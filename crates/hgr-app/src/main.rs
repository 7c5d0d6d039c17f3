use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod config;
pub mod pipeline;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    pipeline::run(&cli)
}
