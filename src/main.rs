use clap::Parser;
use tracing_subscriber::EnvFilter;

mod analysis;
mod cli;
mod core;
mod extraction;
mod matching;
mod utils;
mod vocabulary;
mod web;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("resume_matcher=debug,info")
    } else {
        EnvFilter::new("resume_matcher=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Analyze(args) => {
            cli::analyze::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Skills(args) => {
            cli::skills::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Vocabulary(args) => {
            cli::vocabulary::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
    }

    Ok(())
}
