use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use climate_api::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // The start command initializes tracing itself, after loading the
    // configured log level and format
    if !matches!(args.get_command(), cli::Commands::Start) {
        init_tracing("info", "text");
    }

    match args.get_command() {
        cli::Commands::Start => {
            commands::start::execute(&args.config).await?;
        }
        cli::Commands::Test => {
            commands::test::execute(&args.config).await?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
        },
        cli::Commands::Version => {
            println!("Climate API v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
