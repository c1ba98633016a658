use clap::Parser;
use dotenv::dotenv;
use refund_provider_scripts::{cli::Cli, config::ProjectConfig, errors::ScriptError};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    // Load .env file
    dotenv().ok();

    let Cli { network, command } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    // Build the static project configuration
    let config = ProjectConfig::default();

    command.run(&config, network).await
}
