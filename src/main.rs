use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use enroll::{
    api::{HttpApi, RemoteApi},
    cli::commands::{posts::PostsCommand, register::RegisterCommand, CommandHandler},
    cli::{Cli, Commands},
    config::ClientConfig,
    logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ClientConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_base_url(cli.base_url.clone());

    if cli.command.is_interactive() {
        // Without a log file, stay silent rather than draw over the TUI
        if let Some(path) = cli.log_file.clone().or_else(|| config.resolved_log_file()) {
            logging::init_file(cli.log_level, &path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
        }
    } else {
        logging::init_stderr(cli.log_level);
    }

    let api: Arc<dyn RemoteApi> =
        Arc::new(HttpApi::new(&config).context("Failed to create HTTP client")?);
    debug!("Using {} backend at {}", api.name(), config.base_url);

    let handler: Box<dyn CommandHandler> = match cli.command {
        Commands::Register { record } => Box::new(RegisterCommand::new(record, api)),
        Commands::Posts { plain } => Box::new(PostsCommand::new(plain, api)),
    };

    debug!("Running '{}' command", handler.name());
    handler.execute().await?;

    Ok(())
}
