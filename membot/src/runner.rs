//! Main entry: init logging, build components and chain, then run the REPL.

use anyhow::Result;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::telegram::run_repl;

/// Runs the bot until the Telegram update loop exits.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    init_tracing(&config.log_file)?;

    let components = build_bot_components(&config).await?;
    let chain = build_handler_chain(&config, &components);

    info!("Starting Telegram REPL");
    run_repl(
        components.teloxide_bot.clone(),
        chain,
        components.bot_api.clone(),
        components.bot_username.clone(),
    )
    .await
}
