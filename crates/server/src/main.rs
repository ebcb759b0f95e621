//! faqbot server binary.
//!
//! Loads configuration from `faqbot.toml` / `FAQBOT_SERVER__*` environment
//! variables, then serves the question-answering API until shutdown.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
