use anyhow::Result;
use routine::{config::Config, logger::Logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        return Config::generate_default_config(Config::get_default_config_path()?);
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;
    logger.log("Starting Routine".to_string());

    // Run the TUI application
    ui::run_app(config, logger).await?;

    Ok(())
}
