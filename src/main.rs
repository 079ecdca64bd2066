use anyhow::Result;
use tasktrail::config::Config;
use tasktrail::logger::Logger;
use tasktrail::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            eprintln!("\n💡 Fix the configuration file or regenerate it with --init-config");
            return Ok(());
        }
    };

    let logger = Logger::from_config(&config.logging)?;
    logger.log(format!("Tasktrail {} starting", env!("CARGO_PKG_VERSION")));

    // Run the TUI application
    ui::run_app(config, logger).await?;

    Ok(())
}
