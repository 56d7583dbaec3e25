//! Configuration command implementations

use anyhow::{Context, Result};

use crate::cli::{ConfigCommands, Format};
use crate::config::ConfigLoader;

/// Execute config commands
pub async fn execute(cmd: ConfigCommands, custom_config: Option<&str>, format: Format) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(custom_config, format),
    }
}

fn show(custom_config: Option<&str>, format: Format) -> Result<()> {
    let loader = ConfigLoader::load_with_custom_config(custom_config)?;
    // Typed extraction first so an invalid config is reported, not printed
    loader.config().context("Configuration is invalid")?;
    let merged = loader.get_full_config()?;

    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(&merged)?,
        Format::Text => toml::to_string_pretty(&merged).context("Failed to render configuration")?,
    };
    println!("{}", rendered);
    Ok(())
}
