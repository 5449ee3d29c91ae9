use std::path::PathBuf;

use anyhow::Result;
use outlook_buttons_core::config::ButtonsConfig;
use owo_colors::OwoColorize;

pub fn path() -> Result<()> {
    let config_path = ButtonsConfig::config_path()?;
    let status = if config_path.exists() { "" } else { " (not created yet)" };

    println!("{}{}", config_path.display(), status.dimmed());
    Ok(())
}

pub fn init(target: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = match target {
        Some(path) => path,
        None => ButtonsConfig::config_path()?,
    };

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}\n\
            Use --force to overwrite it.",
            config_path.display()
        );
    }

    ButtonsConfig::create_default_config(&config_path)?;
    println!("{} {}", "Created".green(), config_path.display());

    Ok(())
}
