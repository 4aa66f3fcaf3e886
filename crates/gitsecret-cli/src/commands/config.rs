//! Effective configuration display.

use anyhow::{anyhow, Result};
use colored::Colorize;
use gitsecret_core::config::Config;
use gitsecret_types::config::Defaults;

pub fn execute(config: &Config, defaults: &Defaults, key: Option<&str>) -> Result<()> {
    if let Some(key) = key {
        let value: serde_yaml::Value = config
            .get(key)
            .ok_or_else(|| anyhow!("No configuration value at '{}'", key))?;
        print!("{}", serde_yaml::to_string(&value)?);
        return Ok(());
    }

    match config.file_path() {
        Some(path) if path.exists() => {
            eprintln!("{} {}", "Config file:".bold(), path.display().to_string().cyan())
        }
        Some(path) => eprintln!(
            "{} {} {}",
            "Config file:".bold(),
            path.display().to_string().cyan(),
            "(not found, using defaults)".yellow()
        ),
        None => eprintln!("{} {}", "Config file:".bold(), "none".yellow()),
    }

    print!("{}", serde_yaml::to_string(defaults)?);
    Ok(())
}
