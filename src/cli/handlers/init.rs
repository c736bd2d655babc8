use crate::config::{CONFIG_FILE_NAME, TweetqlConfig};
use anyhow::Result;
use colored::Colorize;

pub fn handle_init() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("Config already exists at {}", config_path.display());
    }

    TweetqlConfig::default().save(&config_path)?;

    println!("{} {}", "Initialized".green(), config_path.display());
    Ok(())
}
