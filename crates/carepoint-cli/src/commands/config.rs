use std::path::Path;

use anyhow::Result;
use tracing::info;

use carepoint_core::AppConfig;

pub fn path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

pub fn init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return Ok(());
    }
    AppConfig::default().save_to(config_path)?;
    info!("Wrote default config to {}", config_path.display());
    println!("Created {}", config_path.display());
    Ok(())
}
