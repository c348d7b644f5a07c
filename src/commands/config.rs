use anyhow::Result;
use owo_colors::OwoColorize;
use sgpi_core::config::SgpiConfig;

pub fn run(init: bool) -> Result<()> {
    let config_path = SgpiConfig::config_path()?;

    if init {
        if config_path.exists() {
            println!("Config already exists, leaving it untouched.");
        } else {
            SgpiConfig::create_default_config(&config_path)?;
            println!("Created {}", config_path.display().green());
        }
    }

    let config = SgpiConfig::load_from(&config_path)?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!();
    println!("{}", "Effective settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {line}");
    }

    Ok(())
}
