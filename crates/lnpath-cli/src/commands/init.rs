//! `lnpath init`: write a default service configuration.

use clap::Args;
use lnpath_api::ServiceConfig;
use std::path::{Path, PathBuf};

/// Name of the configuration file written by `init`.
pub const CONFIG_FILE: &str = "lnpath.toml";

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (defaults to current directory).
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

pub fn run(args: &InitArgs) -> anyhow::Result<()> {
    let config_path = write_default_config(&args.dir)?;
    println!("Wrote default configuration to {}", config_path.display());
    println!("Edit {CONFIG_FILE} to change the API address, path budget or log format.");
    Ok(())
}

fn write_default_config(dir: &Path) -> anyhow::Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("configuration file already exists at {}", config_path.display());
    }
    ServiceConfig::default().save(&config_path)?;
    Ok(config_path)
}
