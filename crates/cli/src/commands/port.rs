use anyhow::{Context, Result};
use std::env;

use karate_runner_core::{Config, PortAllocator};

pub fn port_command() -> Result<()> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let (config, _) = Config::load_nearest(&cwd).context("Failed to load configuration")?;

    let port = PortAllocator::new(config.debugger.port_override())
        .allocate(false)
        .context("Failed to allocate a debug port")?;

    println!("{port}");
    Ok(())
}
