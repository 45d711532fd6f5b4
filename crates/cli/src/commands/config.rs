use anyhow::{Context, Result, bail};
use std::env;
use std::path::PathBuf;

use karate_runner_core::{Config, config::CONFIG_FILE_NAMES};

pub fn config_show_command(path: Option<&str>) -> Result<()> {
    let start = match path {
        Some(path) => PathBuf::from(path),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let (config, source) = Config::load_nearest(&start).context("Failed to load configuration")?;
    match source {
        Some(source) => eprintln!("📄 Loaded from {}", source.display()),
        None => eprintln!("ℹ️  No configuration file found, showing defaults"),
    }

    let output =
        serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?;
    println!("{output}");
    Ok(())
}

pub fn config_init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let dir = match cwd {
        Some(cwd) => PathBuf::from(cwd),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let config_path = dir.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!("✅ Created config: {}", config_path.display());
    Ok(())
}
