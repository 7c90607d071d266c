//! Config command - inspect and initialize the configuration file.

use clap::Subcommand;

use airweather::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the configuration file path
    Path,

    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Init { force } => run_init(force),
    }
}

fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}

fn run_show() -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    print!("{}", config.to_ini_string());
    Ok(())
}

fn run_init(force: bool) -> Result<(), CliError> {
    let path = config_file_path();

    if force {
        ConfigFile::default().save()?;
        println!("Wrote default configuration to {}", path.display());
    } else if path.exists() {
        println!("Configuration already exists at {}", path.display());
        println!("Use --force to overwrite it with defaults.");
    } else {
        let path = ConfigFile::ensure_exists()?;
        println!("Created configuration at {}", path.display());
    }

    Ok(())
}
