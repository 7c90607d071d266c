//! airweather CLI - Command-line interface
//!
//! Runs the HTTP server, uploads airport files to a running server and
//! manages the configuration file.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::load::LoadArgs;
use commands::serve::ServeArgs;

#[derive(Parser)]
#[command(name = "airweather")]
#[command(version = airweather::VERSION)]
#[command(about = "Airport weather collection and proximity queries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Interface address to bind (overrides config)
        #[arg(long)]
        address: Option<String>,

        /// TCP port (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// airports.dat file to load before serving
        #[arg(long)]
        airports: Option<PathBuf>,

        /// Start without the built-in seed airports
        #[arg(long)]
        no_seed: bool,

        /// Enable debug logging
        #[arg(long)]
        debug: bool,
    },

    /// Upload an airports.dat file to a running server
    Load {
        /// Path to the airports.dat file
        file: PathBuf,

        /// Server base URL (overrides config)
        #[arg(long)]
        server: Option<String>,

        /// Request timeout in seconds (overrides config)
        #[arg(long)]
        timeout: Option<u64>,

        /// Enable debug logging
        #[arg(long)]
        debug: bool,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            address,
            port,
            airports,
            no_seed,
            debug,
        } => commands::serve::run(ServeArgs {
            address,
            port,
            airports,
            no_seed,
            debug,
        }),
        Commands::Load {
            file,
            server,
            timeout,
            debug,
        } => commands::load::run(LoadArgs {
            file,
            server,
            timeout,
            debug,
        }),
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from([
            "airweather",
            "serve",
            "--port",
            "8080",
            "--airports",
            "airports.dat",
            "--no-seed",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve {
                address,
                port,
                airports,
                no_seed,
                debug,
            } => {
                assert!(address.is_none());
                assert_eq!(port, Some(8080));
                assert_eq!(airports, Some(PathBuf::from("airports.dat")));
                assert!(no_seed);
                assert!(!debug);
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_parse_load() {
        let cli = Cli::try_parse_from([
            "airweather",
            "load",
            "airports.dat",
            "--server",
            "http://weather.local:9090",
        ])
        .unwrap();

        match cli.command {
            Commands::Load {
                file,
                server,
                timeout,
                ..
            } => {
                assert_eq!(file, PathBuf::from("airports.dat"));
                assert_eq!(server.as_deref(), Some("http://weather.local:9090"));
                assert!(timeout.is_none());
            }
            _ => panic!("expected load command"),
        }
    }

    #[test]
    fn test_load_requires_file() {
        assert!(Cli::try_parse_from(["airweather", "load"]).is_err());
    }

    #[test]
    fn test_parse_config_init() {
        let cli = Cli::try_parse_from(["airweather", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                command: ConfigCommands::Init { force: true }
            }
        ));
    }
}
