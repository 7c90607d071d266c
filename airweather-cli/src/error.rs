//! CLI error handling with user-friendly messages.

use std::fmt;
use std::io;
use std::process;

use airweather::config::ConfigFileError;
use airweather::http::ServerError;
use airweather::loader::LoaderError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to build the async runtime
    Runtime(io::Error),
    /// HTTP server error
    Serve(ServerError),
    /// Airport file load error
    Load(LoaderError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Serve(ServerError::Bind { .. }) => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. Another server is already using the port");
                eprintln!("  2. Pick a different one with: airweather serve --port <PORT>");
            }
            CliError::Load(LoaderError::Http(_)) => {
                eprintln!();
                eprintln!("Make sure the server is running: airweather serve");
                eprintln!("Or point at another one with: airweather load <FILE> --server <URL>");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Runtime(e) => write!(f, "Failed to start runtime: {}", e),
            CliError::Serve(e) => write!(f, "HTTP server error: {}", e),
            CliError::Load(e) => write!(f, "Failed to load airports: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Runtime(e) => Some(e),
            CliError::Serve(e) => Some(e),
            CliError::Load(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<ServerError> for CliError {
    fn from(e: ServerError) -> Self {
        CliError::Serve(e)
    }
}

impl From<LoaderError> for CliError {
    fn from(e: LoaderError) -> Self {
        CliError::Load(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_wraps_loader_error() {
        let err = CliError::from(LoaderError::InvalidInput(PathBuf::from("missing.dat")));
        assert_eq!(
            err.to_string(),
            "Failed to load airports: missing.dat is not a valid input"
        );
    }

    #[test]
    fn test_source_is_exposed() {
        use std::error::Error;

        let err = CliError::Runtime(io::Error::other("boom"));
        assert!(err.source().is_some());
        assert!(CliError::Config("bad".to_string()).source().is_none());
    }
}
