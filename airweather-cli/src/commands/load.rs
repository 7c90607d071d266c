//! Load command - upload an airports.dat file to a running server.

use std::path::PathBuf;

use airweather::loader::{AirportLoader, HttpAirportSink};

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the load command.
pub struct LoadArgs {
    pub file: PathBuf,
    pub server: Option<String>,
    pub timeout: Option<u64>,
    pub debug: bool,
}

/// Run the load command.
pub fn run(args: LoadArgs) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(args.debug)?;
    runner.log_startup("load");
    let config = runner.config();

    let server_url = args
        .server
        .unwrap_or_else(|| config.loader.server_url.clone());
    let timeout = args.timeout.unwrap_or(config.loader.timeout);

    let sink = HttpAirportSink::new(&server_url, timeout)?;
    println!("Uploading {} to {}", args.file.display(), sink.endpoint());

    let report = AirportLoader::new(sink).load_file(&args.file)?;

    println!();
    println!("Loaded:  {}", report.loaded);
    println!("Skipped: {}", report.skipped);
    Ok(())
}
