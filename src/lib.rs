//! Connect, disconnect and list the VPN connections of macOS VPN clients.
//!
//! Every executable shares [`run`]; they differ only in the [`VpnApp`] they
//! drive and the program name shown in usage text.

pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod state;
pub mod vpn;

use std::io::{self, Write};
use std::process::ExitCode;

use color_eyre::Result;

use crate::config::Config;
use crate::vpn::{OsascriptClient, VpnApp};

/// Parse the process arguments and run one command against `app`.
///
/// Usage errors are printed here and reported through the exit code.
///
/// # Errors
///
/// Returns an error if configuration, logging or the VPN application fails.
pub fn run(program: &str, app: VpnApp) -> Result<ExitCode> {
    logging::initialize()?;

    let options = match cli::parse_args(cli::args::lossy_args(std::env::args_os().skip(1))) {
        Ok(options) => options,
        Err(usage) => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(usage.render(program).as_bytes())?;
            stdout.flush()?;
            return Ok(ExitCode::from(usage.exit_code()));
        }
    };

    let config = Config::load()?;
    let client = OsascriptClient::new(app, &config);
    tracing::debug!(%app, "using VPN application");

    let mut stdout = io::stdout().lock();
    cli::commands::execute(&client, &options, &mut stdout)?;
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}
