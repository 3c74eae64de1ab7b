//! `tunnelblick`: drive Tunnelblick from the command line.

use std::process::ExitCode;

use vpnctl::vpn::VpnApp;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let app = VpnApp::Tunnelblick;
    vpnctl::run(app.program(), app)
}
