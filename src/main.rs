//! `vpnctl`: drive the VPN application named by `$VPN_APP`.

use std::process::ExitCode;

use vpnctl::constants;
use vpnctl::vpn::VpnApp;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let app = VpnApp::from_env()?;
    vpnctl::run(constants::APP_NAME, app)
}
