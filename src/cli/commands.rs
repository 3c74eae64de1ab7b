//! Command handlers.
//!
//! Each handler takes the automation client explicitly and writes its
//! user-facing output to `out`, so the same code runs against a VPN
//! application or a test fake.

use std::io::Write;

use color_eyre::Result;
use serde_json::{Map, Value};

use super::args::{Action, Options};
use crate::constants;
use crate::vpn::{self, Automation};

/// Dispatch a parsed command.
///
/// # Errors
///
/// Returns an error if the VPN application or `out` fails.
pub fn execute(client: &dyn Automation, options: &Options, out: &mut dyn Write) -> Result<()> {
    match (options.command, options.all) {
        (Action::Connect, false) => connect(client, &options.name, out),
        (Action::Connect, true) => connect_all(client),
        (Action::Disconnect, false) => disconnect(client, &options.name, out),
        (Action::Disconnect, true) => disconnect_all(client),
        (Action::List, _) => {
            let listing = list(client)?;
            writeln!(out, "{listing}")?;
            Ok(())
        }
    }
}

/// Connect to `name` unless it is already connected.
///
/// # Errors
///
/// Returns an error if the VPN application fails.
pub fn connect(client: &dyn Automation, name: &str, out: &mut dyn Write) -> Result<()> {
    if vpn::is_active(client, name)? {
        writeln!(
            out,
            "{}{name}{}",
            constants::CLI_MSG_VPN_PREFIX,
            constants::CLI_MSG_ALREADY_CONNECTED
        )?;
        return Ok(());
    }
    tracing::info!(name, "connecting");
    client.connect(name)
}

/// Disconnect from `name` if it is connected.
///
/// # Errors
///
/// Returns an error if the VPN application fails.
pub fn disconnect(client: &dyn Automation, name: &str, out: &mut dyn Write) -> Result<()> {
    if !vpn::is_active(client, name)? {
        writeln!(
            out,
            "{}{name}{}",
            constants::CLI_MSG_VPN_PREFIX,
            constants::CLI_MSG_NOT_CONNECTED
        )?;
        return Ok(());
    }
    tracing::info!(name, "disconnecting");
    client.disconnect(name)
}

/// Connect every connection that is not active.
///
/// # Errors
///
/// Returns the first error raised by the VPN application.
pub fn connect_all(client: &dyn Automation) -> Result<()> {
    for connection in client.connections()?.iter().filter(|c| !c.is_active()) {
        tracing::info!(name = %connection.name, "connecting");
        client.connect(&connection.name)?;
    }
    Ok(())
}

/// Disconnect every active connection.
///
/// # Errors
///
/// Returns the first error raised by the VPN application.
pub fn disconnect_all(client: &dyn Automation) -> Result<()> {
    client.disconnect_all()
}

/// JSON object mapping each connection name to its connected flag,
/// in the order the application reports them.
///
/// # Errors
///
/// Returns an error if the connection list cannot be fetched.
pub fn list(client: &dyn Automation) -> Result<String> {
    let connections: Map<String, Value> = client
        .connections()?
        .into_iter()
        .map(|c| {
            let active = c.is_active();
            (c.name, Value::Bool(active))
        })
        .collect();
    Ok(Value::Object(connections).to_string())
}
