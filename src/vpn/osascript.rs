//! `osascript`-backed implementation of [`Automation`].

use std::path::PathBuf;
use std::process::Command;
use std::time::Instant;

use color_eyre::{
    eyre::{bail, WrapErr},
    Result,
};

use super::{disconnect_active, Automation, VpnApp};
use crate::config::Config;
use crate::constants;
use crate::state::Connection;

/// Drives one VPN application through JavaScript for Automation.
#[derive(Debug, Clone)]
pub struct OsascriptClient {
    program: PathBuf,
    app: VpnApp,
    app_name: String,
}

impl OsascriptClient {
    #[must_use]
    pub fn new(app: VpnApp, config: &Config) -> Self {
        Self {
            program: config.osascript.clone(),
            app,
            app_name: config.app_name(app).to_string(),
        }
    }

    /// Run `script`, passing the application name and `args` as `argv`.
    fn run(&self, script: &str, args: &[&str]) -> Result<String> {
        tracing::debug!(program = %self.program.display(), app = %self.app_name, ?args, "running script");

        let output = Command::new(&self.program)
            .args(["-l", constants::OSA_LANGUAGE, "-e", script])
            .arg(&self.app_name)
            .args(args)
            .output()
            .wrap_err_with(|| {
                format!("{} ({})", constants::ERR_OSASCRIPT_SPAWN, self.program.display())
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "{}{} ({}): {}",
                constants::ERR_OSASCRIPT_STATUS,
                output.status,
                self.app_name,
                stderr.trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Automation for OsascriptClient {
    fn connections(&self) -> Result<Vec<Connection>> {
        let started = Instant::now();
        let output = self.run(self.app.list_script(), &[])?;
        let connections = parse_listing(self.app, &output)?;
        tracing::debug!(
            elapsed = ?started.elapsed(),
            count = connections.len(),
            "fetched VPN connections"
        );
        Ok(connections)
    }

    fn connect(&self, name: &str) -> Result<()> {
        self.run(self.app.connect_script(), &[name]).map(drop)
    }

    fn disconnect(&self, name: &str) -> Result<()> {
        self.run(self.app.disconnect_script(), &[name]).map(drop)
    }

    fn disconnect_all(&self) -> Result<()> {
        let Some(script) = self.app.disconnect_all_script() else {
            return disconnect_active(self);
        };
        for connection in self.connections()?.iter().filter(|c| c.is_active()) {
            tracing::info!(name = %connection.name, "disconnecting");
        }
        self.run(script, &[]).map(drop)
    }
}

/// Decode the list script's output: a JSON array of `[name, state]` pairs.
///
/// Empty output is an empty listing.
///
/// # Errors
///
/// Returns an error if the output is not such an array.
pub fn parse_listing(app: VpnApp, output: &str) -> Result<Vec<Connection>> {
    let output = output.trim();
    if output.is_empty() {
        return Ok(Vec::new());
    }
    let pairs: Vec<(String, String)> = serde_json::from_str(output)
        .wrap_err_with(|| format!("{} from {app}", constants::ERR_BAD_LISTING))?;
    Ok(pairs
        .into_iter()
        .map(|(name, state)| {
            let state = app.parse_state(&state);
            Connection::new(name, state)
        })
        .collect())
}
