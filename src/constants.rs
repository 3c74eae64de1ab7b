//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout vpnctl,
//! including default paths, environment variable names, and CLI messages.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

// === Automation Runner ===

/// Default location of the Open Scripting Architecture runner.
pub const DEFAULT_OSASCRIPT: &str = "/usr/bin/osascript";
/// Scripting language passed to `osascript -l`.
pub const OSA_LANGUAGE: &str = "JavaScript";

// === Environment ===

/// Selects the application driven by the `vpnctl` front-end.
pub const ENV_VPN_APP: &str = "VPN_APP";
/// Overrides the configuration file location.
pub const ENV_CONFIG: &str = "VPNCTL_CONFIG";
/// Log filter directives (`tracing_subscriber::EnvFilter` syntax).
pub const ENV_LOG: &str = "VPNCTL_LOG";

// === Path Configuration ===

/// Name of the configuration subdirectory.
pub const CONFIG_DIR_NAME: &str = "vpnctl";
/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === Messages: CLI Output ===

pub const CLI_MSG_ERROR_PREFIX: &str = "error: ";
pub const CLI_MSG_UNKNOWN_COMMAND: &str = "unknown command: ";
pub const CLI_MSG_NO_NAME: &str = "no VPN name specified";
pub const CLI_MSG_ALREADY_CONNECTED: &str = " is already connected";
pub const CLI_MSG_NOT_CONNECTED: &str = " is not connected";
pub const CLI_MSG_VPN_PREFIX: &str = "VPN ";

// === Error Messages ===

pub const ERR_UNKNOWN_APP: &str = "Unknown VPN app: ";
pub const ERR_OSASCRIPT_SPAWN: &str = "Failed to run osascript";
pub const ERR_OSASCRIPT_STATUS: &str = "osascript failed with ";
pub const ERR_BAD_LISTING: &str = "Could not decode connection list";
