//! Supported VPN client applications and their automation scripts.
//!
//! Every application is driven through JavaScript for Automation. The scripts
//! receive their inputs through `argv` (application name first, connection
//! name second) so names are never spliced into script source.

use std::str::FromStr;

use color_eyre::{eyre::eyre, Result};

use crate::constants;
use crate::state::ConnectionState;

/// Connects the connection named by `argv[1]`.
const CONNECT_SCRIPT: &str = r"function run(argv) {
  Application(argv[0]).connect(argv[1]);
}";

/// Disconnects the connection named by `argv[1]`.
const DISCONNECT_SCRIPT: &str = r"function run(argv) {
  Application(argv[0]).disconnect(argv[1]);
}";

const VISCOSITY_LIST_SCRIPT: &str = r"function run(argv) {
  var items = Application(argv[0]).connections();
  var out = [];
  for (var i = 0; i < items.length; i++) {
    out.push([items[i].name(), items[i].state()]);
  }
  return JSON.stringify(out);
}";

const SHIMO_LIST_SCRIPT: &str = r"function run(argv) {
  var items = Application(argv[0]).accounts();
  var out = [];
  for (var i = 0; i < items.length; i++) {
    out.push([items[i].name(), items[i].connected() ? 'Connected' : 'Disconnected']);
  }
  return JSON.stringify(out);
}";

const TUNNELBLICK_LIST_SCRIPT: &str = r"function run(argv) {
  var items = Application(argv[0]).configurations();
  var out = [];
  for (var i = 0; i < items.length; i++) {
    out.push([items[i].name(), items[i].state()]);
  }
  return JSON.stringify(out);
}";

const TUNNELBLICK_DISCONNECT_ALL_SCRIPT: &str = r"function run(argv) {
  Application(argv[0]).disconnectAll();
}";

/// A VPN client application this crate knows how to drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VpnApp {
    /// Viscosity (`connections`, string `state`).
    #[default]
    Viscosity,
    /// Shimo (`accounts`, boolean `connected`).
    Shimo,
    /// Tunnelblick (`configurations`, upper-case `state`).
    Tunnelblick,
}

impl VpnApp {
    pub const ALL: [Self; 3] = [Self::Viscosity, Self::Shimo, Self::Tunnelblick];

    /// Name of the dedicated executable, also used in usage text.
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Viscosity => "viscosity",
            Self::Shimo => "shimo",
            Self::Tunnelblick => "tunnelblick",
        }
    }

    /// Name the application is addressed by through the scripting bridge.
    #[must_use]
    pub const fn default_app_name(self) -> &'static str {
        match self {
            Self::Viscosity => "Viscosity",
            Self::Shimo => "Shimo",
            Self::Tunnelblick => "Tunnelblick",
        }
    }

    /// Map a raw status string from the list script onto [`ConnectionState`].
    #[must_use]
    pub fn parse_state(self, raw: &str) -> ConnectionState {
        let (connected, disconnected) = match self {
            Self::Viscosity | Self::Shimo => ("Connected", "Disconnected"),
            Self::Tunnelblick => ("CONNECTED", "EXITING"),
        };
        if raw == connected {
            ConnectionState::Connected
        } else if raw == disconnected {
            ConnectionState::Disconnected
        } else {
            ConnectionState::Other(raw.to_string())
        }
    }

    pub(crate) const fn list_script(self) -> &'static str {
        match self {
            Self::Viscosity => VISCOSITY_LIST_SCRIPT,
            Self::Shimo => SHIMO_LIST_SCRIPT,
            Self::Tunnelblick => TUNNELBLICK_LIST_SCRIPT,
        }
    }

    pub(crate) const fn connect_script(self) -> &'static str {
        CONNECT_SCRIPT
    }

    pub(crate) const fn disconnect_script(self) -> &'static str {
        DISCONNECT_SCRIPT
    }

    /// Native "disconnect everything" script, if the application has one.
    pub(crate) const fn disconnect_all_script(self) -> Option<&'static str> {
        match self {
            Self::Tunnelblick => Some(TUNNELBLICK_DISCONNECT_ALL_SCRIPT),
            Self::Viscosity | Self::Shimo => None,
        }
    }

    /// Resolve the application from the value of `VPN_APP`.
    ///
    /// Unset or blank selects the default application.
    ///
    /// # Errors
    ///
    /// Returns an error if the value names no supported application.
    pub fn from_env_value(value: Option<&str>) -> Result<Self> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(name) => name.parse().map_err(|e: String| eyre!(e)),
        }
    }

    /// Resolve the application from the `VPN_APP` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable names no supported application.
    pub fn from_env() -> Result<Self> {
        let value = std::env::var(constants::ENV_VPN_APP).ok();
        Self::from_env_value(value.as_deref())
    }
}

impl FromStr for VpnApp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|app| app.default_app_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("{}{s}", constants::ERR_UNKNOWN_APP))
    }
}

impl std::fmt::Display for VpnApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.default_app_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_state_viscosity() {
        let app = VpnApp::Viscosity;
        assert_eq!(app.parse_state("Connected"), ConnectionState::Connected);
        assert_eq!(app.parse_state("Disconnected"), ConnectionState::Disconnected);
        assert_eq!(
            app.parse_state("Connecting"),
            ConnectionState::Other("Connecting".to_string())
        );
    }

    #[test]
    fn test_parse_state_is_case_sensitive() {
        assert!(!VpnApp::Viscosity.parse_state("CONNECTED").is_active());
        assert!(!VpnApp::Tunnelblick.parse_state("Connected").is_active());
    }

    #[test]
    fn test_parse_state_tunnelblick() {
        let app = VpnApp::Tunnelblick;
        assert_eq!(app.parse_state("CONNECTED"), ConnectionState::Connected);
        assert_eq!(app.parse_state("EXITING"), ConnectionState::Disconnected);
        assert_eq!(
            app.parse_state("GET_CONFIG"),
            ConnectionState::Other("GET_CONFIG".to_string())
        );
    }

    #[test]
    fn test_from_str_ignores_case() {
        assert_eq!("viscosity".parse::<VpnApp>(), Ok(VpnApp::Viscosity));
        assert_eq!("SHIMO".parse::<VpnApp>(), Ok(VpnApp::Shimo));
        assert_eq!("Tunnelblick".parse::<VpnApp>(), Ok(VpnApp::Tunnelblick));
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "OpenVPN".parse::<VpnApp>().unwrap_err();
        assert_eq!(err, "Unknown VPN app: OpenVPN");
    }

    #[test]
    fn test_from_env_value_defaults_to_viscosity() {
        assert_eq!(VpnApp::from_env_value(None).unwrap(), VpnApp::Viscosity);
        assert_eq!(VpnApp::from_env_value(Some("  ")).unwrap(), VpnApp::Viscosity);
        assert_eq!(
            VpnApp::from_env_value(Some("tunnelblick")).unwrap(),
            VpnApp::Tunnelblick
        );
    }

    #[test]
    fn test_from_env_value_unknown_is_error() {
        let err = VpnApp::from_env_value(Some("Cisco")).unwrap_err();
        assert!(err.to_string().contains("Unknown VPN app: Cisco"));
    }

    #[test]
    fn test_only_tunnelblick_has_native_disconnect_all() {
        assert!(VpnApp::Tunnelblick.disconnect_all_script().is_some());
        assert!(VpnApp::Viscosity.disconnect_all_script().is_none());
        assert!(VpnApp::Shimo.disconnect_all_script().is_none());
    }

    #[test]
    fn test_list_scripts_use_app_collections() {
        assert!(VpnApp::Viscosity.list_script().contains(".connections()"));
        assert!(VpnApp::Shimo.list_script().contains(".accounts()"));
        assert!(VpnApp::Tunnelblick.list_script().contains(".configurations()"));
    }
}
