//! User configuration loaded from `config.toml`.
//!
//! The file is optional. Lookup order is `$VPNCTL_CONFIG`, then
//! `<config_dir>/vpnctl/config.toml`. A missing file yields defaults.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::{eyre::WrapErr, Result};
use serde::Deserialize;

use crate::constants;
use crate::vpn::VpnApp;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to the `osascript` runner.
    pub osascript: PathBuf,
    /// Names the applications are addressed by.
    pub apps: AppNames,
}

/// Per-application scripting names, for renamed or localized installs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppNames {
    pub viscosity: String,
    pub shimo: String,
    pub tunnelblick: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            osascript: PathBuf::from(constants::DEFAULT_OSASCRIPT),
            apps: AppNames::default(),
        }
    }
}

impl Default for AppNames {
    fn default() -> Self {
        Self {
            viscosity: VpnApp::Viscosity.default_app_name().to_string(),
            shimo: VpnApp::Shimo.default_app_name().to_string(),
            tunnelblick: VpnApp::Tunnelblick.default_app_name().to_string(),
        }
    }
}

impl Config {
    /// Load from the standard location.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`, falling back to defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid config.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config: {}", path.display()))?;
        let config = toml::from_str(&content)
            .wrap_err_with(|| format!("Invalid config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Scripting name configured for `app`.
    #[must_use]
    pub fn app_name(&self, app: VpnApp) -> &str {
        match app {
            VpnApp::Viscosity => &self.apps.viscosity,
            VpnApp::Shimo => &self.apps.shimo,
            VpnApp::Tunnelblick => &self.apps.tunnelblick,
        }
    }
}

/// Location of the config file, honouring `$VPNCTL_CONFIG`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(constants::ENV_CONFIG) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| {
        dir.join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.osascript, PathBuf::from("/usr/bin/osascript"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[apps]\nviscosity = \"Viscosity Beta\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.app_name(VpnApp::Viscosity), "Viscosity Beta");
        assert_eq!(config.app_name(VpnApp::Shimo), "Shimo");
        assert_eq!(config.osascript, PathBuf::from(constants::DEFAULT_OSASCRIPT));
    }

    #[test]
    fn test_osascript_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "osascript = \"/opt/bin/osascript\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.osascript, PathBuf::from("/opt/bin/osascript"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout = 5\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn test_default_app_names() {
        let config = Config::default();
        for app in VpnApp::ALL {
            assert_eq!(config.app_name(app), app.default_app_name());
        }
    }
}
