//! VPN connection state types.

/// Connection status as reported by the VPN application.
///
/// Each application reports status in its own vocabulary; adapters map it
/// onto this enum. Only [`ConnectionState::Connected`] counts as active.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// No tunnel is up.
    #[default]
    Disconnected,
    /// Tunnel is established.
    Connected,
    /// Transitional or unrecognised status, kept verbatim for diagnostics.
    Other(String),
}

impl ConnectionState {
    /// Returns true if the connection counts as active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionState::Disconnected => write!(f, "Disconnected"),
            ConnectionState::Connected => write!(f, "Connected"),
            ConnectionState::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// A named connection owned by the external VPN application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
    /// Display name, unique within one application.
    pub name: String,
    /// Status at the time the listing was taken.
    pub state: ConnectionState,
}

impl Connection {
    pub fn new(name: impl Into<String>, state: ConnectionState) -> Self {
        Self {
            name: name.into(),
            state,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.state.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_connected_is_active() {
        assert!(ConnectionState::Connected.is_active());
        assert!(!ConnectionState::Disconnected.is_active());
        assert!(!ConnectionState::Other("Connecting".to_string()).is_active());
    }

    #[test]
    fn test_display_keeps_raw_status() {
        assert_eq!(ConnectionState::Connected.to_string(), "Connected");
        assert_eq!(
            ConnectionState::Other("Authenticating".to_string()).to_string(),
            "Authenticating"
        );
    }

    #[test]
    fn test_connection_is_active_follows_state() {
        assert!(Connection::new("Work", ConnectionState::Connected).is_active());
        assert!(!Connection::new("Home", ConnectionState::default()).is_active());
    }
}
