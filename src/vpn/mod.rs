//! Automation bridge to VPN client applications.
//!
//! [`Automation`] is the capability contract every application exposes:
//! enumerate connections, connect one, disconnect one. The production
//! implementation is [`OsascriptClient`]; tests use an in-memory fake.

mod app;
mod osascript;

pub use app::VpnApp;
pub use osascript::{parse_listing, OsascriptClient};

use color_eyre::Result;

use crate::state::Connection;

/// Query and control surface of a VPN application.
pub trait Automation {
    /// Snapshot of every connection, in the order the application reports them.
    ///
    /// # Errors
    ///
    /// Returns an error if the application cannot be queried.
    fn connections(&self) -> Result<Vec<Connection>>;

    /// Ask the application to bring up `name`. Does not wait for the tunnel.
    ///
    /// # Errors
    ///
    /// Returns an error if the application rejects the request.
    fn connect(&self, name: &str) -> Result<()>;

    /// Ask the application to bring down `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the application rejects the request.
    fn disconnect(&self, name: &str) -> Result<()>;

    /// Disconnect every active connection.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the application.
    fn disconnect_all(&self) -> Result<()> {
        disconnect_active(self)
    }
}

/// Disconnect each active connection in turn, stopping at the first error.
pub(crate) fn disconnect_active<A: Automation + ?Sized>(client: &A) -> Result<()> {
    for connection in client.connections()?.iter().filter(|c| c.is_active()) {
        tracing::info!(name = %connection.name, "disconnecting");
        client.disconnect(&connection.name)?;
    }
    Ok(())
}

/// Returns true iff a connection called exactly `name` exists and is connected.
///
/// # Errors
///
/// Returns an error if the connection list cannot be fetched.
pub fn is_active(client: &dyn Automation, name: &str) -> Result<bool> {
    let active = client
        .connections()?
        .iter()
        .find(|c| c.name == name)
        .is_some_and(Connection::is_active);
    tracing::debug!(name, active, "looked up connection");
    Ok(active)
}


#[cfg(test)]
mod tests {
    use super::testing::{Call, FakeAutomation};
    use super::*;
    use crate::state::ConnectionState;

    struct DefaultOnly(FakeAutomation);

    impl Automation for DefaultOnly {
        fn connections(&self) -> Result<Vec<Connection>> {
            self.0.connections()
        }
        fn connect(&self, name: &str) -> Result<()> {
            self.0.connect(name)
        }
        fn disconnect(&self, name: &str) -> Result<()> {
            self.0.disconnect(name)
        }
    }

    #[test]
    fn test_is_active_connected() {
        let fake = FakeAutomation::with(&[
            ("Work", ConnectionState::Connected),
            ("Home", ConnectionState::Disconnected),
        ]);
        assert!(is_active(&fake, "Work").unwrap());
        assert!(!is_active(&fake, "Home").unwrap());
    }

    #[test]
    fn test_is_active_unknown_name_is_false() {
        let fake = FakeAutomation::with(&[("Work", ConnectionState::Connected)]);
        assert!(!is_active(&fake, "Office").unwrap());
        assert!(!is_active(&fake, "work").unwrap());
        assert!(!is_active(&fake, "").unwrap());
    }

    #[test]
    fn test_is_active_transitional_state_is_false() {
        let fake = FakeAutomation::with(&[(
            "Work",
            ConnectionState::Other("Connecting".to_string()),
        )]);
        assert!(!is_active(&fake, "Work").unwrap());
    }

    #[test]
    fn test_default_disconnect_all_only_touches_active() {
        let client = DefaultOnly(FakeAutomation::with(&[
            ("Work", ConnectionState::Connected),
            ("Home", ConnectionState::Disconnected),
            ("Lab", ConnectionState::Connected),
        ]));
        client.disconnect_all().unwrap();
        assert_eq!(
            client.0.calls(),
            vec![
                Call::Disconnect("Work".to_string()),
                Call::Disconnect("Lab".to_string())
            ]
        );
    }

    #[test]
    fn test_default_disconnect_all_stops_on_error() {
        let mut fake = FakeAutomation::with(&[("Work", ConnectionState::Connected)]);
        fake.fail_actions = true;
        let client = DefaultOnly(fake);
        assert!(client.disconnect_all().is_err());
    }
}
