//! Domain types shared by the CLI and the automation adapters.

mod connection;

pub use connection::{Connection, ConnectionState};
