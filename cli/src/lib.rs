//! Terminal front-end for the books API.
//!
//! `book-core` owns the page state; this crate supplies the pieces a host
//! needs around it: configuration, a blocking HTTP transport, and the command
//! loop that renders the table after every action.

pub mod app;
pub mod config;
pub mod transport;

pub use app::{App, Input};
pub use config::Config;
pub use transport::{Transport, UreqTransport};
