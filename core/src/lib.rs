//! Synchronous client core for the books API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). On top of the client sits
//! `BookPage`: the create/edit form, the book table and the status message,
//! turning user events into `Command`s for the host to execute.
//!
//! # Design
//! - `BookClient` is stateless; it holds only `base_url`.
//! - Each call is split into `build_*` and `parse_*`, so the I/O boundary is
//!   explicit.
//! - The client owns no authoritative state: every successful mutation is
//!   followed by a full list refresh.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod messages;
pub mod page;
pub mod table;
pub mod types;

pub use client::BookClient;
pub use error::{ApiError, FormError};
pub use form::{BookForm, Field, FormMode};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use messages::{Locale, Message};
pub use page::{BookPage, Command, Pending};
pub use table::BookTable;
pub use types::{Book, BookId, BookInput};
