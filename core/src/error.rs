//! Error types for the books client.
//!
//! The API is treated uniformly: any non-2xx response lands in `Status` with
//! the raw code and body for the log. `Transport` is produced by hosts when
//! the round-trip itself fails, so the page can handle both the same way.

/// Errors returned by `BookClient` and by host transports.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("status: {status}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Rejections raised by the form before any request is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("title and isbn are required")]
    MissingRequired,
}
