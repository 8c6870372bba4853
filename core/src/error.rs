//! Error types for the contacts API client.
//!
//! # Design
//! Every failure an operation can hit gets its own variant so callers can
//! tell a missing record from a dead network from a malformed body. `NotFound`
//! is split out of the generic status variant because callers routinely branch
//! on it.

use thiserror::Error;

/// Errors returned by `ContactsClient` and `ContactsApi`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// An update was requested for a contact the server never assigned an id.
    #[error("contact has no id")]
    MissingId,

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never produced a response (connection refused, DNS, I/O).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
