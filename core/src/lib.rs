//! Blocking client for a REST contacts API.
//!
//! # Overview
//! Four operations (`fetch_contacts`, `create_contact`, `update_contact`,
//! `delete_contact`) each issue a single HTTP request and return an
//! `ApiResponse { data, status }` envelope. Failures are logged through
//! `tracing` and returned to the caller unchanged.
//!
//! # Design
//! - `ContactsClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network.
//! - `Transport` executes the round-trip; `UreqTransport` is the default.
//! - `ContactsApi` ties the two together and owns the logging.
//! - Base URL and default headers come from an explicit `ClientConfig`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::ContactsApi;
pub use client::ContactsClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{ApiResponse, Contact};
