//! Domain DTOs for the contacts API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A contact record exchanged with the server.
///
/// `id` is `None` until the server assigns one. An absent id is left out of
/// the serialized body entirely rather than sent as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// A contact that has not been stored yet.
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Envelope around every successful result: the decoded payload plus the
/// HTTP status code the server answered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: u16,
}
