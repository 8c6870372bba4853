//! Stateless HTTP request builder and response parser for the contacts API.
//!
//! # Design
//! `ContactsClient` holds only its `ClientConfig` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. A `Transport` executes the round-trip in between.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ApiResponse, Contact};

/// Synchronous, stateless client for the contacts API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone, Default)]
pub struct ContactsClient {
    config: ClientConfig,
}

impl ContactsClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn build_fetch_contacts(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/contacts".to_string(), None)
    }

    pub fn build_create_contact(&self, contact: &Contact) -> Result<HttpRequest, ApiError> {
        let body = encode(contact)?;
        Ok(self.request(HttpMethod::Post, "/contacts".to_string(), Some(body)))
    }

    /// Fails with `ApiError::MissingId` before encoding anything when the
    /// contact has not been assigned an id.
    pub fn build_update_contact(&self, contact: &Contact) -> Result<HttpRequest, ApiError> {
        let id = contact.id.ok_or(ApiError::MissingId)?;
        let body = encode(contact)?;
        Ok(self.request(HttpMethod::Put, format!("/contacts/{id}"), Some(body)))
    }

    pub fn build_delete_contact(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("/contacts/{id}"), None)
    }

    pub fn parse_fetch_contacts(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<Vec<Contact>>, ApiError> {
        decode(response)
    }

    pub fn parse_create_contact(&self, response: HttpResponse) -> Result<ApiResponse<Contact>, ApiError> {
        decode(response)
    }

    pub fn parse_update_contact(&self, response: HttpResponse) -> Result<ApiResponse<Contact>, ApiError> {
        decode(response)
    }

    /// The body of a delete response is not inspected.
    pub fn parse_delete_contact(&self, response: HttpResponse) -> Result<ApiResponse<()>, ApiError> {
        check_status(&response)?;
        Ok(ApiResponse {
            data: (),
            status: response.status,
        })
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.config.base_url()),
            headers: self.config.headers().to_vec(),
            body,
        }
    }
}

fn encode(contact: &Contact) -> Result<String, ApiError> {
    serde_json::to_string(contact).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<ApiResponse<T>, ApiError> {
    check_status(&response)?;
    let data = serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
    Ok(ApiResponse {
        data,
        status: response.status,
    })
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
