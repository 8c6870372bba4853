//! The four contacts operations, each one request end to end.
//!
//! # Design
//! `ContactsApi` glues `ContactsClient` (build/parse) to a `Transport`
//! (execute). Every failure is logged once at `ERROR` with a fixed
//! per-operation message and then handed back to the caller untouched. No
//! retries, no fallbacks.

use tracing::{debug, error};

use crate::client::ContactsClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{ApiResponse, Contact};

/// Client for the contacts REST API.
///
/// Holds no mutable state; calls from multiple threads are independent of
/// each other.
#[derive(Debug, Clone)]
pub struct ContactsApi<T = UreqTransport> {
    client: ContactsClient,
    transport: T,
}

impl ContactsApi<UreqTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl Default for ContactsApi<UreqTransport> {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl<T: Transport> ContactsApi<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            client: ContactsClient::new(config),
            transport,
        }
    }

    pub fn client(&self) -> &ContactsClient {
        &self.client
    }

    /// `GET /contacts`.
    pub fn fetch_contacts(&self) -> Result<ApiResponse<Vec<Contact>>, ApiError> {
        let result = self
            .send(self.client.build_fetch_contacts())
            .and_then(|resp| self.client.parse_fetch_contacts(resp));
        logged("Error fetching contacts", result)
    }

    /// `POST /contacts`. The server assigns the id of the returned contact.
    pub fn create_contact(&self, contact: &Contact) -> Result<ApiResponse<Contact>, ApiError> {
        let result = self
            .client
            .build_create_contact(contact)
            .and_then(|req| self.send(req))
            .and_then(|resp| self.client.parse_create_contact(resp));
        logged("Error creating contact", result)
    }

    /// `PUT /contacts/{id}` with the full contact. A contact without an id
    /// fails with `ApiError::MissingId` and nothing is sent.
    pub fn update_contact(&self, contact: &Contact) -> Result<ApiResponse<Contact>, ApiError> {
        let result = self
            .client
            .build_update_contact(contact)
            .and_then(|req| self.send(req))
            .and_then(|resp| self.client.parse_update_contact(resp));
        logged("Error updating contact", result)
    }

    /// `DELETE /contacts/{id}`.
    pub fn delete_contact(&self, id: u64) -> Result<ApiResponse<()>, ApiError> {
        let result = self
            .send(self.client.build_delete_contact(id))
            .and_then(|resp| self.client.parse_delete_contact(resp));
        logged("Error deleting contact", result)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}

fn logged<R>(message: &'static str, result: Result<R, ApiError>) -> Result<R, ApiError> {
    result.inspect_err(|err| error!(error = %err, "{message}"))
}
