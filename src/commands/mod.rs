//! REST Command Wrappers
//!
//! Frontend bindings to the chore API, organized by domain.

mod chore;
mod email;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use chore::*;
pub use email::*;

/// Every endpoint the UI talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    GetChore(u32),
    CreateChore,
    UpdateChore(u32),
    DeleteChore(u32),
    CompleteChore(u32),
    TogglePriority(u32),
    UndoComplete(u32),
    EmailChores,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::GetChore(_) => Method::GET,
            Endpoint::UpdateChore(_) => Method::PUT,
            Endpoint::DeleteChore(_) => Method::DELETE,
            Endpoint::CreateChore
            | Endpoint::CompleteChore(_)
            | Endpoint::TogglePriority(_)
            | Endpoint::UndoComplete(_)
            | Endpoint::EmailChores => Method::POST,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::CreateChore => "/api/chores".to_string(),
            Endpoint::GetChore(id) | Endpoint::UpdateChore(id) | Endpoint::DeleteChore(id) => {
                format!("/api/chores/{id}")
            }
            Endpoint::CompleteChore(id) => format!("/api/chores/{id}/complete"),
            Endpoint::TogglePriority(id) => format!("/api/chores/{id}/toggle-priority"),
            Endpoint::UndoComplete(id) => format!("/api/chores/{id}/undo"),
            Endpoint::EmailChores => "/api/email-chores".to_string(),
        }
    }
}

/// HTTP client bound to one API origin
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    fn request(&self, endpoint: &Endpoint) -> RequestBuilder {
        self.http.request(endpoint.method(), self.url(endpoint))
    }

    /// Send a request and decode the success body.
    /// An empty success body decodes as `{}`.
    async fn execute<T: DeserializeOwned>(&self, endpoint: Endpoint, request: RequestBuilder) -> ApiResult<T> {
        log::debug!("[API] {} {}", endpoint.method(), endpoint.path());

        let response = request.send().await.map_err(|e| {
            log::warn!("[API] {} {} failed: {}", endpoint.method(), endpoint.path(), e);
            ApiError::network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), &body);
            log::warn!("[API] {} {} -> {}", endpoint.method(), endpoint.path(), err);
            return Err(err);
        }

        let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
        serde_json::from_str(body).map_err(|e| {
            log::error!("[API] {} {}: bad response body: {}", endpoint.method(), endpoint.path(), e);
            ApiError::decode(e.to_string())
        })
    }
}
