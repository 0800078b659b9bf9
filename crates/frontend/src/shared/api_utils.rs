//! HTTP plumbing for the backend REST API.
//!
//! Every request goes through [`ApiClient`], built from the signed-in
//! [`Session`] and handed explicitly to the resource `api` modules. The
//! client unwraps the `{ success, data, message }` envelope and turns every
//! failure into an [`ApiFailure`].

use crate::shared::config::config;
use contracts::shared::envelope::{ApiEnvelope, ApiFailure};
use contracts::system::auth::Session;
use gloo_net::http::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the configuration when set, otherwise derives
/// it from the current window location and the configured port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let api = &config().api;
    if !api.base_url.is_empty() {
        return api.base_url.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Which identity headers a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    /// `Authorization: Bearer <token>`
    Bearer,
    /// Bearer plus `X-User-ID: <user id>` (profile and cancellation endpoints)
    BearerWithUser,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    session: Option<Session>,
}

impl ApiClient {
    /// Client for endpoints that need no session (sign-in).
    pub fn anonymous() -> Self {
        Self {
            base: api_base(),
            session: None,
        }
    }

    pub fn for_session(session: Session) -> Self {
        Self {
            base: api_base(),
            session: Some(session),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn request(&self, method: Method, path: &str, identity: Identity) -> RequestBuilder {
        let url = format!("{}{}", self.base, path);
        let mut builder = RequestBuilder::new(&url)
            .method(method)
            .header("Accept", "application/json");
        if let Some(session) = &self.session {
            builder = builder.header("Authorization", &session.bearer());
            if identity == Identity::BearerWithUser {
                builder = builder.header("X-User-ID", session.user_id());
            }
        }
        builder
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        identity: Identity,
    ) -> Result<T, ApiFailure> {
        let data = execute(self.request(Method::GET, path, identity), None).await?;
        require(data)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        identity: Identity,
    ) -> Result<T, ApiFailure> {
        let data = execute(self.request(Method::POST, path, identity), Some(encode(body)?)).await?;
        require(data)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        identity: Identity,
    ) -> Result<T, ApiFailure> {
        let data = execute(self.request(Method::PUT, path, identity), Some(encode(body)?)).await?;
        require(data)
    }

    /// POST whose response carries no data worth decoding.
    pub async fn post_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        identity: Identity,
    ) -> Result<(), ApiFailure> {
        execute::<serde_json::Value>(
            self.request(Method::POST, path, identity),
            Some(encode(body)?),
        )
        .await
            .map(|_| ())
    }

    pub async fn delete(&self, path: &str, identity: Identity) -> Result<(), ApiFailure> {
        execute::<serde_json::Value>(self.request(Method::DELETE, path, identity), None)
            .await
            .map(|_| ())
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiFailure> {
    serde_json::to_string(body)
        .map_err(|e| ApiFailure::network(format!("Failed to serialize request: {}", e)))
}

fn require<T>(data: Option<T>) -> Result<T, ApiFailure> {
    data.ok_or_else(|| ApiFailure::decode("response envelope has no data"))
}

/// Sends the request and unwraps the envelope. An empty 2xx body yields
/// `Ok(None)`.
async fn execute<T: DeserializeOwned>(
    builder: RequestBuilder,
    body: Option<String>,
) -> Result<Option<T>, ApiFailure> {
    let request = match body {
        Some(json) => builder.header("Content-Type", "application/json").body(json),
        None => builder.build(),
    }
    .map_err(|e| ApiFailure::network(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiFailure::network(format!("Failed to send request: {}", e)))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiFailure::network(format!("Failed to read response: {}", e)))?;

    if !response.ok() {
        log::warn!("{} {} -> {}", response.url(), status, text);
        return Err(ApiFailure::from_response(status, &text));
    }
    if text.trim().is_empty() {
        return Ok(None);
    }

    let envelope: ApiEnvelope<T> = serde_json::from_str(&text)
        .map_err(|e| ApiFailure::decode(format!("Failed to parse response: {}", e)))?;
    if !envelope.success {
        return Err(ApiFailure::rejected(status, &envelope));
    }
    Ok(envelope.data)
}
