//! Typed client for the SmartControl+ backend

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use smartcontrol_core::wire::{
    self, ActionResponse, CommandRequest, ConnectRequest, DiscoverRequest, LoginRequest,
    LoginResponse, TvListResponse,
};
use smartcontrol_core::Id;

use crate::io::{HttpClient, HttpResponse};

/// Calls the backend's JSON endpoints
///
/// Replies are decoded whatever their HTTP status, since the backend reports
/// failures in the body.
pub struct BackendApi {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for BackendApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendApi")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl BackendApi {
    pub fn new(base_url: &str, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Using backend at {}", base_url);
        Self {
            base_url: base_url.to_string(),
            http,
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> crate::Result<LoginResponse> {
        self.post(wire::LOGIN_PATH, request).await
    }

    pub async fn user_tvs(&self, user_id: &Id) -> crate::Result<TvListResponse> {
        let url = wire::user_tvs_url(&self.base_url, user_id);
        let response = self.http.get(&url).await?;
        decode(&url, response)
    }

    pub async fn discover_tv(&self, request: &DiscoverRequest) -> crate::Result<ActionResponse> {
        self.post(wire::DISCOVER_TV_PATH, request).await
    }

    pub async fn connect_tv(&self, request: &ConnectRequest) -> crate::Result<ActionResponse> {
        self.post(wire::CONNECT_TV_PATH, request).await
    }

    pub async fn send_command(&self, request: &CommandRequest) -> crate::Result<ActionResponse> {
        self.post(wire::SEND_COMMAND_PATH, request).await
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> crate::Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = wire::endpoint(&self.base_url, path);
        let body = serde_json::to_value(body)?;
        let response = self.http.post_json(&url, &body).await?;
        decode(&url, response)
    }
}

fn decode<R: DeserializeOwned>(url: &str, response: HttpResponse) -> crate::Result<R> {
    if !(200..300).contains(&response.status) {
        tracing::debug!("{} answered with status {}", url, response.status);
    }
    Ok(serde_json::from_str(&response.body)?)
}
