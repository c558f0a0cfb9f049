//! Client-side calls to the SmartControl+ backend
//!
//! Outside a `csr` build for `wasm32` there is no browser to fetch from, and
//! every call fails with a network error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use smartcontrol_core::wire::{
    self, ActionResponse, CommandRequest, ConnectRequest, DiscoverRequest, LoginRequest,
    LoginResponse, TvListResponse,
};
use smartcontrol_core::{Id, TransportError, DEFAULT_API_URL};

/// Backend base URL, fixed when the bundle is built
pub fn api_url() -> &'static str {
    option_env!("SMARTCONTROL_API_URL").unwrap_or(DEFAULT_API_URL)
}

pub async fn login(request: &LoginRequest) -> Result<LoginResponse, TransportError> {
    post(wire::LOGIN_PATH, request).await
}

pub async fn user_tvs(user_id: &Id) -> Result<TvListResponse, TransportError> {
    get(&wire::user_tvs_url(api_url(), user_id)).await
}

pub async fn discover_tv(request: &DiscoverRequest) -> Result<ActionResponse, TransportError> {
    post(wire::DISCOVER_TV_PATH, request).await
}

pub async fn connect_tv(request: &ConnectRequest) -> Result<ActionResponse, TransportError> {
    post(wire::CONNECT_TV_PATH, request).await
}

pub async fn send_command(request: &CommandRequest) -> Result<ActionResponse, TransportError> {
    post(wire::SEND_COMMAND_PATH, request).await
}

async fn get<R: DeserializeOwned>(url: &str) -> Result<R, TransportError> {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| TransportError::Network(format!("{}", e)))?;
        tracing::debug!("GET {} -> {}", url, resp.status());

        resp.json()
            .await
            .map_err(|e| TransportError::Decode(format!("{}", e)))
    }

    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    {
        Err(unavailable(url))
    }
}

async fn post<B: Serialize, R: DeserializeOwned>(path: &str, body: &B) -> Result<R, TransportError> {
    let url = wire::endpoint(api_url(), path);

    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        let resp = gloo_net::http::Request::post(&url)
            .json(body)
            .map_err(|e| TransportError::Network(format!("{}", e)))?
            .send()
            .await
            .map_err(|e| TransportError::Network(format!("{}", e)))?;
        tracing::debug!("POST {} -> {}", url, resp.status());

        resp.json()
            .await
            .map_err(|e| TransportError::Decode(format!("{}", e)))
    }

    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    {
        let _ = body;
        Err(unavailable(&url))
    }
}

#[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
fn unavailable(url: &str) -> TransportError {
    TransportError::Network(format!("{}: no browser to fetch from", url))
}
