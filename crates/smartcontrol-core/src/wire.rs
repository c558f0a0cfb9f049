//! Request and response bodies of the SmartControl+ backend
//!
//! Field names follow the backend: request bodies are camelCase, TV records
//! are snake_case. Replies are read leniently since only a few fields matter.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::command::RemoteCommand;
use crate::model::{Id, Tv, User};

pub const LOGIN_PATH: &str = "/api/login";
pub const USER_TVS_PATH: &str = "/api/user-tvs";
pub const DISCOVER_TV_PATH: &str = "/api/discover-tv";
pub const CONNECT_TV_PATH: &str = "/api/connect-tv";
pub const SEND_COMMAND_PATH: &str = "/api/send-command";

/// Join a base URL and an endpoint path
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// URL listing the TVs of `user_id`
pub fn user_tvs_url(base_url: &str, user_id: &Id) -> String {
    let user_id = user_id.to_string();
    format!(
        "{}?user_id={}",
        endpoint(base_url, USER_TVS_PATH),
        utf8_percent_encode(&user_id, NON_ALPHANUMERIC)
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TvListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub tvs: Vec<Tv>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverRequest {
    pub user_id: Id,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
    pub user_id: Id,
    pub tv_ip: String,
    pub tv_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tv_brand: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
    pub tv_ip: String,
    pub command: RemoteCommand,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tv_brand: Option<String>,
}

/// Reply of the discover, connect and send-command endpoints
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ActionResponse {
    /// Text to show the user: `message`, falling back to `error`
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|m| !m.is_empty())
    }
}

impl TvListResponse {
    pub fn text(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|m| !m.is_empty())
    }
}
