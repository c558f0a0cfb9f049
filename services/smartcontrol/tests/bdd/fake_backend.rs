//! In-process stand-in for the SmartControl+ backend
//!
//! Answers each endpoint from configurable JSON replies and records every
//! request it receives.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use smartcontrol::io::{HttpClient, HttpResponse};
use smartcontrol::SmartControlError;

pub const BASE_URL: &str = "http://backend.test";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        let path = self.url.strip_prefix(BASE_URL).unwrap_or(&self.url);
        path.split('?').next().unwrap_or(path)
    }
}

#[derive(Debug)]
struct Replies {
    unreachable: bool,
    login: Value,
    tvs: Vec<Value>,
    tv_list_success: bool,
    discover: Value,
    connect: Value,
    command: Value,
}

impl Default for Replies {
    fn default() -> Self {
        Self {
            unreachable: false,
            login: json!({"success": false, "error": "Usuário não encontrado"}),
            tvs: Vec::new(),
            tv_list_success: true,
            discover: json!({"success": false, "message": "Nenhuma TV encontrada"}),
            connect: json!({"success": true, "message": "TV conectada"}),
            command: json!({"success": true, "message": "Comando enviado"}),
        }
    }
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    replies: Mutex<Replies>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeBackend {
    pub fn set_unreachable(&self) {
        self.replies.lock().unwrap().unreachable = true;
    }

    pub fn set_login_reply(&self, reply: Value) {
        self.replies.lock().unwrap().login = reply;
    }

    /// Register a TV; ids are assigned in order starting at 1
    pub fn add_tv(&self, name: &str, brand: &str, ip: Option<&str>) {
        let mut replies = self.replies.lock().unwrap();
        let id = replies.tvs.len() + 1;
        replies.tvs.push(json!({
            "id": id,
            "tv_name": name,
            "tv_brand": brand,
            "tv_ip": ip,
        }));
    }

    pub fn fail_tv_list(&self) {
        self.replies.lock().unwrap().tv_list_success = false;
    }

    pub fn set_discover_reply(&self, reply: Value) {
        self.replies.lock().unwrap().discover = reply;
    }

    pub fn set_connect_reply(&self, reply: Value) {
        self.replies.lock().unwrap().connect = reply;
    }

    pub fn set_command_reply(&self, reply: Value) {
        self.replies.lock().unwrap().command = reply;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path() == path)
            .collect()
    }

    fn answer(&self, request: RecordedRequest) -> smartcontrol::Result<HttpResponse> {
        let path = request.path().to_string();
        self.requests.lock().unwrap().push(request);

        let replies = self.replies.lock().unwrap();
        if replies.unreachable {
            return Err(SmartControlError::Http(format!(
                "{} failed: connection refused",
                path
            )));
        }

        let body = match path.as_str() {
            "/api/login" => replies.login.clone(),
            "/api/user-tvs" => json!({"success": replies.tv_list_success, "tvs": replies.tvs}),
            "/api/discover-tv" => replies.discover.clone(),
            "/api/connect-tv" => replies.connect.clone(),
            "/api/send-command" => replies.command.clone(),
            _ => {
                return Ok(HttpResponse {
                    status: 404,
                    body: "Not Found".to_string(),
                })
            }
        };

        Ok(HttpResponse {
            status: 200,
            body: body.to_string(),
        })
    }
}

#[async_trait]
impl HttpClient for FakeBackend {
    async fn get(&self, url: &str) -> smartcontrol::Result<HttpResponse> {
        self.answer(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            body: None,
        })
    }

    async fn post_json(&self, url: &str, body: &Value) -> smartcontrol::Result<HttpResponse> {
        self.answer(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            body: Some(body.clone()),
        })
    }
}
