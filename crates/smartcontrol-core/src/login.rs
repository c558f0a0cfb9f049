//! Login view state machine

use crate::error::TransportError;
use crate::messages;
use crate::model::User;
use crate::session::Session;
use crate::wire::{LoginRequest, LoginResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginPhase {
    /// Form is editable; `error` is the last failure shown above it
    Editing { error: Option<String> },
    /// A login request is in flight
    Submitting,
    /// Terminal: the user is signed in and the view has handed off
    SignedIn(User),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginEvent {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    Completed(LoginResponse),
    Failed(TransportError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginEffect {
    PostLogin(LoginRequest),
    PersistSession(Session),
    NavigateToDashboard,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginView {
    email: String,
    password: String,
    phase: LoginPhase,
}

impl Default for LoginView {
    /// Pre-filled with the demo account
    fn default() -> Self {
        Self::with_credentials(messages::DEMO_EMAIL, messages::DEMO_PASSWORD)
    }
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            phase: LoginPhase::Editing { error: None },
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn phase(&self) -> &LoginPhase {
        &self.phase
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoginPhase::Editing { error } => error.as_deref(),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Entrando..."
        } else {
            "Entrar"
        }
    }

    pub fn handle(&mut self, event: LoginEvent) -> Vec<LoginEffect> {
        if matches!(self.phase, LoginPhase::SignedIn(_)) {
            tracing::debug!("Login view already signed in, ignoring {:?}", event);
            return Vec::new();
        }

        match event {
            LoginEvent::EmailChanged(email) => {
                self.email = email;
                Vec::new()
            }
            LoginEvent::PasswordChanged(password) => {
                self.password = password;
                Vec::new()
            }
            LoginEvent::Submit => {
                if self.is_submitting() {
                    return Vec::new();
                }
                self.phase = LoginPhase::Submitting;
                vec![LoginEffect::PostLogin(LoginRequest {
                    email: self.email.clone(),
                    password: self.password.clone(),
                })]
            }
            LoginEvent::Completed(response) => {
                if !self.is_submitting() {
                    return Vec::new();
                }
                self.complete(response)
            }
            LoginEvent::Failed(e) => {
                if !self.is_submitting() {
                    return Vec::new();
                }
                tracing::debug!("Login request failed: {}", e);
                self.phase = LoginPhase::Editing {
                    error: Some(messages::LOGIN_CONNECTION_ERROR.to_string()),
                };
                Vec::new()
            }
        }
    }

    fn complete(&mut self, response: LoginResponse) -> Vec<LoginEffect> {
        match (response.success, response.user) {
            (true, Some(user)) => {
                tracing::info!("Signed in as {}", user.email);
                self.phase = LoginPhase::SignedIn(user.clone());
                vec![
                    LoginEffect::PersistSession(Session::new(user)),
                    LoginEffect::NavigateToDashboard,
                ]
            }
            (true, None) => {
                tracing::debug!("Login reply reported success without a user");
                self.phase = LoginPhase::Editing {
                    error: Some(messages::LOGIN_CONNECTION_ERROR.to_string()),
                };
                Vec::new()
            }
            (false, _) => {
                let error = response
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| messages::LOGIN_REJECTED.to_string());
                self.phase = LoginPhase::Editing { error: Some(error) };
                Vec::new()
            }
        }
    }
}
