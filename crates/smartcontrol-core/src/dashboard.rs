//! Dashboard view state machine
//!
//! Tracks the signed-in user's TVs, the current selection, the manual-connect
//! form and the busy flags of the individual actions. Each action is started
//! by its own event and finishes with a `*Completed` or `*Failed` event fed
//! back by the driver.

use crate::command::RemoteCommand;
use crate::error::TransportError;
use crate::messages;
use crate::model::{Id, Tv, User};
use crate::session::Session;
use crate::wire::{
    ActionResponse, CommandRequest, ConnectRequest, DiscoverRequest, TvListResponse,
};

/// Observable state of the view, derived from its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardStatus {
    /// No session; the view has redirected to login
    SignedOut,
    /// Signed in, TV list not fetched yet
    Loading,
    /// TV list known, nothing selected
    NoneSelected,
    /// Selected TV has an address
    Connected,
    /// Selected TV has no address
    Unconnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectField {
    Name,
    Brand,
    Ip,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    TvsLoaded(TvListResponse),
    TvsFailed(TransportError),
    SelectTv(Id),
    Discover,
    DiscoverCompleted(ActionResponse),
    DiscoverFailed(TransportError),
    ToggleConnectForm,
    ConnectFieldChanged(ConnectField, String),
    SubmitConnect,
    ConnectCompleted(ActionResponse),
    ConnectFailed(TransportError),
    SendCommand(RemoteCommand),
    CommandCompleted(ActionResponse),
    CommandFailed(TransportError),
    DismissNotice,
    Logout,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEffect {
    RedirectToLogin,
    FetchTvs { user_id: Id },
    PostDiscover(DiscoverRequest),
    PostConnect(ConnectRequest),
    PostCommand(CommandRequest),
    ClearSession,
}

/// Manual-connect form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectForm {
    pub open: bool,
    pub name: String,
    pub brand: String,
    pub ip: String,
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    session: Option<Session>,
    tvs: Vec<Tv>,
    tvs_loaded: bool,
    selected: Option<Id>,
    discovering: bool,
    pending_commands: usize,
    connect_form: ConnectForm,
    notice: Option<String>,
}

impl Dashboard {
    /// Start the view with whatever session was persisted
    ///
    /// Without a session the view is terminal and only asks to be sent back
    /// to login.
    pub fn mount(session: Option<Session>) -> (Self, Vec<DashboardEffect>) {
        let effects = match &session {
            Some(session) => {
                tracing::debug!("Dashboard mounted for {}", session.user.email);
                vec![DashboardEffect::FetchTvs {
                    user_id: session.user.id.clone(),
                }]
            }
            None => {
                tracing::debug!("Dashboard mounted without a session");
                vec![DashboardEffect::RedirectToLogin]
            }
        };

        let dashboard = Self {
            session,
            tvs: Vec::new(),
            tvs_loaded: false,
            selected: None,
            discovering: false,
            pending_commands: 0,
            connect_form: ConnectForm::default(),
            notice: None,
        };
        (dashboard, effects)
    }

    pub fn status(&self) -> DashboardStatus {
        if self.session.is_none() {
            return DashboardStatus::SignedOut;
        }
        if !self.tvs_loaded {
            return DashboardStatus::Loading;
        }
        match self.selected_tv() {
            None => DashboardStatus::NoneSelected,
            Some(tv) if tv.is_connected() => DashboardStatus::Connected,
            Some(_) => DashboardStatus::Unconnected,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn tvs(&self) -> &[Tv] {
        &self.tvs
    }

    pub fn selected_tv(&self) -> Option<&Tv> {
        let selected = self.selected.as_ref()?;
        self.tvs.iter().find(|tv| &tv.id == selected)
    }

    /// Look a TV up by the textual form of its id, as typed by a user
    pub fn find_tv(&self, id: &str) -> Option<&Tv> {
        self.tvs.iter().find(|tv| tv.id.to_string() == id)
    }

    pub fn is_selected(&self, tv: &Tv) -> bool {
        self.selected.as_ref() == Some(&tv.id)
    }

    pub fn is_discovering(&self) -> bool {
        self.discovering
    }

    pub fn is_sending(&self) -> bool {
        self.pending_commands > 0
    }

    pub fn connect_form(&self) -> &ConnectForm {
        &self.connect_form
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn handle(&mut self, event: DashboardEvent) -> Vec<DashboardEffect> {
        let Some(user_id) = self.session.as_ref().map(|s| s.user.id.clone()) else {
            tracing::debug!("Dashboard signed out, ignoring {:?}", event);
            return Vec::new();
        };

        match event {
            DashboardEvent::TvsLoaded(response) => {
                self.tvs_loaded = true;
                if response.success {
                    tracing::debug!("Loaded {} TVs", response.tvs.len());
                    self.selected = response.tvs.first().map(|tv| tv.id.clone());
                    self.tvs = response.tvs;
                } else {
                    self.show(response.text().unwrap_or(messages::TV_LIST_FAILED));
                }
                Vec::new()
            }
            DashboardEvent::TvsFailed(e) => {
                tracing::debug!("Loading TVs failed: {}", e);
                self.tvs_loaded = true;
                self.show(messages::TV_LIST_FAILED);
                Vec::new()
            }
            DashboardEvent::SelectTv(id) => {
                if self.tvs.iter().any(|tv| tv.id == id) {
                    self.selected = Some(id);
                }
                Vec::new()
            }
            DashboardEvent::Discover => {
                if self.discovering {
                    return Vec::new();
                }
                self.discovering = true;
                vec![DashboardEffect::PostDiscover(DiscoverRequest { user_id })]
            }
            DashboardEvent::DiscoverCompleted(response) => {
                if !self.discovering {
                    return Vec::new();
                }
                self.discovering = false;
                self.notice = response.text().map(str::to_string);
                if response.success {
                    vec![DashboardEffect::FetchTvs { user_id }]
                } else {
                    Vec::new()
                }
            }
            DashboardEvent::DiscoverFailed(e) => {
                tracing::debug!("Discovery failed: {}", e);
                if !self.discovering {
                    return Vec::new();
                }
                self.discovering = false;
                self.show(messages::DISCOVERY_FAILED);
                Vec::new()
            }
            DashboardEvent::ToggleConnectForm => {
                if self.connect_form.open {
                    self.connect_form = ConnectForm::default();
                } else {
                    self.connect_form.open = true;
                }
                Vec::new()
            }
            DashboardEvent::ConnectFieldChanged(field, value) => {
                match field {
                    ConnectField::Name => self.connect_form.name = value,
                    ConnectField::Brand => self.connect_form.brand = value,
                    ConnectField::Ip => self.connect_form.ip = value,
                }
                Vec::new()
            }
            DashboardEvent::SubmitConnect => self.submit_connect(user_id),
            DashboardEvent::ConnectCompleted(response) => {
                // The form was closed while the request was in flight
                if !self.connect_form.submitting {
                    return Vec::new();
                }
                self.connect_form.submitting = false;
                self.notice = response.text().map(str::to_string);
                if response.success {
                    self.connect_form = ConnectForm::default();
                    vec![DashboardEffect::FetchTvs { user_id }]
                } else {
                    Vec::new()
                }
            }
            DashboardEvent::ConnectFailed(e) => {
                tracing::debug!("Manual connect failed: {}", e);
                if !self.connect_form.submitting {
                    return Vec::new();
                }
                self.connect_form.submitting = false;
                self.show(messages::CONNECT_FAILED);
                Vec::new()
            }
            DashboardEvent::SendCommand(command) => self.send_command(command),
            DashboardEvent::CommandCompleted(response) => {
                if self.pending_commands == 0 {
                    return Vec::new();
                }
                self.pending_commands -= 1;
                self.notice = response.text().map(str::to_string);
                Vec::new()
            }
            DashboardEvent::CommandFailed(e) => {
                tracing::debug!("Command failed: {}", e);
                if self.pending_commands == 0 {
                    return Vec::new();
                }
                self.pending_commands -= 1;
                self.show(messages::COMMAND_FAILED);
                Vec::new()
            }
            DashboardEvent::DismissNotice => {
                self.notice = None;
                Vec::new()
            }
            DashboardEvent::Logout => {
                tracing::info!("Signing out");
                let (signed_out, _) = Dashboard::mount(None);
                *self = signed_out;
                vec![DashboardEffect::ClearSession, DashboardEffect::RedirectToLogin]
            }
        }
    }

    fn submit_connect(&mut self, user_id: Id) -> Vec<DashboardEffect> {
        if self.connect_form.submitting {
            return Vec::new();
        }
        let name = self.connect_form.name.trim();
        let ip = self.connect_form.ip.trim();
        if name.is_empty() || ip.is_empty() {
            self.show(messages::CONNECT_FORM_INCOMPLETE);
            return Vec::new();
        }
        let brand = self.connect_form.brand.trim();

        let request = ConnectRequest {
            user_id,
            tv_ip: ip.to_string(),
            tv_name: name.to_string(),
            tv_brand: (!brand.is_empty()).then(|| brand.to_string()),
        };
        self.connect_form.submitting = true;
        vec![DashboardEffect::PostConnect(request)]
    }

    fn send_command(&mut self, command: RemoteCommand) -> Vec<DashboardEffect> {
        let target = self.selected_tv().and_then(|tv| {
            tv.ip()
                .map(|ip| (ip.to_string(), tv.brand().map(str::to_string)))
        });
        let Some((tv_ip, tv_brand)) = target else {
            self.show(messages::TV_NOT_CONNECTED);
            return Vec::new();
        };

        let request = CommandRequest {
            tv_ip,
            command,
            tv_brand,
        };
        tracing::debug!("Sending {} to {}", command, request.tv_ip);
        self.pending_commands += 1;
        vec![DashboardEffect::PostCommand(request)]
    }

    fn show(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }
}
