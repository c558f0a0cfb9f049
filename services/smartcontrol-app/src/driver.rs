//! Browser drivers for the view state machines
//!
//! Each driver owns its view in a signal. Events go through `dispatch`, and
//! the effects the view hands back are carried out here: requests run as
//! local tasks whose outcome is dispatched in turn, session effects go to
//! `localStorage`, and navigation raises the `redirect` flag the page turns
//! into a route change.

use leptos::prelude::*;
use leptos::task::spawn_local;
use smartcontrol_core::{
    Dashboard, DashboardEffect, DashboardEvent, LoginEffect, LoginEvent, LoginView, SessionStore,
};

use crate::api;
use crate::storage::LocalStorageSessionStore;

#[derive(Debug, Clone, Copy)]
pub struct LoginDriver {
    pub view: RwSignal<LoginView>,
    pub redirect: RwSignal<bool>,
}

impl LoginDriver {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(LoginView::new()),
            redirect: RwSignal::new(false),
        }
    }

    pub fn dispatch(self, event: LoginEvent) {
        // The page may be gone by the time a reply arrives
        let Some(effects) = self.view.try_update(|view| view.handle(event)) else {
            return;
        };
        for effect in effects {
            self.execute(effect);
        }
    }

    fn execute(self, effect: LoginEffect) {
        match effect {
            LoginEffect::PostLogin(request) => spawn_local(async move {
                let event = match api::login(&request).await {
                    Ok(response) => LoginEvent::Completed(response),
                    Err(e) => LoginEvent::Failed(e),
                };
                self.dispatch(event);
            }),
            LoginEffect::PersistSession(session) => {
                if let Err(e) = LocalStorageSessionStore.save(&session) {
                    tracing::warn!("Could not store session: {}", e);
                }
            }
            LoginEffect::NavigateToDashboard => self.redirect.set(true),
        }
    }
}

impl Default for LoginDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DashboardDriver {
    pub view: RwSignal<Dashboard>,
    pub redirect: RwSignal<bool>,
}

impl DashboardDriver {
    /// Mount the dashboard with the session found in `localStorage`
    pub fn mount() -> Self {
        let (dashboard, effects) = Dashboard::mount(LocalStorageSessionStore.load());
        let driver = Self {
            view: RwSignal::new(dashboard),
            redirect: RwSignal::new(false),
        };
        for effect in effects {
            driver.execute(effect);
        }
        driver
    }

    pub fn dispatch(self, event: DashboardEvent) {
        let Some(effects) = self.view.try_update(|view| view.handle(event)) else {
            return;
        };
        for effect in effects {
            self.execute(effect);
        }
    }

    fn execute(self, effect: DashboardEffect) {
        match effect {
            DashboardEffect::RedirectToLogin => self.redirect.set(true),
            DashboardEffect::ClearSession => {
                if let Err(e) = LocalStorageSessionStore.clear() {
                    tracing::warn!("Could not clear session: {}", e);
                }
            }
            DashboardEffect::FetchTvs { user_id } => spawn_local(async move {
                let event = match api::user_tvs(&user_id).await {
                    Ok(response) => DashboardEvent::TvsLoaded(response),
                    Err(e) => DashboardEvent::TvsFailed(e),
                };
                self.dispatch(event);
            }),
            DashboardEffect::PostDiscover(request) => spawn_local(async move {
                let event = match api::discover_tv(&request).await {
                    Ok(response) => DashboardEvent::DiscoverCompleted(response),
                    Err(e) => DashboardEvent::DiscoverFailed(e),
                };
                self.dispatch(event);
            }),
            DashboardEffect::PostConnect(request) => spawn_local(async move {
                let event = match api::connect_tv(&request).await {
                    Ok(response) => DashboardEvent::ConnectCompleted(response),
                    Err(e) => DashboardEvent::ConnectFailed(e),
                };
                self.dispatch(event);
            }),
            DashboardEffect::PostCommand(request) => spawn_local(async move {
                let event = match api::send_command(&request).await {
                    Ok(response) => DashboardEvent::CommandCompleted(response),
                    Err(e) => DashboardEvent::CommandFailed(e),
                };
                self.dispatch(event);
            }),
        }
    }
}
