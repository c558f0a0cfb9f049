//! Command-line driver for the login and dashboard views
//!
//! Carries out the effects the views ask for, one at a time, and feeds each
//! outcome back until the view has nothing left to do.

use std::collections::VecDeque;

use smartcontrol_core::{
    Dashboard, DashboardEffect, DashboardEvent, LoginEffect, LoginEvent, LoginView, SessionStore,
};

use crate::api::BackendApi;

#[derive(Debug)]
pub struct Remote<S> {
    api: BackendApi,
    store: S,
}

impl<S: SessionStore> Remote<S> {
    pub fn new(api: BackendApi, store: S) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Sign in, persisting the session on success
    ///
    /// The returned view tells whether it worked: it is either signed in or
    /// back to editing with the error to show.
    pub async fn login(&self, email: &str, password: &str) -> crate::Result<LoginView> {
        let mut view = LoginView::with_credentials(email, password);
        let mut events = VecDeque::from([LoginEvent::Submit]);

        while let Some(event) = events.pop_front() {
            for effect in view.handle(event) {
                match effect {
                    LoginEffect::PostLogin(request) => {
                        let event = match self.api.login(&request).await {
                            Ok(response) => LoginEvent::Completed(response),
                            Err(e) => LoginEvent::Failed(e.into()),
                        };
                        events.push_back(event);
                    }
                    LoginEffect::PersistSession(session) => self.store.save(&session)?,
                    LoginEffect::NavigateToDashboard => {
                        tracing::debug!("Login finished, dashboard is available")
                    }
                }
            }
        }

        Ok(view)
    }

    /// Mount the dashboard with the stored session and load its TVs
    pub async fn open_dashboard(&self) -> crate::Result<Dashboard> {
        let (mut dashboard, effects) = Dashboard::mount(self.store.load());
        self.run(&mut dashboard, effects).await?;
        Ok(dashboard)
    }

    pub async fn dispatch(
        &self,
        dashboard: &mut Dashboard,
        event: DashboardEvent,
    ) -> crate::Result<()> {
        let effects = dashboard.handle(event);
        self.run(dashboard, effects).await
    }

    async fn run(
        &self,
        dashboard: &mut Dashboard,
        effects: Vec<DashboardEffect>,
    ) -> crate::Result<()> {
        let mut pending: VecDeque<DashboardEffect> = effects.into();
        while let Some(effect) = pending.pop_front() {
            if let Some(event) = self.execute(effect).await? {
                pending.extend(dashboard.handle(event));
            }
        }
        Ok(())
    }

    async fn execute(&self, effect: DashboardEffect) -> crate::Result<Option<DashboardEvent>> {
        let event = match effect {
            DashboardEffect::RedirectToLogin => {
                tracing::debug!("Dashboard requires a session");
                return Ok(None);
            }
            DashboardEffect::ClearSession => {
                self.store.clear()?;
                return Ok(None);
            }
            DashboardEffect::FetchTvs { user_id } => match self.api.user_tvs(&user_id).await {
                Ok(response) => DashboardEvent::TvsLoaded(response),
                Err(e) => DashboardEvent::TvsFailed(e.into()),
            },
            DashboardEffect::PostDiscover(request) => {
                match self.api.discover_tv(&request).await {
                    Ok(response) => DashboardEvent::DiscoverCompleted(response),
                    Err(e) => DashboardEvent::DiscoverFailed(e.into()),
                }
            }
            DashboardEffect::PostConnect(request) => match self.api.connect_tv(&request).await {
                Ok(response) => DashboardEvent::ConnectCompleted(response),
                Err(e) => DashboardEvent::ConnectFailed(e.into()),
            },
            DashboardEffect::PostCommand(request) => {
                match self.api.send_command(&request).await {
                    Ok(response) => DashboardEvent::CommandCompleted(response),
                    Err(e) => DashboardEvent::CommandFailed(e.into()),
                }
            }
        };
        Ok(Some(event))
    }
}
