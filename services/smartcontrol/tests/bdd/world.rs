//! BDD test world for the SmartControl+ service

use std::sync::Arc;

use cucumber::World;
use smartcontrol::api::BackendApi;
use smartcontrol::remote::Remote;
use smartcontrol_core::{Dashboard, DashboardEvent, LoginView, MemorySessionStore, Session};

#[path = "fake_backend.rs"]
pub mod fake_backend;

use fake_backend::FakeBackend;

#[derive(Debug, Default, World)]
pub struct SmartControlWorld {
    pub backend: Arc<FakeBackend>,
    pub stored_session: Option<Session>,
    pub remote: Option<Remote<MemorySessionStore>>,
    pub login_view: Option<LoginView>,
    pub dashboard: Option<Dashboard>,
}

impl SmartControlWorld {
    /// The remote under test, created on first use from the configured
    /// backend and stored session
    pub fn remote(&mut self) -> &Remote<MemorySessionStore> {
        let backend = Arc::clone(&self.backend);
        let stored_session = self.stored_session.clone();
        self.remote.get_or_insert_with(|| {
            let api = BackendApi::new(fake_backend::BASE_URL, backend);
            let store = match &stored_session {
                Some(session) => MemorySessionStore::with_session(session),
                None => MemorySessionStore::new(),
            };
            Remote::new(api, store)
        })
    }

    pub fn dashboard(&self) -> &Dashboard {
        self.dashboard.as_ref().expect("dashboard not opened")
    }

    pub async fn open_dashboard(&mut self) {
        let dashboard = self
            .remote()
            .open_dashboard()
            .await
            .expect("opening dashboard failed");
        self.dashboard = Some(dashboard);
    }

    pub async fn dispatch(&mut self, event: DashboardEvent) {
        let mut dashboard = self.dashboard.take().expect("dashboard not opened");
        self.remote()
            .dispatch(&mut dashboard, event)
            .await
            .expect("dispatch failed");
        self.dashboard = Some(dashboard);
    }
}
