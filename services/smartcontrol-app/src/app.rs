//! Main App component

use crate::components::dashboard_page::DashboardPage;
use crate::components::login_page::LoginPage;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="SmartControl+" />
        <Router>
            <Routes fallback=|| view! { <div class="loading">"Página não encontrada"</div> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/dashboard") view=DashboardPage />
            </Routes>
        </Router>
    }
}
