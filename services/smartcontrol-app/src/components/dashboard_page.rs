//! Dashboard page

use leptos::prelude::*;
use leptos_router::components::Redirect;
use smartcontrol_core::{Dashboard, DashboardEvent};

use crate::components::manual_connect::ManualConnect;
use crate::components::notice::Notice;
use crate::components::remote_pad::RemotePanel;
use crate::components::tv_list::TvList;
use crate::driver::DashboardDriver;

/// TV list on the side, remote for the selected TV in the middle
///
/// Without a stored session the page only redirects back to login.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let driver = DashboardDriver::mount();
    let dashboard = driver.view;
    let email = move || dashboard.with(|d| d.user().map(|u| u.email.clone()).unwrap_or_default());
    let discovering = move || dashboard.with(Dashboard::is_discovering);

    view! {
        <Show when=move || driver.redirect.get()>
            <Redirect path="/" />
        </Show>
        <Show
            when=move || dashboard.with(|d| d.user().is_some())
            fallback=|| view! { <div class="loading">"Carregando..."</div> }
        >
            <div class="dashboard">
                <header class="header">
                    <div class="header-content">
                        <div class="logo">
                            <span class="logo-icon">"📺"</span>
                            <h1>"SmartControl+"</h1>
                        </div>
                        <div class="user-info">
                            <span class="user-email">{email}</span>
                            <button
                                class="logout-button"
                                on:click=move |_| driver.dispatch(DashboardEvent::Logout)
                            >
                                "Sair"
                            </button>
                        </div>
                    </div>
                </header>

                <div class="content">
                    <aside class="card sidebar">
                        <h2>"Minhas TVs"</h2>
                        <button
                            class="discover-button"
                            disabled=discovering
                            on:click=move |_| driver.dispatch(DashboardEvent::Discover)
                        >
                            {move || discover_label(discovering())}
                        </button>
                        <ManualConnect driver=driver />
                        <TvList driver=driver />
                    </aside>

                    <main class="card remote-panel">
                        <RemotePanel driver=driver />
                    </main>
                </div>

                <Notice driver=driver />
            </div>
        </Show>
    }
}

fn discover_label(discovering: bool) -> &'static str {
    if discovering {
        "🔍 Procurando..."
    } else {
        "🔍 Descobrir TV na Rede"
    }
}
