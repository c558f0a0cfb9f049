//! Sidebar list of the user's TVs

use leptos::prelude::*;
use smartcontrol_core::{DashboardEvent, DashboardStatus, Tv};

use crate::driver::DashboardDriver;

/// One card per TV; clicking a card selects it
#[component]
pub fn TvList(driver: DashboardDriver) -> impl IntoView {
    let dashboard = driver.view;

    move || {
        dashboard.with(|d| {
            if d.status() == DashboardStatus::Loading {
                return view! { <p class="muted">"Carregando TVs..."</p> }.into_any();
            }
            if d.tvs().is_empty() {
                return view! { <p class="muted">"Nenhuma TV cadastrada"</p> }.into_any();
            }

            view! {
                <div class="tv-list">
                    {d.tvs().iter().map(|tv| {
                        let id = tv.id.clone();
                        view! {
                            <div
                                class="tv-card"
                                class:selected=d.is_selected(tv)
                                on:click=move |_| driver.dispatch(DashboardEvent::SelectTv(id.clone()))
                            >
                                <h3>{tv.tv_name.clone()}</h3>
                                <p class="tv-brand">{tv.brand().unwrap_or("-").to_string()}</p>
                                <p class="tv-ip">{address_line(tv)}</p>
                                <div class="status-dot" class:online=tv.is_connected()></div>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            }
            .into_any()
        })
    }
}

/// `IP: <address>`, or a note that the backend has none
pub fn address_line(tv: &Tv) -> String {
    match tv.ip() {
        Some(ip) => format!("IP: {}", ip),
        None => "Não conectada".to_string(),
    }
}
