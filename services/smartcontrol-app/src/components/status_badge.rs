//! Connection badge component

use leptos::prelude::*;

/// A badge showing Conectada (green) or Não conectada (red)
#[component]
pub fn StatusBadge(connected: bool) -> impl IntoView {
    let (label, state) = badge(connected);

    view! {
        <span class=format!("status-badge {}", state)>{label}</span>
    }
}

fn badge(connected: bool) -> (&'static str, &'static str) {
    if connected {
        ("Conectada", "online")
    } else {
        ("Não conectada", "offline")
    }
}
