//! Manual-connect toggle and form

use leptos::prelude::*;
use smartcontrol_core::{ConnectField, DashboardEvent};

use crate::driver::DashboardDriver;

#[component]
pub fn ManualConnect(driver: DashboardDriver) -> impl IntoView {
    let form = Memo::new(move |_| driver.view.with(|d| d.connect_form().clone()));
    let open = move || form.with(|f| f.open);
    let submitting = move || form.with(|f| f.submitting);
    let on_input = move |field: ConnectField| {
        move |ev: leptos::ev::Event| {
            driver.dispatch(DashboardEvent::ConnectFieldChanged(
                field,
                event_target_value(&ev),
            ))
        }
    };

    view! {
        <button
            class="toggle-connect"
            on:click=move |_| driver.dispatch(DashboardEvent::ToggleConnectForm)
        >
            {move || toggle_label(open())}
        </button>
        <Show when=open>
            <form
                class="connect-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    driver.dispatch(DashboardEvent::SubmitConnect);
                }
            >
                <input
                    type="text"
                    placeholder="Nome da TV"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=on_input(ConnectField::Name)
                />
                <input
                    type="text"
                    placeholder="Marca (opcional)"
                    prop:value=move || form.with(|f| f.brand.clone())
                    on:input=on_input(ConnectField::Brand)
                />
                <input
                    type="text"
                    placeholder="IP da TV (ex: 192.168.0.10)"
                    prop:value=move || form.with(|f| f.ip.clone())
                    on:input=on_input(ConnectField::Ip)
                />
                <button type="submit" class="connect-button" disabled=submitting>
                    {move || if submitting() { "Conectando..." } else { "Conectar" }}
                </button>
            </form>
        </Show>
    }
}

fn toggle_label(open: bool) -> &'static str {
    if open {
        "✖ Cancelar"
    } else {
        "➕ Conectar por IP"
    }
}
