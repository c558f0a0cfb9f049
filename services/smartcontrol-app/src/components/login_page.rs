//! Login page

use leptos::prelude::*;
use leptos_router::components::Redirect;
use smartcontrol_core::messages::{DEMO_EMAIL, DEMO_PASSWORD};
use smartcontrol_core::{LoginEvent, LoginView};

use crate::driver::LoginDriver;

/// Email/password form, pre-filled with the demo account
#[component]
pub fn LoginPage() -> impl IntoView {
    let driver = LoginDriver::new();
    let login = driver.view;

    view! {
        <Show when=move || driver.redirect.get()>
            <Redirect path="/dashboard" />
        </Show>
        <div class="login-screen">
            <div class="card login-card">
                <div class="login-logo">
                    <div class="login-logo-icon">"📺"</div>
                    <h1>"SmartControl+"</h1>
                </div>
                <p class="subtitle">"Controle sua TV pelo celular"</p>

                <form
                    class="login-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        driver.dispatch(LoginEvent::Submit);
                    }
                >
                    {move || {
                        login
                            .with(|v| v.error().map(str::to_string))
                            .map(|error| view! { <div class="error">{error}</div> })
                    }}

                    <div class="input-group">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            required
                            prop:value=move || login.with(|v| v.email().to_string())
                            on:input=move |ev| {
                                driver.dispatch(LoginEvent::EmailChanged(event_target_value(&ev)))
                            }
                        />
                    </div>

                    <div class="input-group">
                        <label for="password">"Senha"</label>
                        <input
                            id="password"
                            type="password"
                            required
                            prop:value=move || login.with(|v| v.password().to_string())
                            on:input=move |ev| {
                                driver.dispatch(LoginEvent::PasswordChanged(event_target_value(&ev)))
                            }
                        />
                    </div>

                    <button
                        type="submit"
                        class="primary-button"
                        disabled=move || login.with(LoginView::is_submitting)
                    >
                        {move || login.with(LoginView::submit_label)}
                    </button>
                </form>

                <div class="info">
                    <p>{demo_hint()}</p>
                </div>
            </div>
        </div>
    }
}

fn demo_hint() -> String {
    format!("Use: {} / {}", DEMO_EMAIL, DEMO_PASSWORD)
}
