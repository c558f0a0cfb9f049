//! Modal showing the dashboard's latest message

use leptos::prelude::*;
use smartcontrol_core::DashboardEvent;

use crate::driver::DashboardDriver;

#[component]
pub fn Notice(driver: DashboardDriver) -> impl IntoView {
    let notice = Memo::new(move |_| driver.view.with(|d| d.notice().map(str::to_string)));

    move || {
        notice.get().map(|message| {
            view! {
                <div class="notice-backdrop">
                    <div class="card notice" role="alertdialog">
                        <p>{message}</p>
                        <button
                            class="primary-button"
                            on:click=move |_| driver.dispatch(DashboardEvent::DismissNotice)
                        >
                            "OK"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
