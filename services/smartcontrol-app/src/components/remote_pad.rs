//! Remote-control panel for the selected TV

use leptos::prelude::*;
use smartcontrol_core::{Dashboard, DashboardEvent, RemoteCommand, Tv};

use crate::components::status_badge::StatusBadge;
use crate::components::tv_list::address_line;
use crate::driver::DashboardDriver;

const TOP_ROW: [RemoteCommand; 4] = [
    RemoteCommand::Power,
    RemoteCommand::VolumeUp,
    RemoteCommand::VolumeDown,
    RemoteCommand::Mute,
];

const FUNCTION_ROW: [RemoteCommand; 4] = [
    RemoteCommand::Home,
    RemoteCommand::Back,
    RemoteCommand::Menu,
    RemoteCommand::Source,
];

/// Title, connection status and pad, or an empty state when nothing is selected
#[component]
pub fn RemotePanel(driver: DashboardDriver) -> impl IntoView {
    let selected = Memo::new(move |_| driver.view.with(|d| d.selected_tv().cloned()));
    let sending = move || driver.view.with(Dashboard::is_sending);

    view! {
        <h2 class="remote-title">{move || selected.with(|tv| remote_title(tv.as_ref()))}</h2>
        {move || match selected.get() {
            None => view! {
                <div class="empty-state">
                    <div class="empty-icon">"📺"</div>
                    <h3>"Nenhuma TV selecionada"</h3>
                    <p>"Selecione uma TV da lista ou descubra uma nova"</p>
                </div>
            }
            .into_any(),
            Some(tv) => view! {
                <div class="tv-status">
                    <StatusBadge connected=tv.is_connected() />
                    <p>{address_line(&tv)}</p>
                    {(!tv.is_connected()).then(|| view! {
                        <p class="warning">"⚠️ Clique em \"Descobrir TV\" para conectar"</p>
                    })}
                </div>
                <RemotePad driver=driver />
                <Show when=sending>
                    <p class="sending">"Enviando comando..."</p>
                </Show>
            }
            .into_any(),
        }}
    }
}

/// Power and volume on top, arrow cross with OK, function keys below
#[component]
pub fn RemotePad(driver: DashboardDriver) -> impl IntoView {
    let button = move |command: RemoteCommand| {
        view! {
            <button
                class=format!("pad-button {}", button_class(command))
                title=command.as_str()
                on:click=move |_| driver.dispatch(DashboardEvent::SendCommand(command))
            >
                {glyph(command)}
            </button>
        }
    };

    view! {
        <div class="remote">
            <div class="pad-row">
                {TOP_ROW.into_iter().map(button).collect::<Vec<_>>()}
            </div>
            <div class="nav-pad">
                <div class="nav-row">
                    <div class="nav-space"></div>
                    {button(RemoteCommand::Up)}
                    <div class="nav-space"></div>
                </div>
                <div class="nav-row">
                    {button(RemoteCommand::Left)}
                    {button(RemoteCommand::Enter)}
                    {button(RemoteCommand::Right)}
                </div>
                <div class="nav-row">
                    <div class="nav-space"></div>
                    {button(RemoteCommand::Down)}
                    <div class="nav-space"></div>
                </div>
            </div>
            <div class="pad-row">
                {FUNCTION_ROW.into_iter().map(button).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

pub fn remote_title(tv: Option<&Tv>) -> String {
    match tv {
        Some(tv) => format!("Controle - {}", tv.tv_name),
        None => "Selecione uma TV".to_string(),
    }
}

/// Label printed on a pad button
pub fn glyph(command: RemoteCommand) -> &'static str {
    match command {
        RemoteCommand::Power => "⏻",
        RemoteCommand::VolumeUp => "🔊",
        RemoteCommand::VolumeDown => "🔉",
        RemoteCommand::Mute => "🔇",
        RemoteCommand::Up => "↑",
        RemoteCommand::Down => "↓",
        RemoteCommand::Left => "←",
        RemoteCommand::Right => "→",
        RemoteCommand::Enter => "OK",
        RemoteCommand::Home => "🏠",
        RemoteCommand::Back => "↩",
        RemoteCommand::Menu => "☰",
        RemoteCommand::Source => "📺",
    }
}

fn button_class(command: RemoteCommand) -> &'static str {
    match command {
        RemoteCommand::Power => "power",
        RemoteCommand::VolumeUp | RemoteCommand::VolumeDown => "volume",
        RemoteCommand::Mute => "mute",
        RemoteCommand::Up | RemoteCommand::Down | RemoteCommand::Left | RemoteCommand::Right => {
            "nav"
        }
        RemoteCommand::Enter => "ok",
        RemoteCommand::Home | RemoteCommand::Back | RemoteCommand::Menu | RemoteCommand::Source => {
            "function"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcontrol_core::Id;
    use std::collections::HashSet;

    #[test]
    fn pad_covers_every_command_once() {
        let mut on_pad: Vec<RemoteCommand> = TOP_ROW.into_iter().chain(FUNCTION_ROW).collect();
        on_pad.extend([
            RemoteCommand::Up,
            RemoteCommand::Left,
            RemoteCommand::Enter,
            RemoteCommand::Right,
            RemoteCommand::Down,
        ]);
        let unique: HashSet<_> = on_pad.iter().copied().collect();
        assert_eq!(on_pad.len(), RemoteCommand::ALL.len());
        assert_eq!(unique.len(), RemoteCommand::ALL.len());
    }

    #[test]
    fn glyphs_are_distinct() {
        let glyphs: HashSet<_> = RemoteCommand::ALL.into_iter().map(glyph).collect();
        assert_eq!(glyphs.len(), RemoteCommand::ALL.len());
    }

    #[test]
    fn title_names_selected_tv() {
        let tv = Tv {
            id: Id::Number(2),
            tv_name: "Quarto".to_string(),
            tv_brand: Some("LG".to_string()),
            tv_ip: None,
        };
        assert_eq!(remote_title(Some(&tv)), "Controle - Quarto");
        assert_eq!(remote_title(None), "Selecione uma TV");
    }
}
