//! Remote-control command vocabulary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A button on the remote, sent to the backend verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemoteCommand {
    Power,
    VolumeUp,
    VolumeDown,
    Mute,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Home,
    Back,
    Menu,
    Source,
}

impl RemoteCommand {
    pub const ALL: [RemoteCommand; 13] = [
        RemoteCommand::Power,
        RemoteCommand::VolumeUp,
        RemoteCommand::VolumeDown,
        RemoteCommand::Mute,
        RemoteCommand::Up,
        RemoteCommand::Down,
        RemoteCommand::Left,
        RemoteCommand::Right,
        RemoteCommand::Enter,
        RemoteCommand::Home,
        RemoteCommand::Back,
        RemoteCommand::Menu,
        RemoteCommand::Source,
    ];

    /// Wire name of the command
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteCommand::Power => "POWER",
            RemoteCommand::VolumeUp => "VOLUME_UP",
            RemoteCommand::VolumeDown => "VOLUME_DOWN",
            RemoteCommand::Mute => "MUTE",
            RemoteCommand::Up => "UP",
            RemoteCommand::Down => "DOWN",
            RemoteCommand::Left => "LEFT",
            RemoteCommand::Right => "RIGHT",
            RemoteCommand::Enter => "ENTER",
            RemoteCommand::Home => "HOME",
            RemoteCommand::Back => "BACK",
            RemoteCommand::Menu => "MENU",
            RemoteCommand::Source => "SOURCE",
        }
    }
}

impl fmt::Display for RemoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name is not part of the vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for RemoteCommand {
    type Err = UnknownCommand;

    /// Accepts wire names case-insensitively, with `-` in place of `_`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        RemoteCommand::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}
