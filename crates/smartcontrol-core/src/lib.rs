//! SmartControl+ core
//!
//! Framework-independent pieces of the SmartControl+ remote: the data model,
//! the backend wire types, the command vocabulary, the session lifecycle and
//! the state machines behind the login and dashboard views.
//!
//! Views never perform I/O. They consume events and hand back effects; a
//! driver (the Leptos pages or the native CLI) carries the effects out and
//! feeds the outcome back in as another event.

pub mod command;
pub mod dashboard;
pub mod error;
pub mod login;
pub mod messages;
pub mod model;
pub mod session;
pub mod wire;

pub use command::RemoteCommand;
pub use dashboard::{ConnectField, Dashboard, DashboardEffect, DashboardEvent, DashboardStatus};
pub use error::{StorageError, TransportError};
pub use login::{LoginEffect, LoginEvent, LoginPhase, LoginView};
pub use model::{Id, Tv, User};
pub use session::{MemorySessionStore, Session, SessionStore, SESSION_KEY};

/// Backend used when no other base URL is configured
pub const DEFAULT_API_URL: &str = "https://smartcontrol-backend.onrender.com";
