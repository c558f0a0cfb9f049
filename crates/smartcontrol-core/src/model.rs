//! Users and TVs as the backend describes them

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend record identifier
///
/// The backend sends ids as JSON numbers, but nothing on the client relies on
/// that, so both forms are accepted and written back exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

/// Signed-in user returned by `/api/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub email: String,
}

/// A TV registered to the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tv {
    pub id: Id,
    pub tv_name: String,
    #[serde(default)]
    pub tv_brand: Option<String>,
    #[serde(default)]
    pub tv_ip: Option<String>,
}

impl Tv {
    /// The TV's address, if the backend knows one
    ///
    /// Blank addresses count as unknown.
    pub fn ip(&self) -> Option<&str> {
        self.tv_ip
            .as_deref()
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
    }

    pub fn is_connected(&self) -> bool {
        self.ip().is_some()
    }

    pub fn brand(&self) -> Option<&str> {
        self.tv_brand
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
    }
}
