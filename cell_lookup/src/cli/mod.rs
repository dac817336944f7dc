pub mod search;
pub mod settings;

use serde::Serialize;
use std::fmt::Display;

pub type Result<T = (), E = anyhow::Error> = anyhow::Result<T, E>;

#[derive(Debug, Serialize)]
pub enum Msg {
    Success(String),
    Error(String),
}

impl Msg {
    pub fn ok(msg: String) -> Result<Self> {
        Ok(Self::Success(msg))
    }

    pub fn err(msg: String) -> Result<Self> {
        Ok(Self::Error(msg))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Msg::Error(_))
    }
}

impl Display for Msg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Msg::Success(msg) => write!(f, "{msg}"),
            Msg::Error(msg) => write!(f, "\u{2717} {msg}"),
        }
    }
}

pub trait PrettyJson {
    fn pretty_json(&self) -> Result<String>;
}

impl<S: ?Sized + serde::Serialize> PrettyJson for S {
    fn pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self).map_err(|e| e.into())
    }
}
