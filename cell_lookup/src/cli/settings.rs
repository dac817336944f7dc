use super::{Msg, PrettyJson, Result};
use crate::Settings;

/// Print the effective settings, without the token
#[derive(Debug, clap::Args)]
pub struct Cmd;

impl Cmd {
    pub fn run(&self, settings: &Settings) -> Result<Msg> {
        Msg::ok(settings.pretty_json()?)
    }
}
