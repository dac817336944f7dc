use super::{Msg, PrettyJson, Result};
use crate::{
    models::lookup::{now_local, parse_datetime},
    LookupClient, LookupForm, Settings,
};

/// Look up the cell serving a phone number at a given time
#[derive(Debug, clap::Args)]
pub struct Cmd {
    /// Phone number to look up
    phone_number: String,
    /// Local date and time as "YYYY-MM-DD HH:MM:SS". Defaults to now
    #[clap(long, short = 'd')]
    datetime: Option<String>,
    /// Print the result as json
    #[clap(long)]
    json: bool,
}

impl Cmd {
    pub async fn run(&self, settings: &Settings) -> Result<Msg> {
        let datetime = match &self.datetime {
            Some(value) => parse_datetime(value)?,
            None => now_local(),
        };
        let form = LookupForm::new(LookupClient::from_settings(settings)?);
        match form.submit(&self.phone_number, datetime).await {
            Ok(result) if self.json => Msg::ok(result.pretty_json()?),
            Ok(result) => Msg::ok(result.to_string()),
            Err(err) => Msg::err(err.user_message()),
        }
    }
}
