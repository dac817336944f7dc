use crate::{Error, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, time::Duration};

#[derive(Deserialize, Serialize, Clone)]
pub struct Settings {
    /// RUST_LOG compatible settings string. Default to
    /// "cell_lookup=info"
    #[serde(default = "default_log")]
    pub log: String,
    /// URL of the lookup endpoint. Required
    pub endpoint: String,
    /// Bearer token sent with every lookup. Required
    #[serde(skip_serializing)]
    pub token: String,
    /// Optional request timeout, eg "30s". No timeout when unset
    #[serde(with = "humantime_serde", default)]
    pub timeout: Option<Duration>,
    /// User agent for lookup requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

pub fn default_log() -> String {
    "cell_lookup=info".to_string()
}

pub fn default_user_agent() -> String {
    format!("cell-lookup/{}", env!("CARGO_PKG_VERSION"))
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("log", &self.log)
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Settings {
    /// Load Settings from a given path. Settings are loaded from a given
    /// optional path and can be overriden with environment variables.
    ///
    /// Environment overrides have the same name as the entries in the settings
    /// file in uppercase and prefixed with "LOOKUP_". For example
    /// "LOOKUP_TOKEN" will override the token setting.
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(file) = path {
            // Add optional settings file
            builder = builder
                .add_source(File::with_name(&file.as_ref().to_string_lossy()).required(false));
        }
        // Eg.. `LOOKUP_ENDPOINT=https://.. ./target/app` would set the `endpoint` key
        builder
            .add_source(
                Environment::with_prefix("LOOKUP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(Error::from)
    }
}
