pub mod error;
pub use error::{Error, Result};
pub mod cli;
pub mod client;
pub mod form;
pub mod models;
pub mod settings;

pub use crate::client::LookupClient;
pub use crate::form::LookupForm;
pub use crate::settings::Settings;
