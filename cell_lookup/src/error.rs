use thiserror::Error;

pub type Result<T = ()> = std::result::Result<T, Error>;

/// User facing message for an empty phone number
pub const MSG_MISSING_PHONE_NUMBER: &str = "Veuillez saisir un numéro de téléphone";
/// User facing message for a 404 from the lookup endpoint
pub const MSG_NOT_FOUND: &str = "Aucune donnée trouvée pour ce numéro à cette date";
/// User facing message when the lookup could not complete
pub const MSG_UNEXPECTED: &str = "Une erreur inattendue est survenue, veuillez réessayer";
/// User facing message for a submission while a search is running
pub const MSG_BUSY: &str = "Recherche en cours...";

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", MSG_MISSING_PHONE_NUMBER)]
    Validation,
    #[error("{}", MSG_NOT_FOUND)]
    NotFound,
    #[error("Erreur {}: {message}", .status.as_u16())]
    Server {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("{}", MSG_UNEXPECTED)]
    Transport(#[source] reqwest::Error),
    #[error("{}", MSG_UNEXPECTED)]
    Decode(#[source] serde_json::Error),
    #[error("{}", MSG_BUSY)]
    Busy,
    #[error("invalid datetime {0}, expected YYYY-MM-DD HH:MM:SS")]
    Datetime(String),
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub fn server(status: reqwest::StatusCode, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn datetime(value: &str) -> Self {
        Self::Datetime(value.to_string())
    }

    /// The message shown to the user in the error alert
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}
