pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// The server answered with a non-2xx status and an error body.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Message shown to the user when this error terminates an operation.
    ///
    /// Server-provided messages win; anything else collapses to the caller's
    /// per-operation fallback so transport noise never reaches the UI.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Api { message, .. } if !message.is_empty() => message.clone(),
            Error::Validation(errs) => errs.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// True when the operation was rejected before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
