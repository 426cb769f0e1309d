use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend rejected the email/password pair.
    #[error("invalid login credentials")]
    InvalidCredentials,

    #[error("not authenticated; run `placement auth login`")]
    NotAuthenticated,

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("auth request timed out")]
    Timeout,

    #[error("auth API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("token store error: {0}")]
    TokenStore(String),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(error)
        }
    }
}
