use serde_json::Value;
use thiserror::Error;

pub type APIResult<T> = Result<T, APIError>;

#[derive(Debug, Error)]
pub enum APIError {
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),
    #[error(transparent)]
    AuthError(#[from] lightspeed_oauth::AuthError),
    #[error(transparent)]
    EnvVarError(#[from] std::env::VarError),
    /// The envelope carried an embedded `httpCode` other than `"200"`.
    /// The message is composed as `httpMessage: message (errorClass)`;
    /// the raw envelope rides along for diagnostics.
    #[error("identity provider error {http_code}: {message}")]
    IdentityProviderError {
        http_code: String,
        message: String,
        body: Value,
    },
    /// Every resource path is scoped to an account; an empty account id
    /// is a caller error caught before any network call.
    #[error("account id is required")]
    MissingAccountId,
}
