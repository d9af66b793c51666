#[derive(Debug)]
pub enum AuthError {
    /// The token endpoint answered with an OAuth error envelope.
    Provider {
        error: String,
        description: String,
    },
    /// Lightspeed does not support token refreshing.
    RefreshNotSupported,
    /// Non-JSON failure body from the token endpoint.
    BadTokenRequest(String),
    ReqwestError(reqwest::Error),
    JsonError(serde_json::Error),
    ParseError(url::ParseError),
    EnvVarError(std::env::VarError),
}

impl From<reqwest::Error> for AuthError {
    fn from(value: reqwest::Error) -> Self {
        Self::ReqwestError(value)
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(value: serde_json::Error) -> Self {
        Self::JsonError(value)
    }
}

impl From<url::ParseError> for AuthError {
    fn from(value: url::ParseError) -> Self {
        Self::ParseError(value)
    }
}

impl From<std::env::VarError> for AuthError {
    fn from(value: std::env::VarError) -> Self {
        Self::EnvVarError(value)
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::Provider { error, description } => {
                write!(f, "{error}: {description}")
            }
            AuthError::RefreshNotSupported => {
                write!(f, "Lightspeed does not support token refreshing.")
            }
            AuthError::BadTokenRequest(body) => write!(f, "bad token request: {body}"),
            AuthError::ReqwestError(e) => write!(f, "{e}"),
            AuthError::JsonError(e) => write!(f, "{e}"),
            AuthError::ParseError(e) => write!(f, "{e}"),
            AuthError::EnvVarError(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AuthError {}
