mod error;
mod grant;
mod owner;
mod provider;
mod token;

pub use error::AuthError;
pub use grant::Grant;
pub use owner::LightspeedResourceOwner;
pub use provider::{
    LightspeedProvider, EMPLOYEE_SCOPE, LIGHTSPEED_API_URL, LIGHTSPEED_AUTHORIZATION_ENDPOINT,
    LIGHTSPEED_REGISTRATION_ENDPOINT, LIGHTSPEED_TOKEN_ENDPOINT,
};
pub use token::LsAccessToken;

pub mod oauth2 {
    pub use oauth2::{AccessToken, CsrfToken, Scope};
}
