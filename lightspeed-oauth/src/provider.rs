use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, CsrfToken, RedirectUrl, Scope, TokenUrl};
use reqwest::header;
use serde_json::Value;

use crate::{AuthError, Grant, LightspeedResourceOwner, LsAccessToken};

pub const LIGHTSPEED_API_URL: &str = "https://api.merchantos.com/API/";
pub const LIGHTSPEED_REGISTRATION_ENDPOINT: &str = "https://cloud.merchantos.com/oauth/register.php";
pub const LIGHTSPEED_AUTHORIZATION_ENDPOINT: &str = "https://cloud.merchantos.com/oauth/authorize.php";
pub const LIGHTSPEED_TOKEN_ENDPOINT: &str = "https://cloud.merchantos.com/oauth/access_token.php";
pub const EMPLOYEE_SCOPE: &str = "employee:all";

/// OAuth2 glue for the Lightspeed cloud endpoints.
///
/// Builds authorization URLs, exchanges authorization codes, and performs
/// the vendor `ls_exchange_token` grant. Token refresh is rejected
/// outright since the upstream API has no refresh capability.
pub struct LightspeedProvider {
    client_id: ClientId,
    client_secret: ClientSecret,
    redirect_uri: Option<RedirectUrl>,
    http: reqwest::Client,
}

impl LightspeedProvider {
    pub fn new(
        client_id: impl ToString,
        client_secret: impl ToString,
        redirect_uri: Option<&str>,
    ) -> Result<Self, AuthError> {
        let redirect_uri = match redirect_uri {
            Some(uri) => Some(RedirectUrl::new(uri.to_string())?),
            None => None,
        };
        Ok(Self {
            client_id: ClientId::new(client_id.to_string()),
            client_secret: ClientSecret::new(client_secret.to_string()),
            redirect_uri,
            http: reqwest::Client::new(),
        })
    }

    /// Reads `LIGHTSPEED_CLIENT_ID`, `LIGHTSPEED_CLIENT_SECRET` and the
    /// optional `LIGHTSPEED_REDIRECT_URI` from the environment (a local
    /// `.env` file is honored).
    pub fn from_env() -> Result<Self, AuthError> {
        dotenv::dotenv().ok();
        let client_id = std::env::var("LIGHTSPEED_CLIENT_ID")?;
        let client_secret = std::env::var("LIGHTSPEED_CLIENT_SECRET")?;
        let redirect_uri = std::env::var("LIGHTSPEED_REDIRECT_URI").ok();
        Self::new(client_id, client_secret, redirect_uri.as_deref())
    }

    /// Consent URL for the authorization-code flow, with a fresh state
    /// token and the default `employee:all` scope.
    pub fn authorize_url(&self) -> Result<(url::Url, CsrfToken), AuthError> {
        let mut client = BasicClient::new(
            self.client_id.clone(),
            Some(self.client_secret.clone()),
            AuthUrl::new(LIGHTSPEED_AUTHORIZATION_ENDPOINT.to_owned())?,
            Some(TokenUrl::new(LIGHTSPEED_TOKEN_ENDPOINT.to_owned())?),
        );
        if let Some(redirect) = &self.redirect_uri {
            client = client.set_redirect_uri(redirect.clone());
        }
        Ok(client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new(EMPLOYEE_SCOPE.to_owned()))
            .url())
    }

    /// Exchanges the given grant for an access token.
    pub async fn get_access_token(&self, grant: Grant) -> Result<LsAccessToken, AuthError> {
        self.request_token(grant, &[]).await
    }

    /// Like [`get_access_token`](Self::get_access_token), with extra form
    /// parameters. A `refresh_token` parameter is rejected locally,
    /// before any network call.
    pub async fn get_access_token_with_params(
        &self,
        grant: Grant,
        extra: &[(&str, &str)],
    ) -> Result<LsAccessToken, AuthError> {
        self.request_token(grant, extra).await
    }

    /// Exchanges a short-lived access token for a long-lived one via the
    /// vendor `ls_exchange_token` grant.
    pub async fn get_long_lived_access_token(
        &self,
        access_token: &str,
    ) -> Result<LsAccessToken, AuthError> {
        self.request_token(Grant::ls_exchange_token(access_token), &[])
            .await
    }

    /// Always fails: Lightspeed issues no refresh tokens.
    pub fn refresh_access_token(&self) -> Result<LsAccessToken, AuthError> {
        Err(AuthError::RefreshNotSupported)
    }

    /// Fetches the account detail envelope the token is scoped to.
    pub async fn get_resource_owner(
        &self,
        token: &LsAccessToken,
    ) -> Result<LightspeedResourceOwner, AuthError> {
        let url = format!("{LIGHTSPEED_API_URL}Account.json");
        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .bearer_auth(token.token())
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AuthError::BadTokenRequest(response.text().await?));
        }
        let data: Value = response.json().await?;
        Ok(LightspeedResourceOwner::new(data))
    }

    /// Convenience over [`get_resource_owner`](Self::get_resource_owner):
    /// just the numeric account id, as a string.
    pub async fn get_account_id(&self, token: &LsAccessToken) -> Result<Option<String>, AuthError> {
        Ok(self.get_resource_owner(token).await?.id())
    }

    async fn request_token(
        &self,
        grant: Grant,
        extra: &[(&str, &str)],
    ) -> Result<LsAccessToken, AuthError> {
        if extra.iter().any(|(key, _)| *key == "refresh_token") {
            return Err(AuthError::RefreshNotSupported);
        }

        let mut params: Vec<(&str, String)> = vec![
            ("grant_type", grant.name().to_owned()),
            ("client_id", self.client_id.as_str().to_owned()),
            ("client_secret", self.client_secret.secret().clone()),
        ];
        if let (Grant::AuthorizationCode { .. }, Some(redirect)) = (&grant, &self.redirect_uri) {
            params.push(("redirect_uri", redirect.as_str().to_owned()));
        }
        params.extend(grant.params());
        params.extend(extra.iter().map(|(k, v)| (*k, (*v).to_owned())));

        log::debug!("requesting token with grant {grant}");

        let response = self
            .http
            .post(LIGHTSPEED_TOKEN_ENDPOINT)
            .header(header::ACCEPT, "application/json")
            .form(&params)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        let data: Value = match serde_json::from_str(&body) {
            Ok(data) => data,
            Err(err) if status.is_success() => return Err(err.into()),
            Err(_) => return Err(AuthError::BadTokenRequest(body)),
        };
        check_token_response(&data)?;
        Ok(serde_json::from_value(data)?)
    }
}

/// The token endpoint signals failure through an `error` envelope, not
/// the transport status.
fn check_token_response(data: &Value) -> Result<(), AuthError> {
    match data.get("error").and_then(Value::as_str) {
        Some(error) if !error.is_empty() => Err(AuthError::Provider {
            error: error.to_owned(),
            description: data
                .get("error_description")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn provider() -> LightspeedProvider {
        LightspeedProvider::new("mock_client_id", "mock_secret", Some("https://example.com/cb"))
            .unwrap()
    }

    #[test]
    fn authorization_url_carries_standard_parameters() {
        let (url, state) = provider().authorize_url().unwrap();
        assert_eq!(url.path(), "/oauth/authorize.php");
        let query: HashMap<_, _> = url.query_pairs().collect();
        assert_eq!(query["client_id"], "mock_client_id");
        assert_eq!(query["redirect_uri"], "https://example.com/cb");
        assert_eq!(query["response_type"], "code");
        assert_eq!(query["scope"], EMPLOYEE_SCOPE);
        assert_eq!(query["state"], state.secret().as_str());
    }

    #[test]
    fn token_endpoint_path_is_fixed() {
        let url = url::Url::parse(LIGHTSPEED_TOKEN_ENDPOINT).unwrap();
        assert_eq!(url.path(), "/oauth/access_token.php");
    }

    #[tokio::test]
    async fn refresh_parameter_is_rejected_before_any_network_call() {
        let err = provider()
            .get_access_token_with_params(
                Grant::authorization_code("mock_code"),
                &[("refresh_token", "mock_refresh")],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::RefreshNotSupported));
    }

    #[test]
    fn refresh_access_token_always_fails() {
        let err = provider().refresh_access_token().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Lightspeed does not support token refreshing."
        );
    }

    #[test]
    fn error_envelope_maps_to_provider_error() {
        let data = serde_json::json!({
            "error": "invalid_grant",
            "error_description": "Authorization code expired"
        });
        let err = check_token_response(&data).unwrap_err();
        assert_eq!(err.to_string(), "invalid_grant: Authorization code expired");
    }

    #[test]
    fn success_envelope_passes_check() {
        let data = serde_json::json!({
            "access_token": "mock_access_token",
            "token_type": "bearer"
        });
        assert!(check_token_response(&data).is_ok());
    }
}
