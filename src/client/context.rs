use std::time::Duration;

use async_lock::Mutex;
use chrono::{DateTime, Utc};
use lightspeed_oauth::LsAccessToken;
use reqwest::header::HeaderMap;

use crate::{error::APIError, APIResult};

/// How the bearer credential travels on resource-API calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenTransport {
    /// `Authorization: Bearer <token>` header.
    #[default]
    Header,
    /// Legacy `oauth_token=<token>` query parameter.
    QueryParam,
}

/// The core context for interacting with the Lightspeed Retail
/// (MerchantOS) API.
///
/// Holds the account scope and bearer credential every call needs, the
/// client-level knobs (user agent, throttling, per-request timeout,
/// token transport), and the most recent response's header snapshot,
/// which only exists to drive the rate-limit governor on the *next*
/// call.
///
/// One context is meant for one logical caller; the header snapshot is
/// last-write-wins and is overwritten on every call.
///
/// # Examples
///
/// ```no_run
/// use lightspeed_retail::LsContext;
///
/// let context = LsContext::new("4333", "access_token_xyz")
///     .unwrap()
///     .with_throttling(true);
/// ```
pub struct LsContext {
    pub(crate) account_id: String,
    pub(crate) access_token: String,
    pub(crate) user_agent: String,
    pub(crate) throttle: bool,
    pub(crate) timeout: Option<Duration>,
    pub(crate) token_transport: TokenTransport,
    pub(crate) default_filters: bool,
    pub(crate) expires_at: Option<DateTime<Utc>>,
    pub(crate) last_headers: Mutex<Option<HeaderMap>>,
}

pub(crate) const DEFAULT_USER_AGENT: &str = "MerchantOS";

impl LsContext {
    /// Creates a context from an account id and a raw bearer token.
    ///
    /// # Errors
    ///
    /// `MissingAccountId` when the account id is empty; the check runs
    /// here so the failure happens before any network call.
    pub fn new(account_id: impl Into<String>, access_token: impl Into<String>) -> APIResult<Self> {
        let account_id = account_id.into();
        if account_id.trim().is_empty() {
            return Err(APIError::MissingAccountId);
        }
        Ok(Self {
            account_id,
            access_token: access_token.into(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            throttle: false,
            timeout: None,
            token_transport: TokenTransport::default(),
            default_filters: true,
            expires_at: None,
            last_headers: Mutex::new(None),
        })
    }

    /// Creates a context from a token issued by
    /// [`lightspeed_oauth::LightspeedProvider`], carrying its expiry.
    pub fn from_token(account_id: impl Into<String>, token: &LsAccessToken) -> APIResult<Self> {
        let mut context = Self::new(account_id, token.token())?;
        context.expires_at = token.expires_at();
        Ok(context)
    }

    /// Creates a context from the `LIGHTSPEED_ACCOUNT_ID` and
    /// `LIGHTSPEED_ACCESS_TOKEN` environment variables.
    pub fn new_from_env() -> APIResult<Self> {
        let account_id = std::env::var("LIGHTSPEED_ACCOUNT_ID")?;
        let access_token = std::env::var("LIGHTSPEED_ACCESS_TOKEN")?;
        Self::new(account_id, access_token)
    }

    /// Replaces the access token, e.g. after a long-lived exchange.
    #[must_use]
    pub fn with_access_token(self, access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..self
        }
    }

    /// Enables the proactive rate-limit sleep. Off by default.
    #[must_use]
    pub fn with_throttling(self, throttle: bool) -> Self {
        Self { throttle, ..self }
    }

    /// Per-request timeout. The governor's sleep runs before the request
    /// and is not counted against this budget.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }

    #[must_use]
    pub fn with_token_transport(self, token_transport: TokenTransport) -> Self {
        Self {
            token_transport,
            ..self
        }
    }

    /// Disables the resource-specific default query parameters, matching
    /// the historical unfiltered client behavior.
    #[must_use]
    pub fn with_default_filters(self, default_filters: bool) -> Self {
        Self {
            default_filters,
            ..self
        }
    }

    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Whether the token this context was built from has expired.
    /// Contexts built from a raw string have no expiry and never report
    /// expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => Utc::now() >= at,
            None => false,
        }
    }

    /// Header map captured from the most recent response.
    pub async fn last_response_headers(&self) -> Option<HeaderMap> {
        self.last_headers.lock().await.clone()
    }

    pub(crate) async fn store_headers(&self, headers: HeaderMap) {
        *self.last_headers.lock().await = Some(headers);
    }

    /// Raw `X-LS-API-Bucket-Level` value from the previous response.
    pub(crate) async fn bucket_level(&self) -> Option<String> {
        self.last_headers
            .lock()
            .await
            .as_ref()?
            .get(crate::limiter::BUCKET_LEVEL_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }
}
