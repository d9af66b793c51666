use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Bearer credential issued by the Lightspeed token endpoint.
///
/// Replaced, never mutated: exchanging a short-lived token for a
/// long-lived one yields a fresh `LsAccessToken`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LsAccessToken {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default = "Utc::now")]
    issued_at: DateTime<Utc>,
}

impl LsAccessToken {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: None,
            expires_in: None,
            scope: None,
            issued_at: Utc::now(),
        }
    }

    /// The raw bearer string sent in `Authorization` headers.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.access_token
    }

    #[must_use]
    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_deref()
    }

    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Absolute expiry instant, when the endpoint reported `expires_in`.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_in
            .map(|secs| self.issued_at + Duration::seconds(secs))
    }

    /// A token without a reported lifetime is assumed live.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        match self.expires_at() {
            Some(at) => Utc::now() >= at,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_token_endpoint_payload() {
        let token: LsAccessToken = serde_json::from_str(
            r#"{"access_token":"mock_access_token","token_type":"bearer","expires_in":3600}"#,
        )
        .unwrap();
        assert_eq!(token.token(), "mock_access_token");
        assert_eq!(token.token_type(), Some("bearer"));
        assert!(!token.is_expired());
        let at = token.expires_at().unwrap();
        assert!(at > Utc::now());
        assert!(at <= Utc::now() + Duration::seconds(3600));
    }

    #[test]
    fn token_without_lifetime_never_expires() {
        let token = LsAccessToken::new("opaque");
        assert_eq!(token.expires_at(), None);
        assert!(!token.is_expired());
    }
}
