/// Grants the Lightspeed token endpoint accepts.
///
/// There is deliberately no refresh variant: the upstream API has no
/// refresh capability, see [`crate::AuthError::RefreshNotSupported`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grant {
    /// Standard authorization-code exchange.
    AuthorizationCode { code: String },
    /// Vendor grant converting a short-lived token into a long-lived one.
    LsExchangeToken { token: String },
}

impl Grant {
    pub fn authorization_code(code: impl Into<String>) -> Self {
        Grant::AuthorizationCode { code: code.into() }
    }

    pub fn ls_exchange_token(token: impl Into<String>) -> Self {
        Grant::LsExchangeToken {
            token: token.into(),
        }
    }

    /// The `grant_type` value on the wire.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Grant::AuthorizationCode { .. } => "authorization_code",
            Grant::LsExchangeToken { .. } => "ls_exchange_token",
        }
    }

    /// Grant-specific form parameters, beyond `grant_type` and the
    /// client credentials.
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Grant::AuthorizationCode { code } => vec![("code", code.clone())],
            Grant::LsExchangeToken { token } => vec![("ls_exchange_token", token.clone())],
        }
    }
}

impl std::fmt::Display for Grant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchange_grant_carries_single_required_parameter() {
        let grant = Grant::ls_exchange_token("short-lived-token");
        assert_eq!(grant.name(), "ls_exchange_token");
        assert_eq!(
            grant.params(),
            vec![("ls_exchange_token", "short-lived-token".to_string())]
        );
    }

    #[test]
    fn authorization_code_grant_carries_code() {
        let grant = Grant::authorization_code("mock_authorization_code");
        assert_eq!(grant.name(), "authorization_code");
        assert_eq!(
            grant.params(),
            vec![("code", "mock_authorization_code".to_string())]
        );
    }
}
