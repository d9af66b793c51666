use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::{
    client::{build_request, prepare_api_url, LsContext, TokenTransport},
    limiter,
    response::check_api_response,
    APIResult,
};

pub mod account;
pub mod catalog;
pub mod credit;
pub mod customers;
pub mod custom_fields;
pub mod discounts;
pub mod employees;
pub mod items;
pub mod sales;
pub mod shops;
pub mod tax;
pub mod vendors;

/// Diagnostics for one in-flight call, threaded through the dispatcher
/// instead of living on the client instance.
#[derive(Debug, Clone)]
pub(crate) struct CallContext {
    pub action: String,
    pub api_call: String,
}

/// Sends a request to a MerchantOS control URL and returns the decoded
/// envelope.
///
/// The dispatcher scopes the control name to the context's account,
/// consults the rate-limit governor with the headers captured from the
/// *previous* response, performs the call, snapshots the new response
/// headers, decodes the body as JSON, and validates the envelope's
/// embedded status before handing it back.
///
/// # Arguments
///
/// * `method` - The HTTP method for the request
/// * `control_name` - The dot-separated resource path, e.g. `Account.Sale`
/// * `unique_id` - Optional trailing id segment
/// * `params` - Optional query parameters, applied in insertion order
/// * `body` - Optional JSON body; writes with no body send `{}`
///
/// # Errors
///
/// Transport and JSON-decode failures propagate unchanged; an envelope
/// with an embedded non-`"200"` `httpCode` becomes
/// [`APIError::IdentityProviderError`](crate::error::APIError).
pub async fn ls_request<B: Serialize>(
    ctx: &LsContext,
    client: &reqwest::Client,
    method: Method,
    control_name: &str,
    unique_id: Option<&str>,
    params: Option<&[(&str, &str)]>,
    body: Option<&B>,
) -> APIResult<Value> {
    let legacy_params: Vec<(&str, &str)>;
    let params = match ctx.token_transport {
        TokenTransport::Header => params,
        TokenTransport::QueryParam => {
            let mut merged = params.map(<[_]>::to_vec).unwrap_or_default();
            merged.push(("oauth_token", ctx.access_token.as_str()));
            legacy_params = merged;
            Some(legacy_params.as_slice())
        }
    };

    let url = prepare_api_url(control_name, &ctx.account_id, unique_id, params);
    let call = CallContext {
        action: method.as_str().to_owned(),
        api_call: url.clone(),
    };

    if ctx.throttle {
        let bucket = ctx.bucket_level().await;
        limiter::throttle(&ctx.account_id, bucket.as_deref(), &method, &call).await;
    }

    let response = build_request(client, ctx, method, &url, body)
        .send()
        .await?;
    ctx.store_headers(response.headers().clone()).await;

    log::debug!(
        "Account={} X-LS-API-Bucket={} Req={} {}",
        ctx.account_id,
        ctx.bucket_level().await.unwrap_or_default(),
        call.action,
        call.api_call,
    );

    let envelope: Value = response.json().await?;
    check_api_response(&envelope)?;
    Ok(envelope)
}

/// Caller params win; otherwise the resource's documented defaults apply
/// unless the context disabled them.
pub(crate) fn params_or_default<'a>(
    ctx: &LsContext,
    params: Option<&'a [(&'a str, &'a str)]>,
    default: &'a [(&'a str, &'a str)],
) -> Option<&'a [(&'a str, &'a str)]> {
    match params {
        Some(given) if !given.is_empty() => Some(given),
        _ if ctx.default_filters => Some(default),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTS: &[(&str, &str)] = &[("archived", "0")];

    #[test]
    fn explicit_params_suppress_defaults() {
        let ctx = LsContext::new("42", "token").unwrap();
        let given = [("limit", "5")];
        assert_eq!(
            params_or_default(&ctx, Some(&given), DEFAULTS),
            Some(&given[..])
        );
    }

    #[test]
    fn missing_or_empty_params_fall_back_to_defaults() {
        let ctx = LsContext::new("42", "token").unwrap();
        assert_eq!(params_or_default(&ctx, None, DEFAULTS), Some(DEFAULTS));
        assert_eq!(params_or_default(&ctx, Some(&[]), DEFAULTS), Some(DEFAULTS));
    }

    #[test]
    fn defaults_can_be_disabled_on_the_context() {
        let ctx = LsContext::new("42", "token")
            .unwrap()
            .with_default_filters(false);
        assert_eq!(params_or_default(&ctx, None, DEFAULTS), None);
    }
}
