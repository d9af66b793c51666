use lightspeed_oauth::LIGHTSPEED_API_URL;
use reqwest::{header, Method, RequestBuilder};
use serde::Serialize;
use url::form_urlencoded;

mod context;
pub use context::{LsContext, TokenTransport};

pub(crate) const LS_FORMAT: &str = ".json";
pub(crate) const MERCHANTOS_ACCEPT: &str = "application/vnd.merchantos-v2+json";

/// Builds the REST URL for a dot-separated control name.
///
/// The literal `"Account."` token becomes `"Account.<accountId>."`, every
/// remaining `.` becomes `/`, an optional `/<uniqueId>` segment and the
/// fixed `.json` suffix are appended, and query parameters are encoded
/// pairwise in the caller's insertion order. This is a pure string
/// rewrite, not a general dot-path parser: control names like
/// `"Account.Sale/49/SaleLine"` already carry literal sub-path segments.
pub fn prepare_api_url(
    control_name: &str,
    account_id: &str,
    unique_id: Option<&str>,
    params: Option<&[(&str, &str)]>,
) -> String {
    let mut url = LIGHTSPEED_API_URL.to_owned();
    let scoped = control_name.replace("Account.", &format!("Account.{account_id}."));
    url.push_str(&scoped.replace('.', "/"));

    if let Some(id) = unique_id.filter(|id| !id.is_empty()) {
        url.push('/');
        url.push_str(id);
    }
    url.push_str(LS_FORMAT);

    if let Some(params) = params.filter(|params| !params.is_empty()) {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish();
        url.push('?');
        url.push_str(&query);
    }
    url
}

/// Fixed header set for every resource-API call: product user agent, the
/// API-version Accept header, and (unless the legacy query-parameter
/// transport is configured) the bearer credential.
pub(crate) fn set_headers(ctx: &LsContext, request: RequestBuilder) -> RequestBuilder {
    let request = request
        .header(header::USER_AGENT, ctx.user_agent())
        .header(header::ACCEPT, MERCHANTOS_ACCEPT);
    match ctx.token_transport {
        TokenTransport::Header => request.bearer_auth(&ctx.access_token),
        TokenTransport::QueryParam => request,
    }
}

/// Assembles the request: headers, optional per-request timeout, and the
/// JSON body. A missing body on a write is normalized to `{}`; GET and
/// DELETE carry no body.
pub(crate) fn build_request<B: Serialize>(
    client: &reqwest::Client,
    ctx: &LsContext,
    method: Method,
    url: &str,
    body: Option<&B>,
) -> RequestBuilder {
    let mut request = set_headers(ctx, client.request(method.clone(), url));
    if let Some(timeout) = ctx.timeout {
        request = request.timeout(timeout);
    }
    match (method == Method::GET || method == Method::DELETE, body) {
        (true, _) => request,
        (false, Some(body)) => request.json(body),
        (false, None) => request.json(&serde_json::json!({})),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_full_url_with_id_and_params() {
        let url = prepare_api_url(
            "Account.Sale",
            "42",
            Some("99"),
            Some(&[("a", "1"), ("b", "2")]),
        );
        assert_eq!(
            url,
            "https://api.merchantos.com/API/Account/42/Sale/99.json?a=1&b=2"
        );
    }

    #[test]
    fn omitting_unique_id_drops_the_segment() {
        let url = prepare_api_url("Account.Sale", "42", None, None);
        assert_eq!(url, "https://api.merchantos.com/API/Account/42/Sale.json");
    }

    #[test]
    fn empty_params_drop_the_query_suffix() {
        let url = prepare_api_url("Account.Sale", "42", Some("99"), Some(&[]));
        assert_eq!(url, "https://api.merchantos.com/API/Account/42/Sale/99.json");
    }

    #[test]
    fn nested_control_names_keep_literal_segments() {
        let url = prepare_api_url("Account.Sale/49/SaleLine", "42", None, None);
        assert_eq!(
            url,
            "https://api.merchantos.com/API/Account/42/Sale/49/SaleLine.json"
        );
    }

    #[test]
    fn unscoped_control_names_pass_through() {
        assert_eq!(
            prepare_api_url("Locale", "42", None, None),
            "https://api.merchantos.com/API/Locale.json"
        );
        assert_eq!(
            prepare_api_url("Account", "42", None, None),
            "https://api.merchantos.com/API/Account.json"
        );
    }

    #[test]
    fn params_keep_insertion_order_and_encode_once() {
        let url = prepare_api_url(
            "Account.Customer",
            "42",
            None,
            Some(&[
                ("load_relations", r#"["Contact","Tags"]"#),
                ("archived", "0"),
            ]),
        );
        assert_eq!(
            url,
            "https://api.merchantos.com/API/Account/42/Customer.json\
             ?load_relations=%5B%22Contact%22%2C%22Tags%22%5D&archived=0"
        );
    }
}
