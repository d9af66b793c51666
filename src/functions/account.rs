//! Account-level resources: the account list, config, options and
//! locale endpoints.

use reqwest::{Client, Method};
use serde_json::Value;

use crate::{
    client::LsContext,
    functions::ls_request,
    response::extract_single,
    APIResult,
};

/// Accounts visible to the token. The control name is unscoped, so this
/// works before the caller knows an account id.
pub async fn accounts(ctx: &LsContext, client: &Client) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account",
        None,
        None,
        None::<&Value>,
    )
    .await?;
    Ok(extract_single(&response, "Account"))
}

pub async fn get_config(ctx: &LsContext, client: &Client) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Config",
        None,
        None,
        None::<&Value>,
    )
    .await?;
    Ok(response
        .get("Config")
        .cloned()
        .unwrap_or(Value::Array(Vec::new())))
}

/// Returns the whole options envelope; the endpoint has no single
/// resource key to unwrap.
pub async fn get_options(ctx: &LsContext, client: &Client) -> APIResult<Value> {
    ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Option",
        None,
        None,
        None::<&Value>,
    )
    .await
}

pub async fn get_locale(ctx: &LsContext, client: &Client) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Locale",
        None,
        None,
        None::<&Value>,
    )
    .await?;
    Ok(response
        .get("Locale")
        .cloned()
        .unwrap_or(Value::Array(Vec::new())))
}
