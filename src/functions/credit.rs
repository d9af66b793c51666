use reqwest::{Client, Method};
use serde_json::Value;

use crate::{client::LsContext, functions::ls_request, response::extract_single, APIResult};

pub async fn get_credit_account(
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.CreditAccount",
        None,
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_single(&response, "CreditAccount"))
}

/// The vendor exposes credit-account creation as a PUT against the
/// account id; the verb is theirs, not ours.
pub async fn create_credit_account(
    credit_account_id: &str,
    data: &Value,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::PUT,
        "Account.CreditAccount",
        Some(credit_account_id),
        None,
        Some(data),
    )
    .await?;
    Ok(extract_single(&response, "CreditAccount"))
}
