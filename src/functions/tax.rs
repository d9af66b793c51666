use reqwest::{Client, Method};
use serde_json::Value;

use crate::{client::LsContext, functions::ls_request, response::extract_filtered, APIResult};

pub async fn get_tax_class(
    tax_class_id: &str,
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.TaxClass",
        Some(tax_class_id),
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_filtered(&response, "TaxClass"))
}

pub async fn create_tax_class(data: &Value, ctx: &LsContext, client: &Client) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::POST,
        "Account.TaxClass",
        None,
        None,
        Some(data),
    )
    .await?;
    Ok(extract_filtered(&response, "TaxClass"))
}
