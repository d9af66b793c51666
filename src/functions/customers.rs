use reqwest::{Client, Method};
use serde_json::Value;

use crate::{
    client::LsContext,
    functions::{ls_request, params_or_default},
    response::{extract_filtered, extract_list},
    APIResult,
};

const CUSTOMER_DEFAULT_PARAMS: &[(&str, &str)] = &[
    ("load_relations", r#"["Contact","Tags","CustomerType"]"#),
    ("archived", "0"),
];

/// Fetches a customer with contact, tags and type loaded; archived
/// records are excluded unless the caller passes explicit parameters.
pub async fn get_customer(
    customer_id: &str,
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let params = params_or_default(ctx, params, CUSTOMER_DEFAULT_PARAMS);
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Customer",
        Some(customer_id),
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_filtered(&response, "Customer"))
}

pub async fn get_customers(
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Customer",
        None,
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_list(&response, "Customer"))
}

pub async fn create_customer(data: &Value, ctx: &LsContext, client: &Client) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::POST,
        "Account.Customer",
        None,
        None,
        Some(data),
    )
    .await?;
    Ok(extract_filtered(&response, "Customer"))
}

pub async fn update_customer(
    customer_id: &str,
    data: &Value,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::PUT,
        "Account.Customer",
        Some(customer_id),
        None,
        Some(data),
    )
    .await?;
    Ok(extract_filtered(&response, "Customer"))
}
