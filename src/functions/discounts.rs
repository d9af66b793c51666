use reqwest::{Client, Method};
use serde_json::Value;

use crate::{
    client::LsContext,
    functions::ls_request,
    response::{extract_list, extract_single},
    APIResult,
};

pub async fn get_discounts(
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Discount",
        None,
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_list(&response, "Discount"))
}

pub async fn get_discount(
    discount_id: &str,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Discount",
        Some(discount_id),
        None,
        None::<&Value>,
    )
    .await?;
    Ok(extract_single(&response, "Discount"))
}

pub async fn create_discount(data: &Value, ctx: &LsContext, client: &Client) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::POST,
        "Account.Discount",
        None,
        None,
        Some(data),
    )
    .await?;
    Ok(extract_single(&response, "Discount"))
}

pub async fn update_discount(
    discount_id: &str,
    data: &Value,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::PUT,
        "Account.Discount",
        Some(discount_id),
        None,
        Some(data),
    )
    .await?;
    Ok(extract_single(&response, "Discount"))
}

pub async fn delete_discount(
    discount_id: &str,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::DELETE,
        "Account.Discount",
        Some(discount_id),
        None,
        None::<&Value>,
    )
    .await?;
    Ok(extract_single(&response, "Discount"))
}
