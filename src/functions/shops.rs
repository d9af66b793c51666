use reqwest::{Client, Method};
use serde_json::Value;

use crate::{
    client::LsContext,
    functions::ls_request,
    response::{extract_exact, extract_list},
    APIResult,
};

pub async fn get_shops(
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Shop",
        None,
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_list(&response, "Shop"))
}

pub async fn get_shop(
    shop_id: &str,
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Shop",
        Some(shop_id),
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_exact(&response, "Shop"))
}
