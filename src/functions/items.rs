use reqwest::{Client, Method};
use serde_json::Value;

use crate::{
    client::LsContext,
    functions::ls_request,
    response::{extract_list, extract_single, items_count},
    APIResult,
};

pub async fn get_item(
    item_id: &str,
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Item",
        Some(item_id),
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_single(&response, "Item"))
}

pub async fn get_items(
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Item",
        None,
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_list(&response, "Item"))
}

pub async fn create_item(data: &Value, ctx: &LsContext, client: &Client) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::POST,
        "Account.Item",
        None,
        None,
        Some(data),
    )
    .await?;
    if items_count(&response) > 0 {
        log::info!("created Item on account {}", ctx.account_id());
    }
    Ok(extract_single(&response, "Item"))
}

pub async fn update_item(
    item_id: &str,
    data: &Value,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::PUT,
        "Account.Item",
        Some(item_id),
        None,
        Some(data),
    )
    .await?;
    Ok(extract_single(&response, "Item"))
}

pub async fn delete_item(item_id: &str, ctx: &LsContext, client: &Client) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::DELETE,
        "Account.Item",
        Some(item_id),
        None,
        None::<&Value>,
    )
    .await?;
    log::info!("deleted Item {} on account {}", item_id, ctx.account_id());
    Ok(extract_single(&response, "Item"))
}
