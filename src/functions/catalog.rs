//! Catalog taxonomy resources: tags, categories and customer types.

use reqwest::{Client, Method};
use serde_json::Value;

use crate::{client::LsContext, functions::ls_request, response::extract_list, APIResult};

pub async fn get_tags(
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Tag",
        None,
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_list(&response, "Tag"))
}

pub async fn get_categories(
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Category",
        None,
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_list(&response, "Category"))
}

pub async fn get_customer_types(
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.CustomerType",
        None,
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_list(&response, "CustomerType"))
}
