use reqwest::{Client, Method};
use serde_json::Value;

use crate::{
    client::LsContext,
    functions::ls_request,
    response::{extract_exact, extract_list},
    APIResult,
};

pub async fn get_vendor(
    vendor_id: &str,
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Vendor",
        Some(vendor_id),
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_exact(&response, "Vendor"))
}

pub async fn get_vendors(
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Vendor",
        None,
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_list(&response, "Vendor"))
}
