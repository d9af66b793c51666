//! Customer custom fields and their choices, nested under
//! `Account.Customer/CustomField`.

use reqwest::{Client, Method};
use serde_json::Value;

use crate::{
    client::LsContext,
    functions::{ls_request, params_or_default},
    response::{extract_exact, extract_filtered, extract_list},
    APIResult,
};

const CUSTOM_FIELD_CONTROL: &str = "Account.Customer/CustomField";

pub async fn get_custom_fields(
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        CUSTOM_FIELD_CONTROL,
        None,
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_list(&response, "CustomField"))
}

/// Fetches one custom field by filtering on its id rather than a path
/// segment, the way the vendor's endpoint expects.
pub async fn get_custom_field(
    custom_field_id: &str,
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let defaults = [
        ("customFieldID", custom_field_id),
        ("archived", "0"),
        ("limit", "1"),
    ];
    let params = params_or_default(ctx, params, &defaults);
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        CUSTOM_FIELD_CONTROL,
        None,
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_filtered(&response, "CustomField"))
}

pub async fn create_custom_field(
    data: &Value,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::POST,
        CUSTOM_FIELD_CONTROL,
        None,
        None,
        Some(data),
    )
    .await?;
    Ok(extract_filtered(&response, "CustomField"))
}

pub async fn delete_custom_field(
    custom_field_id: &str,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::DELETE,
        CUSTOM_FIELD_CONTROL,
        Some(custom_field_id),
        None,
        None::<&Value>,
    )
    .await?;
    Ok(extract_exact(&response, "CustomField"))
}

pub async fn get_all_custom_field_choices(
    custom_field_id: &str,
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let control = format!("{CUSTOM_FIELD_CONTROL}/{custom_field_id}/CustomFieldChoice");
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        &control,
        None,
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_list(&response, "CustomFieldChoice"))
}

pub async fn get_custom_field_choice(
    custom_field_id: &str,
    custom_field_choice_id: &str,
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let control = format!("{CUSTOM_FIELD_CONTROL}/{custom_field_id}/CustomFieldChoice");
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        &control,
        Some(custom_field_choice_id),
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_filtered(&response, "CustomFieldChoice"))
}

pub async fn create_custom_field_choice(
    custom_field_id: &str,
    data: &Value,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let control = format!("{CUSTOM_FIELD_CONTROL}/{custom_field_id}/CustomFieldChoice");
    let response = ls_request(ctx, client, Method::POST, &control, None, None, Some(data)).await?;
    Ok(extract_filtered(&response, "CustomFieldChoice"))
}
